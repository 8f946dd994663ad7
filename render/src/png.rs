//! PNG output through `plotters`.
use std::{
    error::Error,
    fs,
    ops::Range,
    path::{Path, PathBuf},
};

use plotters::{
    coord::{
        ranged1d::{KeyPointHint, NoDefaultFormatting, ValueFormatter},
        types::RangedCoordf64,
        Shift,
    },
    prelude::*,
    series::DashedLineSeries,
    style::text_anchor::{HPos, Pos, VPos},
};
use tracing::debug;

use mmreport_helper::cast::{f64_to_i32_round, f64_to_u32_round};

use crate::{
    figure::{Axis, Layout, Panel, Placement, PointStyle, Stroke, LABEL_PT, SUPTITLE_PT, TITLE_PT},
    palette, ChartSink, Figure, RenderError,
};

//---------------------------------------------------------------------------------------------------- Constants
/// Output resolution used when none is configured.
pub const DEFAULT_DPI: u32 = 300;

const FONT_FAMILY: &str = "sans-serif";

/// Annotation distance from its point, in points.
const ABOVE_PT: f64 = 10.0;
const BELOW_PT: f64 = 12.0;

const MARGIN_PT: f64 = 10.0;
const X_LABEL_AREA_PT: f64 = 30.0;
const Y_LABEL_AREA_PT: f64 = 45.0;

/// Dash and gap length of dashed lines, in points.
const DASH_PT: f64 = 4.0;
const GAP_PT: f64 = 3.0;

/// Length of the line sample in the legend, in points.
const LEGEND_SAMPLE_PT: f64 = 20.0;

type DrawResult = Result<(), Box<dyn Error>>;

//---------------------------------------------------------------------------------------------------- PngSink
/// Draws every [`Figure`] into a PNG file inside one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngSink {
    dir: PathBuf,
    dpi: u32,
}

impl PngSink {
    /// Create a sink writing into `dir` at `dpi` dots per inch.
    ///
    /// `dir` is created on the first [`ChartSink::emit`] if it does not exist.
    pub fn new(dir: impl Into<PathBuf>, dpi: u32) -> Self {
        Self {
            dir: dir.into(),
            dpi,
        }
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub const fn dpi(&self) -> u32 {
        self.dpi
    }
}

impl ChartSink for PngSink {
    fn emit(&mut self, figure: &Figure) -> Result<PathBuf, RenderError> {
        fs::create_dir_all(&self.dir).map_err(|source| RenderError::OutputDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(&figure.file_name);
        let (width, height) = figure.pixel_size(self.dpi);
        debug!("Drawing {} ({width}x{height})", path.display());

        draw_figure(&path, figure, Dpi(self.dpi)).map_err(|e| RenderError::Draw {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(path)
    }
}

//---------------------------------------------------------------------------------------------------- Dpi
/// Converts typographic points into pixels.
#[derive(Debug, Copy, Clone)]
struct Dpi(u32);

impl Dpi {
    fn pixels(self, pt: f64) -> f64 {
        pt * f64::from(self.0) / 72.0
    }

    fn px(self, pt: f64) -> u32 {
        f64_to_u32_round(self.pixels(pt)).max(1)
    }

    fn offset(self, pt: f64) -> i32 {
        f64_to_i32_round(self.pixels(pt))
    }

    fn font(self, pt: f64) -> FontDesc<'static> {
        (FONT_FAMILY, self.pixels(pt)).into_font()
    }
}

fn rgba(color: palette::Color, opacity: f64) -> RGBAColor {
    let (r, g, b) = color.rgb();
    RGBColor(r, g, b).mix(opacity)
}

fn shape_style(stroke: &Stroke, dpi: Dpi) -> ShapeStyle {
    rgba(stroke.color, stroke.opacity).stroke_width(dpi.px(stroke.width_pt))
}

/// Marker polygon around `(0, 0)`, in pixels.
fn marker_vertices(style: PointStyle, dpi: Dpi) -> Vec<(i32, i32)> {
    style
        .marker
        .vertices(dpi.pixels(style.size_pt) / 2.0)
        .into_iter()
        .map(|(dx, dy)| (f64_to_i32_round(dx), f64_to_i32_round(dy)))
        .collect()
}

//---------------------------------------------------------------------------------------------------- TickedAxis
/// An x coordinate in plot space whose mesh lines and labels sit
/// exactly on [`Axis::ticks`], labelled in data space.
struct TickedAxis {
    inner: RangedCoordf64,
    axis: Axis,
}

impl TickedAxis {
    fn new(range: Range<f64>, axis: &Axis) -> Self {
        Self {
            inner: range.into(),
            axis: axis.clone(),
        }
    }
}

impl Ranged for TickedAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        // Bold lines only.
        if hint.weight().allow_light_points() {
            vec![]
        } else {
            self.axis.plot_ticks()
        }
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

impl ValueFormatter<f64> for TickedAxis {
    fn format_ext(&self, value: &f64) -> String {
        self.axis.tick_label(*value)
    }
}

//---------------------------------------------------------------------------------------------------- Drawing
fn draw_figure(path: &Path, figure: &Figure, dpi: Dpi) -> DrawResult {
    let root = BitMapBackend::new(path, figure.pixel_size(dpi.0)).into_drawing_area();
    root.fill(&WHITE)?;

    let area = match &figure.title {
        Some(title) => root.titled(title, dpi.font(SUPTITLE_PT).style(FontStyle::Bold))?,
        None => root.clone(),
    };

    let count = figure.panels.len();
    let areas = match figure.layout {
        Layout::Single => vec![area],
        Layout::Stacked => area.split_evenly((count, 1)),
        Layout::SideBySide => area.split_evenly((1, count)),
    };

    for (area, panel) in areas.iter().zip(&figure.panels) {
        draw_panel(area, panel, dpi)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel(area: &DrawingArea<BitMapBackend<'_>, Shift>, panel: &Panel, dpi: Dpi) -> DrawResult {
    let scale = panel.x.scale;
    let y_range = panel.y_range();

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(dpi.px(MARGIN_PT))
        .x_label_area_size(dpi.px(X_LABEL_AREA_PT))
        .y_label_area_size(dpi.px(Y_LABEL_AREA_PT));
    if let Some(title) = &panel.title {
        builder.caption(title, dpi.font(TITLE_PT).style(FontStyle::Bold));
    }

    let mut chart = builder.build_cartesian_2d(
        TickedAxis::new(panel.x_range(), &panel.x),
        y_range.clone(),
    )?;

    chart
        .configure_mesh()
        .x_desc(panel.x.label.as_str())
        .y_desc(panel.y_label.as_str())
        .label_style(dpi.font(LABEL_PT))
        .axis_desc_style(dpi.font(LABEL_PT))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(TRANSPARENT)
        .draw()?;

    let dash = dpi.px(DASH_PT);
    let gap = dpi.px(GAP_PT);
    let sample = dpi.offset(LEGEND_SAMPLE_PT);

    for line in &panel.lines {
        let style = shape_style(&line.stroke, dpi);
        let fill = rgba(line.stroke.color, line.stroke.opacity).filled();
        let vertices = line.points_style.map(|p| marker_vertices(p, dpi));
        let points: Vec<(f64, f64)> = line
            .points
            .iter()
            .map(|&(x, y)| (scale.to_plot(x), y))
            .collect();

        let series = if line.stroke.dashed {
            chart.draw_series(DashedLineSeries::new(points.clone(), dash, gap, style))?
        } else {
            chart.draw_series(LineSeries::new(points.clone(), style))?
        };
        if let Some(label) = &line.label {
            series.label(label.as_str());
            match &vertices {
                // Line sample with the marker in its middle.
                Some(vertices) => {
                    let shifted: Vec<(i32, i32)> =
                        vertices.iter().map(|&(dx, dy)| (dx + sample / 2, dy)).collect();
                    series.legend(move |(x, y)| {
                        EmptyElement::at((x, y))
                            + PathElement::new(vec![(0, 0), (sample, 0)], style)
                            + Polygon::new(shifted.clone(), fill)
                    });
                }
                None => {
                    series.legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], style));
                }
            }
        }

        if let Some(vertices) = vertices {
            chart.draw_series(
                points
                    .iter()
                    .map(|&p| EmptyElement::at(p) + Polygon::new(vertices.clone(), fill)),
            )?;
        }
    }

    for marker in &panel.markers {
        let style = shape_style(&marker.stroke, dpi);
        let x = scale.to_plot(marker.x);

        chart
            .draw_series(DashedLineSeries::new(
                vec![(x, y_range.start), (x, y_range.end)],
                dash,
                gap,
                style,
            ))?
            .label(marker.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], style));
    }

    let centered = Pos::new(HPos::Center, VPos::Center);
    chart.draw_series(panel.annotations.iter().map(|a| {
        let dy = match a.placement {
            Placement::Above => -dpi.offset(ABOVE_PT),
            Placement::Below => dpi.offset(BELOW_PT),
        };
        let style = dpi
            .font(a.font_pt)
            .color(&rgba(a.color, 1.0))
            .pos(centered);

        EmptyElement::at((scale.to_plot(a.at.0), a.at.1)) + Text::new(a.text.clone(), (0, dy), style)
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(dpi.font(LABEL_PT))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()?;

    Ok(())
}
