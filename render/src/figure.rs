//! Backend independent chart descriptions.
//!
//! A [`Figure`] holds everything needed to draw one image.
//! Coordinates are stored in data space, [`Scale`] maps them
//! into the space the backend plots in.
use std::ops::Range;

use mmreport_helper::cast::f64_to_u32_round;
use mmreport_types::Field;

use crate::palette::{Color, Marker};

//---------------------------------------------------------------------------------------------------- Constants
/// Chart title size, in points.
pub const TITLE_PT: f64 = 14.0;
/// Figure title size, in points.
pub const SUPTITLE_PT: f64 = 16.0;
/// Axis label, tick label and legend size, in points.
pub const LABEL_PT: f64 = 10.0;

/// Fraction of the data span added on each side of the x axis.
const X_PADDING: f64 = 0.05;
/// Fraction of the data span added on each side of the y axis.
///
/// Larger than [`X_PADDING`] to leave room for annotations.
const Y_PADDING: f64 = 0.15;

//---------------------------------------------------------------------------------------------------- Scale
/// How data values map onto an axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Scale {
    Linear,
    /// Equal distance for every doubling.
    Log2,
}

impl Scale {
    /// The scale used for charts whose x axis is `field`.
    pub const fn for_field(field: Field) -> Self {
        match field {
            Field::BlockSize => Self::Log2,
            Field::Matrix
            | Field::Threads
            | Field::SequentialTime
            | Field::ThreadedTime
            | Field::AsyncTime
            | Field::ThreadedSpeedup
            | Field::AsyncSpeedup => Self::Linear,
        }
    }

    /// Data space to plot space.
    pub fn to_plot(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Log2 => value.log2(),
        }
    }

    /// Plot space to data space.
    pub fn from_plot(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Log2 => value.exp2(),
        }
    }
}

//---------------------------------------------------------------------------------------------------- Axis
/// The x axis of a [`Panel`].
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    pub scale: Scale,
    /// Tick positions in data space, ascending.
    pub ticks: Vec<u32>,
}

impl Axis {
    /// The text of the tick at `plot_x`, a position in plot space.
    ///
    /// ```rust
    /// # use mmreport_render::{Axis, Scale};
    /// let axis = Axis { label: String::new(), scale: Scale::Log2, ticks: vec![32] };
    /// assert_eq!(axis.tick_label(5.0), "32");
    /// ```
    pub fn tick_label(&self, plot_x: f64) -> String {
        format!("{:.0}", self.scale.from_plot(plot_x))
    }

    /// [`Self::ticks`] in plot space.
    pub fn plot_ticks(&self) -> Vec<f64> {
        self.ticks
            .iter()
            .map(|&t| self.scale.to_plot(f64::from(t)))
            .collect()
    }
}

//---------------------------------------------------------------------------------------------------- Stroke
/// How a line is drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// `0.0` is invisible, `1.0` is opaque.
    pub opacity: f64,
    pub width_pt: f64,
    pub dashed: bool,
}

impl Stroke {
    /// An opaque solid line.
    pub const fn solid(color: Color, width_pt: f64) -> Self {
        Self {
            color,
            opacity: 1.0,
            width_pt,
            dashed: false,
        }
    }

    /// A translucent dashed line.
    pub const fn dashed(color: Color, width_pt: f64, opacity: f64) -> Self {
        Self {
            color,
            opacity,
            width_pt,
            dashed: true,
        }
    }
}

//---------------------------------------------------------------------------------------------------- Line
/// The marker drawn at each point of a [`Line`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointStyle {
    pub marker: Marker,
    /// Marker diameter, in points.
    pub size_pt: f64,
}

/// A polyline through data points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Legend entry, [`None`] for no entry.
    pub label: Option<String>,
    pub stroke: Stroke,
    pub points_style: Option<PointStyle>,
    /// `(x, y)` in data space, in drawing order.
    pub points: Vec<(f64, f64)>,
}

/// A vertical line spanning the whole panel, marking an optimum.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalMarker {
    /// In data space.
    pub x: f64,
    pub label: String,
    pub stroke: Stroke,
}

/// Which side of its point an [`Annotation`] sits on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    Above,
    Below,
}

/// A short text attached to a data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// `(x, y)` in data space.
    pub at: (f64, f64),
    pub text: String,
    pub color: Color,
    pub placement: Placement,
    pub font_pt: f64,
}

//---------------------------------------------------------------------------------------------------- Panel
/// One set of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: Option<String>,
    pub x: Axis,
    pub y_label: String,
    pub lines: Vec<Line>,
    pub markers: Vec<VerticalMarker>,
    pub annotations: Vec<Annotation>,
}

impl Panel {
    /// The x range in plot space: every point, marker and tick, padded.
    pub fn x_range(&self) -> Range<f64> {
        let scale = self.x.scale;
        let xs = self
            .lines
            .iter()
            .flat_map(|l| l.points.iter().map(|p| p.0))
            .chain(self.markers.iter().map(|m| m.x))
            .chain(self.x.ticks.iter().map(|&t| f64::from(t)))
            .map(|x| scale.to_plot(x));

        padded(xs, X_PADDING)
    }

    /// The y range: every point, padded.
    pub fn y_range(&self) -> Range<f64> {
        let ys = self.lines.iter().flat_map(|l| l.points.iter().map(|p| p.1));
        padded(ys, Y_PADDING)
    }
}

/// The range covering `values`, widened by `fraction` of its span on each side.
///
/// A single value gets a span of `1.0`, no values give `0.0..1.0`.
fn padded(values: impl Iterator<Item = f64>, fraction: f64) -> Range<f64> {
    let bounds = values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        });

    let Some((lo, hi)) = bounds else {
        return 0.0..1.0;
    };

    let span = hi - lo;
    let pad = if span > 0.0 { span * fraction } else { 0.5 };
    (lo - pad)..(hi + pad)
}

//---------------------------------------------------------------------------------------------------- Figure
/// How the panels of a [`Figure`] are arranged.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Layout {
    Single,
    /// One above the other.
    Stacked,
    SideBySide,
}

/// One output image.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// File name inside the output directory.
    pub file_name: String,
    /// Title above all panels.
    pub title: Option<String>,
    /// `(width, height)` in inches.
    pub size_in: (f64, f64),
    pub layout: Layout,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// `(width, height)` in pixels at `dpi` dots per inch.
    ///
    /// ```rust
    /// # use mmreport_render::{Figure, Layout};
    /// let figure = Figure {
    ///     file_name: "a.png".into(),
    ///     title: None,
    ///     size_in: (12.0, 8.0),
    ///     layout: Layout::Single,
    ///     panels: vec![],
    /// };
    /// assert_eq!(figure.pixel_size(300), (3600, 2400));
    /// assert_eq!(figure.pixel_size(100), (1200, 800));
    /// ```
    pub fn pixel_size(&self, dpi: u32) -> (u32, u32) {
        let dpi = f64::from(dpi);
        (
            f64_to_u32_round(self.size_in.0 * dpi),
            f64_to_u32_round(self.size_in.1 * dpi),
        )
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn panel(scale: Scale, points: Vec<(f64, f64)>) -> Panel {
        Panel {
            title: None,
            x: Axis {
                label: String::new(),
                scale,
                ticks: vec![],
            },
            y_label: String::new(),
            lines: vec![Line {
                label: None,
                stroke: Stroke::solid(Color::Black, 1.0),
                points_style: None,
                points,
            }],
            markers: vec![],
            annotations: vec![],
        }
    }

    #[test]
    fn scale_round_trips() {
        assert_eq!(Scale::Log2.to_plot(64.0), 6.0);
        assert_eq!(Scale::Log2.from_plot(6.0), 64.0);
        assert_eq!(Scale::Linear.to_plot(7.0), 7.0);
        assert_eq!(Scale::for_field(Field::BlockSize), Scale::Log2);
        assert_eq!(Scale::for_field(Field::Threads), Scale::Linear);
    }

    #[test]
    fn log2_ranges_are_in_plot_space() {
        let panel = panel(Scale::Log2, vec![(16.0, 1.0), (64.0, 3.0)]);

        // 4..6, padded by 5% of 2.
        let x = panel.x_range();
        assert!((x.start - 3.9).abs() < 1e-12);
        assert!((x.end - 6.1).abs() < 1e-12);
        // 1..3, padded by 15% of 2.
        let y = panel.y_range();
        assert!((y.start - 0.7).abs() < 1e-12);
        assert!((y.end - 3.3).abs() < 1e-12);
    }

    #[test]
    fn markers_and_ticks_widen_the_x_range() {
        let mut panel = panel(Scale::Linear, vec![(2.0, 1.0), (4.0, 2.0)]);
        panel.x.ticks = vec![1];
        panel.markers.push(VerticalMarker {
            x: 11.0,
            label: String::new(),
            stroke: Stroke::dashed(Color::Red, 1.0, 0.7),
        });

        assert_eq!(panel.x_range(), 0.5..11.5);
    }

    #[test]
    fn degenerate_ranges() {
        let single = panel(Scale::Linear, vec![(4.0, 2.0)]);
        assert_eq!(single.x_range(), 3.5..4.5);
        assert_eq!(single.y_range(), 1.5..2.5);

        let empty = panel(Scale::Linear, vec![]);
        assert_eq!(empty.x_range(), 0.0..1.0);
    }

    #[test]
    fn tick_labels() {
        let axis = Axis {
            label: String::new(),
            scale: Scale::Log2,
            ticks: vec![1, 8, 256],
        };
        assert_eq!(axis.plot_ticks(), [0.0, 3.0, 8.0]);
        let labels: Vec<String> = axis.plot_ticks().into_iter().map(|t| axis.tick_label(t)).collect();
        assert_eq!(labels, ["1", "8", "256"]);

        let axis = Axis {
            scale: Scale::Linear,
            ..axis
        };
        assert_eq!(axis.tick_label(12.0), "12");
    }
}
