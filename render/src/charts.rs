//! [`Figure`]s built from [`Group`]s.
use std::collections::BTreeMap;

use strum::VariantArray;

use mmreport_analysis::{ByConfiguration, ByMatrixSize, Configuration, Group, GroupingStrategy};
use mmreport_helper::{
    cast::u64_to_f64,
    fmt::{kilo_micros, matrix, speedup, threads},
};
use mmreport_types::Series;

use crate::{
    figure::{
        Annotation, Axis, Figure, Layout, Line, Panel, Placement, PointStyle, Scale, Stroke,
        VerticalMarker,
    },
    palette::{cycle, series_color, Color, Marker},
};

//---------------------------------------------------------------------------------------------------- Constants
/// Name of the block size comparison image.
pub const BLOCK_SIZE_COMPARISON_FILE: &str = "block_size_comparison.png";
/// Name of the thread count comparison image.
pub const THREAD_COMPARISON_FILE: &str = "speedup_comparison.png";

const SPEEDUP_LABEL: &str = "Speedup (x)";
const TIME_LABEL: &str = "Execution time (µs)";
const BLOCK_SIZE_LABEL: &str = "Block size";
const THREADS_LABEL: &str = "Threads";

const LINE_PT: f64 = 2.0;

//---------------------------------------------------------------------------------------------------- Block size report
/// Two stacked panels for one (matrix size, thread count) configuration:
/// speedup and execution time against block size.
pub fn block_size_detail(group: &Group<'_, ByConfiguration>) -> Figure {
    let Configuration {
        matrix_size,
        thread_count,
    } = group.key();
    let xs = group.xs();
    let axis = Axis {
        label: BLOCK_SIZE_LABEL.to_string(),
        scale: Scale::for_field(ByConfiguration::INDEPENDENT),
        ticks: xs.clone(),
    };

    let speedup_panel = Panel {
        title: Some(format!(
            "Speedup vs block size, matrix {}, {}",
            matrix(matrix_size),
            threads(thread_count)
        )),
        x: axis.clone(),
        y_label: SPEEDUP_LABEL.to_string(),
        lines: Series::VARIANTS
            .iter()
            .map(|&series| series_line(series, series.to_string(), &xs, &group.speedups(series), 8.0))
            .collect(),
        markers: Series::VARIANTS
            .iter()
            .map(|&series| {
                let optimum = group.optimum(series);
                VerticalMarker {
                    x: f64::from(optimum.x),
                    label: format!("Optimum {}: {}", series.short_name(), optimum.x),
                    stroke: Stroke::dashed(series_color(series), 1.5, 0.7),
                }
            })
            .collect(),
        annotations: annotations(
            &xs,
            &group.speedups(Series::Threaded),
            &group.speedups(Series::Async),
            |s| s,
            speedup,
            8.0,
        ),
    };

    let times = |series| -> Vec<f64> { group.times_us(series).into_iter().map(u64_to_f64).collect() };
    let time_panel = Panel {
        title: None,
        x: axis,
        y_label: TIME_LABEL.to_string(),
        lines: Series::VARIANTS
            .iter()
            .map(|&series| series_line(series, format!("{series} time"), &xs, &times(series), 6.0))
            .collect(),
        markers: vec![],
        annotations: annotations(
            &xs,
            &group.times_us(Series::Threaded),
            &group.times_us(Series::Async),
            u64_to_f64,
            kilo_micros,
            7.0,
        ),
    };

    Figure {
        file_name: format!("block_size_matrix_{matrix_size}_threads_{thread_count}.png"),
        title: None,
        size_in: (12.0, 8.0),
        layout: Layout::Stacked,
        panels: vec![speedup_panel, time_panel],
    }
}

/// One panel per [`Series`], with one line per configuration.
pub fn block_size_comparison(groups: &BTreeMap<Configuration, Group<'_, ByConfiguration>>) -> Figure {
    comparison(
        groups,
        "Block size impact on speedup",
        BLOCK_SIZE_COMPARISON_FILE,
        BLOCK_SIZE_LABEL,
        |key| format!("{}, {}", matrix(key.matrix_size), threads(key.thread_count)),
        |_| None,
    )
}

//---------------------------------------------------------------------------------------------------- Thread count report
/// Speedup against thread count for one matrix size, with the ideal speedup for reference.
pub fn thread_speedup(group: &Group<'_, ByMatrixSize>) -> Figure {
    let size = group.key();
    let xs = group.xs();

    let mut lines: Vec<Line> = Series::VARIANTS
        .iter()
        .map(|&series| series_line(series, series.to_string(), &xs, &group.speedups(series), 8.0))
        .collect();
    lines.push(ideal_line(
        "Ideal speedup",
        Stroke::dashed(Color::Green, 1.0, 0.7),
        xs.iter().copied(),
    ));

    let panel = Panel {
        title: Some(format!("Speedup vs thread count, matrix {}", matrix(size))),
        x: Axis {
            label: THREADS_LABEL.to_string(),
            scale: Scale::for_field(ByMatrixSize::INDEPENDENT),
            ticks: xs.clone(),
        },
        y_label: SPEEDUP_LABEL.to_string(),
        lines,
        markers: vec![],
        annotations: annotations(
            &xs,
            &group.speedups(Series::Threaded),
            &group.speedups(Series::Async),
            |s| s,
            speedup,
            9.0,
        ),
    };

    Figure {
        file_name: format!("speedup_matrix_{size}.png"),
        title: None,
        size_in: (10.0, 6.0),
        layout: Layout::Single,
        panels: vec![panel],
    }
}

/// One panel per [`Series`], with one line per matrix size
/// and the ideal speedup over `1..=max_threads`.
pub fn thread_comparison(groups: &BTreeMap<u32, Group<'_, ByMatrixSize>>, max_threads: u32) -> Figure {
    comparison(
        groups,
        "Speedup across matrix sizes",
        THREAD_COMPARISON_FILE,
        THREADS_LABEL,
        matrix,
        |_| {
            Some(ideal_line(
                "Ideal",
                Stroke::dashed(Color::Black, 1.0, 0.5),
                1..=max_threads,
            ))
        },
    )
}

//---------------------------------------------------------------------------------------------------- Shared
/// A solid line in the color of `series`.
fn series_line(series: Series, label: String, xs: &[u32], ys: &[f64], marker_pt: f64) -> Line {
    Line {
        label: Some(label),
        stroke: Stroke::solid(series_color(series), LINE_PT),
        points_style: Some(PointStyle {
            marker: Marker::Circle,
            size_pt: marker_pt,
        }),
        points: xs.iter().map(|&x| f64::from(x)).zip(ys.iter().copied()).collect(),
    }
}

/// The `y == x` diagonal over `xs`.
fn ideal_line(label: &str, stroke: Stroke, xs: impl Iterator<Item = u32>) -> Line {
    Line {
        label: Some(label.to_string()),
        stroke,
        points_style: None,
        points: xs.map(|x| (f64::from(x), f64::from(x))).collect(),
    }
}

/// `std::thread` values above their points, `std::async` values below.
fn annotations<T: Copy>(
    xs: &[u32],
    threaded: &[T],
    asynchronous: &[T],
    y: impl Fn(T) -> f64,
    text: impl Fn(T) -> String,
    font_pt: f64,
) -> Vec<Annotation> {
    let mut out = Vec::with_capacity(xs.len() * 2);

    for ((&x, &t), &a) in xs.iter().zip(threaded).zip(asynchronous) {
        let x = f64::from(x);
        for (series, value, placement) in [
            (Series::Threaded, t, Placement::Above),
            (Series::Async, a, Placement::Below),
        ] {
            out.push(Annotation {
                at: (x, y(value)),
                text: text(value),
                color: series_color(series),
                placement,
                font_pt,
            });
        }
    }

    out
}

/// Side by side speedup panels, one line per group styled from the palette.
fn comparison<S: GroupingStrategy>(
    groups: &BTreeMap<S::Key, Group<'_, S>>,
    title: &str,
    file_name: &str,
    x_label: &str,
    label: impl Fn(S::Key) -> String,
    extra: impl Fn(Series) -> Option<Line>,
) -> Figure {
    let mut ticks: Vec<u32> = groups.values().flat_map(Group::xs).collect();
    ticks.sort_unstable();
    ticks.dedup();

    let panels = Series::VARIANTS
        .iter()
        .map(|&series| {
            let mut lines: Vec<Line> = groups
                .values()
                .enumerate()
                .map(|(i, group)| {
                    let (color, marker) = cycle(i);
                    Line {
                        label: Some(label(group.key())),
                        stroke: Stroke::solid(color, LINE_PT),
                        points_style: Some(PointStyle {
                            marker,
                            size_pt: 6.0,
                        }),
                        points: group
                            .xs()
                            .into_iter()
                            .map(f64::from)
                            .zip(group.speedups(series))
                            .collect(),
                    }
                })
                .collect();
            lines.extend(extra(series));

            Panel {
                title: Some(series.to_string()),
                x: Axis {
                    label: x_label.to_string(),
                    scale: Scale::for_field(S::INDEPENDENT),
                    ticks: ticks.clone(),
                },
                y_label: SPEEDUP_LABEL.to_string(),
                lines,
                markers: vec![],
                annotations: vec![],
            }
        })
        .collect();

    Figure {
        file_name: file_name.to_string(),
        title: Some(title.to_string()),
        size_in: (16.0, 6.0),
        layout: Layout::SideBySide,
        panels,
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use mmreport_analysis::group_records;
    use mmreport_parser::parse_records;
    use mmreport_test_utils::{
        data::{COMPARE_BLOCKS, COMPARE_THREADS},
        record::record,
    };
    use mmreport_types::BenchmarkRecord;

    use super::*;
    use crate::palette::PALETTE;

    fn texts(annotations: &[Annotation], placement: Placement) -> Vec<&str> {
        annotations
            .iter()
            .filter(|a| a.placement == placement)
            .map(|a| a.text.as_str())
            .collect()
    }

    #[test]
    fn detail_chart() {
        let records = [
            record(100, 2, 32, 2.0, 1.92),
            record(100, 2, 16, 1.67, 1.54),
        ];
        let groups = group_records::<ByConfiguration>(&records);
        let figure = block_size_detail(groups.values().next().unwrap());

        assert_eq!(figure.file_name, "block_size_matrix_100_threads_2.png");
        assert_eq!(figure.layout, Layout::Stacked);
        assert_eq!(figure.size_in, (12.0, 8.0));
        assert_eq!(figure.panels.len(), 2);

        let top = &figure.panels[0];
        assert_eq!(top.x.scale, Scale::Log2);
        assert_eq!(top.x.ticks, [16, 32]);
        assert_eq!(top.lines.len(), 2);
        assert_eq!(top.lines[0].label.as_deref(), Some("std::thread"));
        assert_eq!(top.lines[0].points, [(16.0, 1.67), (32.0, 2.0)]);
        assert_eq!(top.lines[1].stroke.color, Color::Red);

        let markers: Vec<(f64, &str)> = top.markers.iter().map(|m| (m.x, m.label.as_str())).collect();
        assert_eq!(markers, [(32.0, "Optimum threads: 32"), (32.0, "Optimum async: 32")]);
        assert!(top.markers.iter().all(|m| m.stroke.dashed));

        assert_eq!(texts(&top.annotations, Placement::Above), ["1.67x", "2.00x"]);
        assert_eq!(texts(&top.annotations, Placement::Below), ["1.54x", "1.92x"]);

        let bottom = &figure.panels[1];
        assert_eq!(bottom.x, top.x);
        assert_eq!(bottom.lines[0].label.as_deref(), Some("std::thread time"));
        assert_eq!(bottom.lines[0].points, [(16.0, 598.0), (32.0, 500.0)]);
        assert_eq!(texts(&bottom.annotations, Placement::Above), ["0.6k", "0.5k"]);
        assert!(bottom.markers.is_empty());
    }

    #[test]
    fn per_matrix_chart_has_ideal_diagonal() {
        let records = [
            record(200, 8, 32, 6.1, 5.9),
            record(200, 2, 32, 1.9, 1.8),
            record(200, 4, 32, 3.6, 3.5),
        ];
        let groups = group_records::<ByMatrixSize>(&records);
        let figure = thread_speedup(&groups[&200]);

        assert_eq!(figure.file_name, "speedup_matrix_200.png");
        assert_eq!(figure.size_in, (10.0, 6.0));
        assert_eq!(figure.layout, Layout::Single);

        let panel = &figure.panels[0];
        assert_eq!(panel.x.scale, Scale::Linear);
        assert_eq!(panel.lines.len(), 3);

        let ideal = &panel.lines[2];
        assert_eq!(ideal.label.as_deref(), Some("Ideal speedup"));
        assert!(ideal.stroke.dashed);
        assert_eq!(ideal.points, [(2.0, 2.0), (4.0, 4.0), (8.0, 8.0)]);

        assert_eq!(texts(&panel.annotations, Placement::Above), ["1.90x", "3.60x", "6.10x"]);
        assert!(panel.annotations.iter().all(|a| a.font_pt == 9.0));
    }

    #[test]
    fn block_comparison_from_fixture() {
        let parsed = parse_records(COMPARE_BLOCKS.as_bytes());
        let groups = group_records::<ByConfiguration>(&parsed.records);
        let figure = block_size_comparison(&groups);

        assert_eq!(figure.file_name, BLOCK_SIZE_COMPARISON_FILE);
        assert_eq!(figure.layout, Layout::SideBySide);
        assert_eq!(figure.size_in, (16.0, 6.0));

        let titles: Vec<Option<&str>> = figure.panels.iter().map(|p| p.title.as_deref()).collect();
        assert_eq!(titles, [Some("std::thread"), Some("std::async")]);

        for panel in &figure.panels {
            assert_eq!(panel.x.scale, Scale::Log2);
            assert_eq!(panel.lines.len(), groups.len());
            assert_eq!(panel.lines[0].label.as_deref(), Some("100×100, 4 threads"));
            assert!(panel.x.ticks.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn thread_comparison_from_fixture() {
        let parsed = parse_records(COMPARE_THREADS.as_bytes());
        let groups = group_records::<ByMatrixSize>(&parsed.records);
        let figure = thread_comparison(&groups, 16);

        assert_eq!(figure.file_name, THREAD_COMPARISON_FILE);

        for panel in &figure.panels {
            assert_eq!(panel.lines.len(), groups.len() + 1);
            let ideal = panel.lines.last().unwrap();
            assert_eq!(ideal.label.as_deref(), Some("Ideal"));
            assert_eq!(ideal.stroke.color, Color::Black);
            assert_eq!(ideal.points.len(), 16);
            assert_eq!(ideal.points[0], (1.0, 1.0));
            assert_eq!(ideal.points[15], (16.0, 16.0));
        }
    }

    #[test]
    fn comparison_palette_cycles() {
        let records: Vec<BenchmarkRecord> = (1..=PALETTE.len() + 1)
            .map(|i| record(u32::try_from(i).unwrap() * 100, 4, 32, 2.0, 1.5))
            .collect();
        let groups = group_records::<ByConfiguration>(&records);
        let figure = block_size_comparison(&groups);

        let styles: Vec<(Color, Marker)> = figure.panels[0]
            .lines
            .iter()
            .map(|l| (l.stroke.color, l.points_style.unwrap().marker))
            .collect();

        assert_eq!(styles.len(), PALETTE.len() + 1);
        assert_eq!(styles[..PALETTE.len()], PALETTE);
        assert_eq!(styles[PALETTE.len()], PALETTE[0]);
    }
}
