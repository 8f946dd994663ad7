#![doc = include_str!("../README.md")]

mod charts;
mod error;
mod figure;
mod png;
mod sink;

pub mod palette;

pub use charts::{
    block_size_comparison, block_size_detail, thread_comparison, thread_speedup,
    BLOCK_SIZE_COMPARISON_FILE, THREAD_COMPARISON_FILE,
};
pub use error::RenderError;
pub use figure::{
    Annotation, Axis, Figure, Layout, Line, Panel, Placement, PointStyle, Scale, Stroke,
    VerticalMarker, LABEL_PT, SUPTITLE_PT, TITLE_PT,
};
pub use png::{PngSink, DEFAULT_DPI};
pub use sink::{ChartSink, RecordingSink};
