//! Where [`Figure`]s go.
use std::path::PathBuf;

use crate::{Figure, RenderError};

/// A consumer of finished [`Figure`]s.
pub trait ChartSink {
    /// Write `figure`, returning where it was written.
    ///
    /// # Errors
    /// Implementations return [`RenderError`] if the figure could not be written.
    /// Figures emitted before the failure are kept.
    fn emit(&mut self, figure: &Figure) -> Result<PathBuf, RenderError>;
}

/// A [`ChartSink`] that keeps figures in memory instead of drawing them.
///
/// ```rust
/// # use mmreport_render::{ChartSink, Figure, Layout, RecordingSink};
/// let figure = Figure {
///     file_name: "speedup_matrix_100.png".into(),
///     title: None,
///     size_in: (10.0, 6.0),
///     layout: Layout::Single,
///     panels: vec![],
/// };
///
/// let mut sink = RecordingSink::default();
/// let path = sink.emit(&figure).unwrap();
/// assert_eq!(path.to_str(), Some("speedup_matrix_100.png"));
/// assert_eq!(sink.figures, [figure]);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSink {
    /// Every emitted figure, in order.
    pub figures: Vec<Figure>,
}

impl RecordingSink {
    /// The file names of every emitted figure, in order.
    pub fn file_names(&self) -> Vec<&str> {
        self.figures.iter().map(|f| f.file_name.as_str()).collect()
    }
}

impl ChartSink for RecordingSink {
    fn emit(&mut self, figure: &Figure) -> Result<PathBuf, RenderError> {
        self.figures.push(figure.clone());
        Ok(PathBuf::from(&figure.file_name))
    }
}
