//! Render errors.
use std::{io, path::PathBuf};

/// Errors that can happen while writing a chart.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The output directory could not be created.
    #[error("cannot create output directory `{}`: {source}", .path.display())]
    OutputDir { path: PathBuf, source: io::Error },

    /// The drawing backend failed.
    ///
    /// Missing fonts and unwritable files end up here.
    #[error("failed to draw `{}`: {message}", .path.display())]
    Draw { path: PathBuf, message: String },
}
