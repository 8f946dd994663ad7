//! Temporary input files.
use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// A temporary directory holding one benchmark input file.
///
/// The directory (and any charts written into it) is removed on drop.
pub struct InputDir {
    /// Kept so the directory lives as long as `self`.
    _dir: TempDir,
    input: PathBuf,
}

impl InputDir {
    /// Write `contents` into a new temporary directory as `file_name`.
    ///
    /// # Panics
    /// Panics if the directory or file cannot be created.
    pub fn new(file_name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join(file_name);
        fs::write(&input, contents).unwrap();

        Self { _dir: dir, input }
    }

    /// The input file's path.
    pub fn input(&self) -> &Path {
        &self.input
    }
}
