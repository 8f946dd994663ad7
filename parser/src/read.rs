use std::{fs, path::Path};

use crate::{parse_records, Parsed, ReadError};

/// Read and parse the benchmark file at `path`.
///
/// The whole file is read into memory before parsing starts.
///
/// # Errors
/// Returns [`ReadError`] if the file cannot be read. Malformed rows
/// are never an error, they end up in [`Parsed::rejected`].
pub fn read_records(path: impl AsRef<Path>) -> Result<Parsed, ReadError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(parse_records(&bytes))
}
