use std::{
    io,
    num::{ParseFloatError, ParseIntError},
    path::PathBuf,
};

use mmreport_types::Field;

/// Why a single row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The row has fewer fields than the schema.
    #[error("missing field `{0}`")]
    MissingField(Field),

    /// An integer field did not parse.
    #[error("invalid integer {value:?} in field `{field}`: {source}")]
    InvalidInteger {
        field: Field,
        value: String,
        source: ParseIntError,
    },

    /// A floating point field did not parse.
    #[error("invalid number {value:?} in field `{field}`: {source}")]
    InvalidFloat {
        field: Field,
        value: String,
        source: ParseFloatError,
    },

    /// A size, count or ratio that must be strictly positive was not.
    #[error("field `{field}` must be positive, got {value:?}")]
    NotPositive { field: Field, value: String },

    /// The CSV reader could not split the line into fields.
    #[error("malformed row: {0}")]
    Malformed(String),
}

/// The input file could not be read.
#[derive(Debug, thiserror::Error)]
#[error("failed to read `{}`: {source}", .path.display())]
pub struct ReadError {
    /// The file that was being read.
    pub path: PathBuf,
    /// The underlying I/O error.
    pub source: io::Error,
}
