#![doc = include_str!("../README.md")]

mod error;
mod parse;
mod read;

pub use error::{ReadError, RowError};
pub use parse::{parse_fields, parse_records, Parsed, RejectedRow};
pub use read::read_records;
