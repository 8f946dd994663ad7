#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
pub mod field;
pub mod record;
pub mod series;

pub use field::Field;
pub use record::BenchmarkRecord;
pub use series::Series;
