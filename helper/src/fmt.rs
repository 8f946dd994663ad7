//! Formatting.
//!
//! Every piece of text `mmreport` puts on a chart or in the
//! summary goes through one of these, so the two always agree.

use crate::cast::u64_to_f64;

/// Format a speedup ratio with two decimals and an `x` suffix.
///
/// ```rust
/// # use mmreport_helper::fmt::speedup;
/// assert_eq!(speedup(1.666), "1.67x");
/// assert_eq!(speedup(2.0), "2.00x");
/// ```
pub fn speedup(ratio: f64) -> String {
    format!("{ratio:.2}x")
}

/// Format microseconds in thousands with one decimal and a `k` suffix.
///
/// ```rust
/// # use mmreport_helper::fmt::kilo_micros;
/// assert_eq!(kilo_micros(600), "0.6k");
/// assert_eq!(kilo_micros(12_345), "12.3k");
/// assert_eq!(kilo_micros(0), "0.0k");
/// ```
pub fn kilo_micros(micros: u64) -> String {
    format!("{:.1}k", u64_to_f64(micros) / 1000.0)
}

/// Format a ratio as a percentage with two decimals.
///
/// ```rust
/// # use mmreport_helper::fmt::percent;
/// assert_eq!(percent(0.8), "80.00%");
/// assert_eq!(percent(1.0), "100.00%");
/// assert_eq!(percent(0.1234), "12.34%");
/// ```
pub fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Format a square matrix's dimensions.
///
/// ```rust
/// # use mmreport_helper::fmt::matrix;
/// assert_eq!(matrix(100), "100×100");
/// ```
pub fn matrix(size: u32) -> String {
    format!("{size}×{size}")
}

/// Format a thread count with the right plural.
///
/// ```rust
/// # use mmreport_helper::fmt::threads;
/// assert_eq!(threads(1), "1 thread");
/// assert_eq!(threads(8), "8 threads");
/// ```
pub fn threads(count: u32) -> String {
    if count == 1 {
        "1 thread".to_string()
    } else {
        format!("{count} threads")
    }
}
