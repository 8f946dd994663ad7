//! Casting.
//!
//! This module provides the few lossy casts `mmreport` needs.
//! They live here so the lint exceptions live in one place.

#![allow(clippy::cast_precision_loss)]

/// Cast [`u64`] to [`f64`].
///
/// Values above `2^53` lose precision, which is far
/// beyond any benchmark duration in microseconds.
///
/// ```rust
/// # use mmreport_helper::cast::u64_to_f64;
/// assert_eq!(u64_to_f64(1500), 1500.0);
/// ```
#[inline(always)]
pub const fn u64_to_f64(u: u64) -> f64 {
    u as f64
}

/// Round a non-negative [`f64`] to the nearest [`u32`], saturating at the bounds.
///
/// `NaN` maps to `0`.
///
/// ```rust
/// # use mmreport_helper::cast::f64_to_u32_round;
/// assert_eq!(f64_to_u32_round(15.999), 16);
/// assert_eq!(f64_to_u32_round(-3.0), 0);
/// assert_eq!(f64_to_u32_round(f64::NAN), 0);
/// assert_eq!(f64_to_u32_round(1e20), u32::MAX);
/// ```
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_u32_round(f: f64) -> u32 {
    // `as` saturates and maps NaN to 0.
    f.round() as u32
}

/// Round an [`f64`] to the nearest [`i32`], saturating at the bounds.
///
/// `NaN` maps to `0`.
///
/// ```rust
/// # use mmreport_helper::cast::f64_to_i32_round;
/// assert_eq!(f64_to_i32_round(-41.6), -42);
/// assert_eq!(f64_to_i32_round(f64::NAN), 0);
/// assert_eq!(f64_to_i32_round(-1e20), i32::MIN);
/// ```
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_round(f: f64) -> i32 {
    f.round() as i32
}
