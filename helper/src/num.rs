//! Number related

//---------------------------------------------------------------------------------------------------- Use
use core::cmp::Ordering;

//---------------------------------------------------------------------------------------------------- Types
// INVARIANT: must be private.
// Protects against outside-crate implementations.
mod private {
    pub trait Sealed: Copy + PartialOrd<Self> + core::fmt::Display {}
}

/// Floating point numbers
///
/// This trait is sealed and is only implemented on:
/// - [`f32`]
/// - [`f64`]
pub trait Float: private::Sealed {}
macro_rules! impl_float {
    ($($num:ty),* $(,)?) => {
        $(
            impl Float for $num {}
            impl private::Sealed for $num {}
        )*
    };
}
impl_float!(f32, f64);

//---------------------------------------------------------------------------------------------------- Free Functions
#[inline]
/// Compare 2 floats, `NaN`'s will always return [`Ordering::Equal`].
///
/// ```rust
/// # use mmreport_helper::num::*;
/// # use core::cmp::Ordering;
/// assert_eq!(cmp_float_nan(0.0, 1.0), Ordering::Less);
/// assert_eq!(cmp_float_nan(1.0, 1.0), Ordering::Equal);
/// assert_eq!(cmp_float_nan(2.0, 1.0), Ordering::Greater);
///
/// assert_eq!(cmp_float_nan(1.0,           f32::INFINITY), Ordering::Less);
/// assert_eq!(cmp_float_nan(f32::INFINITY, 1.0),           Ordering::Greater);
///
/// assert_eq!(cmp_float_nan(f32::NAN, 0.0),      Ordering::Equal);
/// assert_eq!(cmp_float_nan(f32::NAN, f32::NAN), Ordering::Equal);
/// ```
pub fn cmp_float_nan<F: Float>(a: F, b: F) -> Ordering {
    match (a <= b, a >= b) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[inline]
/// Returns the index of the largest value, or [`None`] if `iter` is empty.
///
/// Ties keep the first occurrence, unlike [`Iterator::max_by`]
/// which keeps the last. `NaN`s never replace the current maximum.
///
/// ```rust
/// # use mmreport_helper::num::*;
/// assert_eq!(first_max_position([1.0, 3.0, 2.0]), Some(1));
/// assert_eq!(first_max_position([2.0, 5.0, 5.0, 1.0]), Some(1));
/// assert_eq!(first_max_position([f64::NAN, 1.0]), Some(0));
/// assert_eq!(first_max_position([0.5_f32]), Some(0));
/// assert_eq!(first_max_position(Vec::<f64>::new()), None);
/// ```
pub fn first_max_position<F: Float>(iter: impl IntoIterator<Item = F>) -> Option<usize> {
    let mut iter = iter.into_iter().enumerate();
    let (mut best_index, mut best) = iter.next()?;

    for (index, value) in iter {
        if cmp_float_nan(value, best) == Ordering::Greater {
            best_index = index;
            best = value;
        }
    }

    Some(best_index)
}
