//! Absolute value, rounding and integer/fraction split.
//!
//! All three rounding functions start from truncation toward zero and compare
//! the input against it with exact equality.

use crate::FloatScalar;

/// `-x` for negative `x`, otherwise `x` (so `abs(-0.0)` is `-0.0`).
#[inline]
pub fn abs<T: FloatScalar>(x: T) -> T {
    if x < T::zero() {
        -x
    } else {
        x
    }
}

/// Smallest integer not less than `x`.
///
/// Results beyond the `i64` range saturate.
///
/// # Example
///
/// ```
/// use elementa::scalar::ceil;
///
/// assert_eq!(ceil(2.5_f64), 3);
/// assert_eq!(ceil(-2.5_f64), -2);
/// assert_eq!(ceil(3.0_f64), 3);
/// ```
pub fn ceil<T: FloatScalar>(x: T) -> i64 {
    let int_part = x.trunc_i64();
    if x == T::from_int(int_part) {
        return int_part;
    }
    if x > T::zero() {
        int_part.saturating_add(1)
    } else {
        int_part
    }
}

/// Largest integer not greater than `x`.
///
/// Results beyond the `i64` range saturate.
///
/// # Example
///
/// ```
/// use elementa::scalar::floor;
///
/// assert_eq!(floor(2.5_f64), 2);
/// assert_eq!(floor(-2.5_f64), -3);
/// ```
pub fn floor<T: FloatScalar>(x: T) -> i64 {
    let int_part = x.trunc_i64();
    if x == T::from_int(int_part) {
        return int_part;
    }
    if x > T::zero() {
        int_part
    } else {
        int_part.saturating_sub(1)
    }
}

/// Split `x` into integer and fractional parts.
///
/// Writes the truncated integer part into `integer` and returns
/// `x - integer`, which carries the sign of `x`.
///
/// # Example
///
/// ```
/// use elementa::scalar::modf;
///
/// let mut i = 0;
/// assert_eq!(modf(-3.75_f64, &mut i), -0.75);
/// assert_eq!(i, -3);
/// ```
pub fn modf<T: FloatScalar>(x: T, integer: &mut i64) -> T {
    *integer = x.trunc_i64();
    x - T::from_int(*integer)
}
