//! Trigonometric functions in degrees and radians.
//!
//! The radian variants reduce the angle into `[0, 2π)`, return exact values
//! at the canonical angles `0, π/2, π, 3π/2, 2π` (bitwise equality against
//! the [`PI`] literal, no tolerance band), and otherwise sum the first ten
//! Maclaurin terms. The series is accurate to ~1e-4 up to 5π/3 (300°) and
//! drifts to a few 1e-3 as the reduced angle approaches 2π.

use crate::consts::PI;
use crate::FloatScalar;

use super::{factorial, pow, SERIES_TERMS};

/// Degrees to radians, `deg·π/180` evaluated left to right.
#[inline]
fn to_radians<T: FloatScalar>(degrees: T) -> T {
    degrees * T::literal(PI) / T::literal(180.0)
}

/// Reduce an angle into `[0, 2π)`.
///
/// A single exact `fmod` replaces repeated subtraction of 2π. An exact
/// multiple of 2π lands on `0` rather than `2π`; both take the same
/// canonical-angle shortcut. Non-finite input yields NaN.
#[inline]
fn reduce_angle<T: FloatScalar>(radians: T) -> T {
    let two_pi = T::literal(2.0) * T::literal(PI);
    let r = radians % two_pi;
    if r < T::zero() {
        r + two_pi
    } else {
        r
    }
}

/// Cosine of an angle in degrees.
///
/// ```
/// use elementa::scalar::cos;
///
/// assert_eq!(cos(0.0_f64), 1.0);
/// assert_eq!(cos(180.0_f64), -1.0);
/// assert!((cos(60.0_f64) - 0.5).abs() < 1e-12);
/// ```
pub fn cos<T: FloatScalar>(degrees: T) -> T {
    cosr(to_radians(degrees))
}

/// Sine of an angle in degrees.
///
/// ```
/// use elementa::scalar::sin;
///
/// assert_eq!(sin(90.0_f64), 1.0);
/// assert!((sin(30.0_f64) - 0.5).abs() < 1e-12);
/// ```
pub fn sin<T: FloatScalar>(degrees: T) -> T {
    sinr(to_radians(degrees))
}

/// Tangent of an angle in degrees. See [`tanr`].
pub fn tan<T: FloatScalar>(degrees: T) -> T {
    tanr(to_radians(degrees))
}

/// Cosine of an angle in radians.
pub fn cosr<T: FloatScalar>(radians: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::literal(2.0);
    let pi = T::literal(PI);

    let radians = reduce_angle(radians);

    if radians == zero || radians == two * pi {
        return one;
    } else if radians == pi / two || radians == T::literal(3.0) * pi / two {
        return zero;
    } else if radians == pi {
        return -one;
    }

    let mut val = zero;
    for i in 0..SERIES_TERMS {
        let n = 2 * i;
        val = val
            + pow(-one, i64::from(i)) * pow(radians, i64::from(n))
                / T::from_count(factorial(u64::from(n)));
    }
    val
}

/// Sine of an angle in radians.
pub fn sinr<T: FloatScalar>(radians: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::literal(2.0);
    let pi = T::literal(PI);

    let radians = reduce_angle(radians);

    if radians == zero || radians == two * pi || radians == pi {
        return zero;
    } else if radians == pi / two {
        return one;
    } else if radians == T::literal(3.0) * pi / two {
        return -one;
    }

    let mut val = zero;
    for i in 0..SERIES_TERMS {
        let n = 2 * i + 1;
        val = val
            + pow(-one, i64::from(i)) * pow(radians, i64::from(n))
                / T::from_count(factorial(u64::from(n)));
    }
    val
}

/// Tangent of an angle in radians, `sinr / cosr`.
///
/// Where the cosine is exactly zero the division is left to IEEE rules:
/// `tanr(π/2)` is `+∞`.
pub fn tanr<T: FloatScalar>(radians: T) -> T {
    sinr(radians) / cosr(radians)
}
