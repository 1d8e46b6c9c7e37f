//! Inverse trigonometric functions, results in radians.

use crate::consts::PI;
use crate::FloatScalar;

use super::{factorial, pow, DomainError, SENTINEL, SERIES_TERMS};

/// Arctangent.
///
/// Sums ten terms of `x - x³/3 + x⁵/5 - …` for `|x| ≤ 1`. Larger arguments
/// go through `atan(x) = ±π/2 - atan(1/x)`, one level deep. Convergence is
/// slow near `|x| = 1`: `atan(1)` is about `0.76`.
///
/// # Example
///
/// ```
/// use elementa::scalar::atan;
///
/// assert_eq!(atan(0.0_f64), 0.0);
/// assert!((atan(0.5_f64) - 0.4636476090008061).abs() < 1e-7);
/// assert!((atan(3.0_f64) - 1.2490457723982544).abs() < 1e-7);
/// ```
pub fn atan<T: FloatScalar>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let half_pi = T::literal(PI) / T::literal(2.0);

    if x == zero {
        return zero;
    }
    if x > one {
        return half_pi - atan(one / x);
    } else if x < -one {
        return -half_pi - atan(one / x);
    }

    let mut val = zero;
    for i in 0..SERIES_TERMS {
        let n = 2 * i + 1;
        val = val + pow(-one, i64::from(i)) * pow(x, i64::from(n)) / T::from_count(u64::from(n));
    }
    val
}

/// Arcsine, or `-1` outside `[-1, 1]`.
///
/// Ten terms of the binomial series
/// `Σ (2i)! x^(2i+1) / (4^i (i!)² (2i+1))`. Accurate to ~1e-8 for
/// `|x| ≤ 0.5`; at `|x| = 1` the truncated series falls short of `π/2`
/// by about `0.18`.
///
/// # Example
///
/// ```
/// use elementa::scalar::asin;
///
/// assert_eq!(asin(0.0_f64), 0.0);
/// assert!((asin(0.5_f64) - core::f64::consts::FRAC_PI_6).abs() < 1e-7);
/// assert_eq!(asin(2.0_f64), -1.0);
/// ```
pub fn asin<T: FloatScalar>(x: T) -> T {
    try_asin(x).unwrap_or_else(|_| T::literal(SENTINEL))
}

/// Arcsine, with [`DomainError::OutsideUnitInterval`] outside `[-1, 1]`.
pub fn try_asin<T: FloatScalar>(x: T) -> Result<T, DomainError> {
    let one = T::one();
    if x < -one || x > one {
        return Err(DomainError::OutsideUnitInterval);
    }

    let four = T::literal(4.0);
    let mut val = T::zero();
    for i in 0..SERIES_TERMS {
        let i = u64::from(i);
        let n = 2 * i + 1;
        let numerator = T::from_count(factorial(2 * i)) * pow(x, n as i64);
        let denominator = pow(four, i as i64)
            * pow(T::from_count(factorial(i)), 2)
            * T::from_count(n);
        val = val + numerator / denominator;
    }
    Ok(val)
}

/// Arccosine `π/2 - asin(x)`, or `-1` outside `[-1, 1]`.
///
/// # Example
///
/// ```
/// use elementa::scalar::acos;
///
/// assert!((acos(0.5_f64) - core::f64::consts::FRAC_PI_3).abs() < 1e-7);
/// assert_eq!(acos(-2.0_f64), -1.0);
/// ```
pub fn acos<T: FloatScalar>(x: T) -> T {
    try_acos(x).unwrap_or_else(|_| T::literal(SENTINEL))
}

/// Arccosine, with [`DomainError::OutsideUnitInterval`] outside `[-1, 1]`.
pub fn try_acos<T: FloatScalar>(x: T) -> Result<T, DomainError> {
    let half_pi = T::literal(PI) / T::literal(2.0);
    try_asin(x).map(|s| half_pi - s)
}
