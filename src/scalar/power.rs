//! Square root, integer power, exponential and natural logarithm.

use crate::consts::{E, LN_2};
use crate::FloatScalar;

use super::{DomainError, SENTINEL};

/// Newton-Raphson stops once successive guesses differ by at most this.
const SQRT_TOLERANCE: f64 = 1e-6;

/// Hard cap on Newton-Raphson steps. For very large `x` the absolute
/// tolerance is finer than one ULP and successive guesses can oscillate.
const SQRT_MAX_ITER: usize = 2048;

/// Highest odd power in the `ln` series (terms `z, z³/3, …, z⁹/9`).
const LN_SERIES_MAX: u64 = 9;

/// Square root, or `-1` for negative input.
///
/// Babylonian iteration `g' = (g + x/g) / 2` starting from `x/2`, until
/// `|g' - g| ≤ 1e-6`. `0` and `1` are returned unchanged.
///
/// # Example
///
/// ```
/// use elementa::scalar::sqrt;
///
/// assert!((sqrt(2.0_f64) - core::f64::consts::SQRT_2).abs() < 1e-6);
/// assert_eq!(sqrt(-4.0_f64), -1.0);
/// ```
pub fn sqrt<T: FloatScalar>(x: T) -> T {
    try_sqrt(x).unwrap_or_else(|_| T::literal(SENTINEL))
}

/// Square root, with [`DomainError::NegativeSqrt`] for `x < 0`.
pub fn try_sqrt<T: FloatScalar>(x: T) -> Result<T, DomainError> {
    let zero = T::zero();
    let one = T::one();

    if x < zero {
        return Err(DomainError::NegativeSqrt);
    }
    if x == zero || x == one {
        return Ok(x);
    }

    let half = T::literal(0.5);
    let tol = T::literal(SQRT_TOLERANCE);
    let mut guess = x / T::literal(2.0);

    for _ in 0..SQRT_MAX_ITER {
        let next = half * (guess + x / guess);
        let diff = next - guess;
        guess = next;
        // NaN diff (x = ∞) also terminates here
        if !(diff > tol || diff < -tol) {
            break;
        }
    }
    Ok(guess)
}

/// `base^exp` for an integer exponent, by repeated squaring.
///
/// Negative exponents return the reciprocal of the positive power.
/// `pow(b, 0) == 1` for every `b`, including NaN.
///
/// # Example
///
/// ```
/// use elementa::scalar::pow;
///
/// assert_eq!(pow(2.0_f64, 10), 1024.0);
/// assert_eq!(pow(2.0_f64, -2), 0.25);
/// assert_eq!(pow(-3.0_f64, 3), -27.0);
/// ```
pub fn pow<T: FloatScalar>(base: T, exp: i64) -> T {
    if exp == 0 {
        return T::one();
    }

    let mut result = T::one();
    let mut current = base;
    let mut remaining = exp.unsigned_abs();

    while remaining > 0 {
        if remaining % 2 == 1 {
            result = result * current;
        }
        current = current * current;
        remaining /= 2;
    }

    if exp < 0 {
        T::one() / result
    } else {
        result
    }
}

/// `E^x` computed as [`pow`]`(E, x)`.
///
/// The exponent is truncated toward zero first, so only integer `x` gives
/// the true exponential: `exp(2.7) == exp(2.0)`.
///
/// # Example
///
/// ```
/// use elementa::scalar::exp;
///
/// assert!((exp(2.0_f64) - 7.38905609893065).abs() < 1e-12);
/// assert_eq!(exp(2.7_f64), exp(2.0_f64));
/// ```
pub fn exp<T: FloatScalar>(x: T) -> T {
    pow(T::literal(E), x.trunc_i64())
}

/// Natural logarithm, or `-1` for `x ≤ 0`.
///
/// Halves `x` until it is at most 2, counting `k` halvings, then adds
/// `k·ln 2` to `2·(z + z³/3 + … + z⁹/9)` with `z = (x-1)/(x+1)`.
/// Accurate to about `1e-6` for `x ≥ 0.5`; below that `z` approaches `-1`
/// and the five-term series degrades.
///
/// # Example
///
/// ```
/// use elementa::scalar::ln;
///
/// assert_eq!(ln(1.0_f64), 0.0);
/// assert!((ln(10.0_f64) - core::f64::consts::LN_10).abs() < 1e-6);
/// assert_eq!(ln(-5.0_f64), -1.0);
/// ```
pub fn ln<T: FloatScalar>(x: T) -> T {
    try_ln(x).unwrap_or_else(|_| T::literal(SENTINEL))
}

/// Natural logarithm, with [`DomainError::NonPositiveLog`] for `x ≤ 0`.
pub fn try_ln<T: FloatScalar>(x: T) -> Result<T, DomainError> {
    let zero = T::zero();
    let one = T::one();
    let two = T::literal(2.0);

    if x <= zero {
        return Err(DomainError::NonPositiveLog);
    }
    if x == one {
        return Ok(zero);
    }
    // Halving never brings +∞ below 2
    if x.is_infinite() {
        return Ok(x);
    }

    let mut x = x;
    let mut halvings: u64 = 0;
    while x > two {
        x = x / two;
        halvings += 1;
    }

    let z = (x - one) / (x + one);
    let mut term = z;
    let mut series_sum = zero;
    for i in (1..=LN_SERIES_MAX).step_by(2) {
        series_sum = series_sum + term / T::from_count(i);
        term = term * z * z;
    }

    Ok(T::from_count(halvings) * T::literal(LN_2) + two * series_sum)
}
