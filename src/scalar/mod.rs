//! Elementary scalar functions.
//!
//! Every function is computed from first principles: no `Float::sqrt`,
//! `sin`, `ln` or other platform math is called. All functions are generic
//! over [`FloatScalar`](crate::FloatScalar) (f32/f64), no-std compatible,
//! and stack-only. The `f64` instantiation is the reference behavior.
//!
//! # Functions
//!
//! | Function | Method | Invalid input |
//! |----------|--------|---------------|
//! | [`sqrt`] | Newton-Raphson from `x/2`, tolerance `1e-6` | `x < 0` → `-1` |
//! | [`pow`] | Exponentiation by squaring, `i64` exponent | — |
//! | [`exp`] | `pow(E, trunc(x))` | — |
//! | [`ln`] | Halve below 2, then `2·atanh` series (5 terms) | `x ≤ 0` → `-1` |
//! | [`abs`], [`ceil`], [`floor`], [`modf`] | Truncation toward zero | — |
//! | [`factorial`] | Iterative `u64` product, wrapping | — |
//! | [`cos`], [`sin`], [`tan`] | Degrees → radians, then the radian variant | — |
//! | [`cosr`], [`sinr`], [`tanr`] | Reduce into `[0, 2π)`, 10-term Maclaurin series | — |
//! | [`atan`] | 10-term series, reciprocal identity outside `[-1, 1]` | — |
//! | [`asin`], [`acos`] | 10-term binomial series | outside `[-1, 1]` → `-1` |
//! | [`quadratic`], [`quadratic_into`] | Normalized quadratic formula | — |
//!
//! The sentinel `-1` is part of the contract. Callers that prefer a typed
//! error use [`try_sqrt`], [`try_ln`], [`try_asin`] or [`try_acos`], which
//! perform the same domain check and return [`DomainError`].
//!
//! # Example
//!
//! ```
//! use elementa::scalar::{cos, sin, ln, try_ln, DomainError};
//!
//! assert_eq!(cos(180.0_f64), -1.0);
//! assert_eq!(sin(90.0_f64), 1.0);
//!
//! assert_eq!(ln(0.0_f64), -1.0);
//! assert_eq!(try_ln(0.0_f64), Err(DomainError::NonPositiveLog));
//! ```

use core::fmt;

mod factorial;
mod inverse_trig;
mod power;
mod quadratic;
mod rounding;
mod trig;


pub use factorial::factorial;
pub use inverse_trig::{acos, asin, atan, try_acos, try_asin};
pub use power::{exp, ln, pow, sqrt, try_ln, try_sqrt};
pub use quadratic::{quadratic, quadratic_into};
pub use rounding::{abs, ceil, floor, modf};
pub use trig::{cos, cosr, sin, sinr, tan, tanr};

/// Errors from the checked (`try_*`) functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Square root of a negative number.
    NegativeSqrt,
    /// Logarithm of zero or a negative number.
    NonPositiveLog,
    /// Inverse sine/cosine argument outside `[-1, 1]`.
    OutsideUnitInterval,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSqrt => write!(f, "square root of a negative number"),
            Self::NonPositiveLog => write!(f, "logarithm of a non-positive number"),
            Self::OutsideUnitInterval => write!(f, "argument outside [-1, 1]"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainError {}

/// Value returned by the unchecked functions for out-of-domain input.
pub(crate) const SENTINEL: f64 = -1.0;

/// Number of terms in every trigonometric series.
pub(crate) const SERIES_TERMS: u32 = 10;
