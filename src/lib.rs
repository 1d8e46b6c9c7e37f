//! # elementa
//!
//! Elementary functions and complex arithmetic computed from first principles.
//! No platform math library is consulted: every function is an explicit
//! numerical method (Newton-Raphson, exponentiation by squaring, truncated
//! Maclaurin series, range reduction). no-std compatible, no heap allocation.
//!
//! ## Quick start
//!
//! ```
//! use elementa::scalar::{sqrt, pow, factorial, quadratic};
//!
//! assert!((sqrt(2.0_f64) * sqrt(2.0_f64) - 2.0).abs() < 1e-5);
//! assert_eq!(pow(2.0_f64, 10), 1024.0);
//! assert_eq!(factorial(5), 120);
//!
//! // x² + 1 = 0 has roots ±i
//! let (r1, r2) = quadratic(1.0_f64, 0.0, 1.0);
//! assert_eq!((r1.real, r1.imaginary), (0.0, 1.0));
//! assert_eq!((r2.real, r2.imaginary), (0.0, -1.0));
//! ```
//!
//! ## Modules
//!
//! - [`complex`] — `Complex<T>` value type `a + bi`. Addition and
//!   multiplication return new values; `add_real_in_place` and
//!   `scale_by_real_in_place` mutate a caller-owned instance.
//!
//! - [`scalar`] — Free functions: `sqrt`, `pow`, `exp`, `ln`, `abs`, `ceil`,
//!   `floor`, `modf`, `factorial`, degree and radian trigonometry, inverse
//!   trigonometry, and the quadratic solver. Invalid input is reported with
//!   the sentinel `-1`; `try_*` twins return [`scalar::DomainError`] instead.
//!
//! - [`consts`] — The fixed literals `PI`, `E`, `LN_2` every algorithm uses.
//!
//! - [`traits`] — Element traits:
//!   - [`Scalar`] — `Copy + PartialEq + Debug + Zero + One + Num`
//!   - [`FloatScalar`] — real floats (`f32`, `f64`); arithmetic, comparison
//!     and casts only
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Links `std`; enables `Complex::print` and `std::error::Error` |
//! | `libm`    | baseline | Lets `num_traits::Float` resolve without `std` |
//! | `complex` | no       | `From` conversions with `num_complex::Complex` |
//! | `all`     | no       | All features: `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod complex;
pub mod consts;
pub mod scalar;
pub mod traits;

pub use complex::{Complex, Complexf32, Complexf64};
pub use traits::{FloatScalar, Scalar};
