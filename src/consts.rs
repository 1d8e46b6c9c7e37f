//! Process-wide constants.
//!
//! Kept as the exact literals the algorithms were tuned against rather than
//! `core::f64::consts`, so results do not shift with toolchain changes.

#![allow(clippy::approx_constant, clippy::excessive_precision)]

/// π.
pub const PI: f64 = 3.14159265358979323;

/// Euler's number, the base of [`crate::scalar::exp`].
pub const E: f64 = 2.718281828459045235;

/// ln 2, used to undo the halvings in [`crate::scalar::ln`].
pub const LN_2: f64 = 0.6931471805599453;
