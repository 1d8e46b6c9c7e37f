use core::fmt::Debug;
use num_traits::{Float, Num, NumCast, One, Zero};

/// Trait for numeric element types.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements (`f32`, `f64`).
///
/// The algorithms in [`crate::scalar`] only use arithmetic, comparisons and
/// the conversions below; none of `Float`'s transcendental methods are called.
pub trait FloatScalar: Scalar + Float {
    /// Convert an `f64` literal into `Self`.
    fn literal(v: f64) -> Self;

    /// Convert an unsigned count (loop index, factorial) into `Self`.
    fn from_count(n: u64) -> Self;

    /// Convert a signed integer into `Self`.
    fn from_int(n: i64) -> Self;

    /// Truncate toward zero into an `i64`.
    ///
    /// Out-of-range values saturate to `i64::MIN` / `i64::MAX` and NaN maps
    /// to `0`, the same as an `as` cast.
    fn trunc_i64(self) -> i64;
}

impl<T: Scalar + Float> FloatScalar for T {
    #[inline]
    fn literal(v: f64) -> T {
        <T as NumCast>::from(v).unwrap_or_else(T::nan)
    }

    #[inline]
    fn from_count(n: u64) -> T {
        <T as NumCast>::from(n).unwrap_or_else(T::nan)
    }

    #[inline]
    fn from_int(n: i64) -> T {
        <T as NumCast>::from(n).unwrap_or_else(T::nan)
    }

    #[inline]
    fn trunc_i64(self) -> i64 {
        match self.to_i64() {
            Some(n) => n,
            None if self.is_nan() => 0,
            None if self > T::zero() => i64::MAX,
            None => i64::MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunc_toward_zero() {
        assert_eq!(3.75_f64.trunc_i64(), 3);
        assert_eq!((-3.75_f64).trunc_i64(), -3);
        assert_eq!(0.5_f32.trunc_i64(), 0);
    }

    #[test]
    fn trunc_saturates() {
        assert_eq!(1e30_f64.trunc_i64(), i64::MAX);
        assert_eq!((-1e30_f64).trunc_i64(), i64::MIN);
        assert_eq!(f64::INFINITY.trunc_i64(), i64::MAX);
        assert_eq!(f64::NAN.trunc_i64(), 0);
    }

    #[test]
    fn conversions() {
        assert_eq!(f64::literal(0.5), 0.5);
        assert_eq!(f64::from_count(3_628_800), 3628800.0);
        assert_eq!(f32::from_int(-7), -7.0);
    }
}
