//! Roots of `ax² + bx + c = 0`, real or complex.

use crate::complex::Complex;
use crate::FloatScalar;

use super::{abs, sqrt};

/// Solve `ax² + bx + c = 0`, returning both roots.
///
/// See [`quadratic_into`] for the method.
///
/// # Example
///
/// ```
/// use elementa::scalar::quadratic;
///
/// let (r1, r2) = quadratic(1.0_f64, -3.0, 2.0);
/// assert_eq!((r1.real, r1.imaginary), (2.0, 0.0));
/// assert_eq!((r2.real, r2.imaginary), (1.0, 0.0));
/// ```
pub fn quadratic<T: FloatScalar>(a: T, b: T, c: T) -> (Complex<T>, Complex<T>) {
    let mut root1 = Complex::new(T::zero(), T::zero());
    let mut root2 = Complex::new(T::zero(), T::zero());
    quadratic_into(a, b, c, &mut root1, &mut root2);
    (root1, root2)
}

/// Solve `ax² + bx + c = 0` into caller-owned slots.
///
/// The coefficients are first divided through by `a` (when `a != 1`), then
/// the discriminant `D = b² - 4c` decides the shape of the roots:
///
/// - `D < 0`: `-b/2 ± (√|D|/2)i`, positive imaginary part in `root1`.
/// - `D ≥ 0`: `(-b ± √D)/2` with zero imaginary parts, `+` in `root1`.
///
/// `a == 0` is not special-cased; the division yields infinities or NaN.
pub fn quadratic_into<T: FloatScalar>(
    a: T,
    b: T,
    c: T,
    root1: &mut Complex<T>,
    root2: &mut Complex<T>,
) {
    let one = T::one();
    let two = T::literal(2.0);
    let four = T::literal(4.0);

    let (a, b, c) = if a != one { (one, b / a, c / a) } else { (a, b, c) };

    let discriminant = b * b - four * a * c;

    if discriminant < T::zero() {
        let real = -b / (two * a);
        let imaginary = sqrt(abs(discriminant)) / (two * a);
        *root1 = Complex::new(real, imaginary);
        *root2 = Complex::new(real, -imaginary);
    } else {
        let root = sqrt(discriminant);
        *root1 = Complex::new((-b + root) / (two * a), T::zero());
        *root2 = Complex::new((-b - root) / (two * a), T::zero());
    }
}
