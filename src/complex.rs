use core::fmt;
use core::ops::{Add, Mul};

use crate::traits::FloatScalar;

/// Complex number `real + imaginary·i`.
///
/// A plain value type: arithmetic returns new values, and the two
/// `*_in_place` helpers mutate an instance the caller owns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    pub real: T,
    pub imaginary: T,
}

pub type Complexf32 = Complex<f32>;
pub type Complexf64 = Complex<f64>;

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// Create a complex number from its parts.
    #[inline]
    pub fn new(real: T, imaginary: T) -> Self {
        Self { real, imaginary }
    }

    /// Purely real value `r + 0i`.
    #[inline]
    pub fn from_real(real: T) -> Self {
        Self {
            real,
            imaginary: T::zero(),
        }
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// Componentwise sum.
    ///
    /// ```
    /// use elementa::Complex;
    ///
    /// let z = Complex::new(1.0, 2.0).add(&Complex::new(3.0, 4.0));
    /// assert_eq!(z, Complex::new(4.0, 6.0));
    /// ```
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: &Self) -> Self {
        *self + *rhs
    }

    /// Product `(ac - bd) + (ad + bc)i`.
    ///
    /// ```
    /// use elementa::Complex;
    ///
    /// let z = Complex::new(1.0, 2.0).multiply(&Complex::new(3.0, 4.0));
    /// assert_eq!(z, Complex::new(-5.0, 10.0));
    /// ```
    #[inline]
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self {
            real: self.real * rhs.real - self.imaginary * rhs.imaginary,
            imaginary: self.imaginary * rhs.real + self.real * rhs.imaginary,
        }
    }

    /// Add `r` to the real part. The imaginary part is untouched.
    #[inline]
    pub fn add_real_in_place(&mut self, r: T) {
        self.real = self.real + r;
    }

    /// Multiply both parts by `r`.
    #[inline]
    pub fn scale_by_real_in_place(&mut self, r: T) {
        self.real = self.real * r;
        self.imaginary = self.imaginary * r;
    }
}

#[cfg(feature = "std")]
impl<T: FloatScalar + fmt::Display> Complex<T> {
    /// Write the number to stdout as `"<real> + <imag>i"` (or `-` for a
    /// negative imaginary part), six fractional digits, followed by a newline.
    pub fn print(&self) {
        println!("{}", self);
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: FloatScalar> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            real: self.real + rhs.real,
            imaginary: self.imaginary + rhs.imaginary,
        }
    }
}

impl<T: FloatScalar> Add<&Complex<T>> for &Complex<T> {
    type Output = Complex<T>;
    #[inline]
    fn add(self, rhs: &Complex<T>) -> Complex<T> {
        *self + *rhs
    }
}

impl<T: FloatScalar> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: FloatScalar> Mul<&Complex<T>> for &Complex<T> {
    type Output = Complex<T>;
    #[inline]
    fn mul(self, rhs: &Complex<T>) -> Complex<T> {
        self.multiply(rhs)
    }
}

// ── Display ──────────────────────────────────────────────────────────

// `{}` prints six fractional digits like C's `%f`; an explicit `{:.N}` wins.
impl<T: FloatScalar + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(6);
        if self.imaginary >= T::zero() {
            write!(f, "{:.*} + {:.*}i", prec, self.real, prec, self.imaginary)
        } else {
            write!(f, "{:.*} - {:.*}i", prec, self.real, prec, -self.imaginary)
        }
    }
}

// ── num-complex interop ──────────────────────────────────────────────

#[cfg(feature = "complex")]
impl<T: FloatScalar> From<num_complex::Complex<T>> for Complex<T> {
    #[inline]
    fn from(z: num_complex::Complex<T>) -> Self {
        Self::new(z.re, z.im)
    }
}

#[cfg(feature = "complex")]
impl<T: FloatScalar> From<Complex<T>> for num_complex::Complex<T> {
    #[inline]
    fn from(z: Complex<T>) -> Self {
        num_complex::Complex::new(z.real, z.imaginary)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
