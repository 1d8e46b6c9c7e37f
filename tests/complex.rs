#![cfg(feature = "complex")]

use elementa::scalar::quadratic;
use elementa::Complex;

type C = num_complex::Complex<f64>;

const TOL: f64 = 1e-10;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

#[test]
fn conversion_round_trip() {
    let z = Complex::new(1.5, -2.25);
    let n: C = z.into();
    assert_eq!(n, C::new(1.5, -2.25));
    assert_eq!(Complex::from(n), z);
}

#[test]
fn arithmetic_agrees_with_num_complex() {
    let pairs = [
        (C::new(1.0, 2.0), C::new(3.0, 4.0)),
        (C::new(-0.5, 0.25), C::new(2.0, -7.0)),
        (C::new(0.0, 1.0), C::new(0.0, 1.0)),
    ];
    for (a, b) in pairs {
        let (za, zb) = (Complex::from(a), Complex::from(b));
        assert_complex_near(za.add(&zb).into(), a + b, TOL, "add");
        assert_complex_near((za * zb).into(), a * b, TOL, "multiply");
    }
}

#[test]
fn quadratic_roots_checked_with_num_complex() {
    for &(a, b, c) in &[(1.0, 2.0, 5.0), (2.0, -3.0, 7.0), (1.0, -3.0, 2.0)] {
        let (r1, r2) = quadratic(a, b, c);
        for r in [r1, r2] {
            let z: C = r.into();
            let value = z * z * a + z * b + c;
            assert_complex_near(value, C::new(0.0, 0.0), 1e-6, "residual");
        }
    }
}
