use elementa::consts::PI;
use elementa::scalar::*;
use elementa::Complex;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!((a - b).abs() < tol, "{}: {} vs {}", msg, a, b);
}

// ── Powers and roots ─────────────────────────────────────────────────

#[test]
fn sqrt_round_trip_over_grid() {
    for k in 0..=2000 {
        let x = k as f64 * 0.37;
        let s = sqrt(x);
        assert_near(s * s, x, 1e-5, &format!("sqrt({})", x));
    }
    assert_eq!(sqrt(-1.0), -1.0);
}

#[test]
fn pow_identities() {
    for n in 0..20_i64 {
        assert_eq!(pow(2.0, n), (1_u64 << n) as f64);
        assert_eq!(pow(2.0, -n), 1.0 / pow(2.0, n));
    }
    assert_eq!(pow(123.456, 0), 1.0);
}

#[test]
fn ln_reference_range() {
    assert_eq!(ln(1.0), 0.0);
    assert_near(ln(2.0), 0.693, 1e-3, "ln 2");
    for &x in &[0.5, 0.75, 1.5, 7.0, 42.0, 1e3, 1e5] {
        assert_near(ln(x), f64::ln(x), 1e-3, &format!("ln({})", x));
    }
    assert_eq!(ln(0.0), -1.0);
    assert_eq!(ln(-5.0), -1.0);
}

#[test]
fn factorial_table() {
    let expected = [1_u64, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880, 3628800];
    for (n, &f) in expected.iter().enumerate() {
        assert_eq!(factorial(n as u64), f);
    }
}

// ── Trigonometry ─────────────────────────────────────────────────────

#[test]
fn degree_trig_properties() {
    assert_eq!(cos(0.0), 1.0);
    assert_near(cos(90.0), 0.0, 1e-12, "cos 90");
    assert_eq!(cos(180.0), -1.0);
    assert_eq!(sin(90.0), 1.0);
    assert_eq!(sin(0.0), 0.0);

    for d in (0..=300).step_by(5) {
        let (s, c) = (sin(d as f64), cos(d as f64));
        assert_near(s * s + c * c, 1.0, 1e-3, &format!("identity at {}°", d));
    }
}

#[test]
fn degrees_delegate_to_radians() {
    for &d in &[10.0, 33.0, 135.0, 222.0] {
        let r = d * PI / 180.0;
        assert_eq!(sin(d), sinr(r));
        assert_eq!(cos(d), cosr(r));
        assert_eq!(tan(d), tanr(r));
    }
}

#[test]
fn inverse_trig_properties() {
    assert_eq!(asin(2.0), -1.0);
    assert_eq!(acos(-2.0), -1.0);
    assert_eq!(asin(0.0), 0.0);
    assert!(acos(1.0) < 0.2);
    assert!(try_asin(1.5).is_err());
    assert!(try_acos(0.5).is_ok());
}

// ── Rounding ─────────────────────────────────────────────────────────

#[test]
fn rounding_properties() {
    assert_eq!(ceil(2.5), 3);
    assert_eq!(ceil(-2.5), -2);
    assert_eq!(ceil(3.0), 3);
    assert_eq!(floor(2.5), 2);
    assert_eq!(floor(-2.5), -3);

    let mut i = 0;
    assert_eq!(modf(3.75, &mut i), 0.75);
    assert_eq!(i, 3);
    assert_eq!(modf(-3.75, &mut i), -0.75);
    assert_eq!(i, -3);
}

// ── Quadratic and complex ────────────────────────────────────────────

#[test]
fn quadratic_properties() {
    let (r1, r2) = quadratic(1.0, 0.0, 1.0);
    assert_eq!((r1.real, r1.imaginary), (0.0, 1.0));
    assert_eq!((r2.real, r2.imaginary), (0.0, -1.0));

    let (r1, r2) = quadratic(1.0, -3.0, 2.0);
    assert_eq!((r1.real, r1.imaginary), (2.0, 0.0));
    assert_eq!((r2.real, r2.imaginary), (1.0, 0.0));
}

#[test]
fn roots_satisfy_equation() {
    // z² + bz + c evaluated with the crate's own complex arithmetic
    for &(b, c) in &[(2.0, 5.0), (-1.0, 1.0), (0.5, -3.0), (4.0, 4.0)] {
        let (r1, r2) = quadratic(1.0, b, c);
        for z in [r1, r2] {
            let mut bz = z;
            bz.scale_by_real_in_place(b);
            let mut value = z * z + bz;
            value.add_real_in_place(c);
            assert_near(value.real, 0.0, 1e-6, "real residual");
            assert_near(value.imaginary, 0.0, 1e-6, "imaginary residual");
        }
    }
}

#[test]
fn complex_arithmetic_properties() {
    let a = Complex::new(1.0, 2.0);
    let b = Complex::new(3.0, 4.0);
    assert_eq!(a.add(&b), Complex::new(4.0, 6.0));
    assert_eq!(a.multiply(&b), Complex::new(-5.0, 10.0));

    let mut z = a;
    z.add_real_in_place(3.0);
    assert_eq!(z, Complex::new(4.0, 2.0));

    let mut z = a;
    z.scale_by_real_in_place(2.0);
    assert_eq!(z, Complex::new(2.0, 4.0));

    assert_eq!(a.to_string(), "1.000000 + 2.000000i");
    assert_eq!(Complex::new(0.0, -2.0).to_string(), "0.000000 - 2.000000i");
    a.print();
}
