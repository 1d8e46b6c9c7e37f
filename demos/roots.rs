//! Solve a few quadratics and print their roots.
//!
//! Run with: `cargo run --example roots`

use elementa::scalar::{quadratic_into, sqrt};
use elementa::Complex;

fn main() {
    let equations = [(1.0, 0.0, 1.0), (1.0, -3.0, 2.0), (2.0, 4.0, 10.0), (1.0, -4.0, 4.0)];

    // One pair of slots, reused for every equation
    let mut root1 = Complex::new(0.0, 0.0);
    let mut root2 = Complex::new(0.0, 0.0);

    for (a, b, c) in equations {
        quadratic_into(a, b, c, &mut root1, &mut root2);
        println!("{a}x² + {b}x + {c} = 0");
        root1.print();
        root2.print();
        println!();
    }

    let mut z = Complex::new(3.0, -4.0);
    let modulus = sqrt(z.real * z.real + z.imaginary * z.imaginary);
    z.scale_by_real_in_place(1.0 / modulus);
    print!("unit vector of 3 - 4i: ");
    z.print();
}
