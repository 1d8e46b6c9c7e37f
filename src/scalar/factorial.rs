/// `n!` as an iterative `u64` product.
///
/// Wraps modulo 2⁶⁴ from `21!` on, like any fixed-width multiplication.
///
/// # Example
///
/// ```
/// use elementa::scalar::factorial;
///
/// assert_eq!(factorial(10), 3_628_800);
/// assert_eq!(factorial(21), 51_090_942_171_709_440_000_u128 as u64);
/// ```
pub fn factorial(n: u64) -> u64 {
    if n == 0 || n == 1 {
        return 1;
    }

    let mut val: u64 = 1;
    for i in 2..=n {
        val = val.wrapping_mul(i);
    }
    val
}
