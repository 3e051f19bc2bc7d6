//! Integer square root.

use ruint::aliases::U256;

use super::wide::widen;

/// Floor of the square root of `n`, by Babylonian iteration.
///
/// Inputs up to 3 short-circuit (`0 → 0`, `1..=3 → 1`).  Otherwise the
/// iteration starts at `n / 2 + 1` and descends with
/// `x' = (n / x + x) / 2` until it stops decreasing; the last value is
/// `⌊√n⌋`.  No intermediate can overflow: `x ≤ n / 2 + 1` keeps
/// `n / x + x` within `u128`.
///
/// # Examples
///
/// ```
/// use hydra_pair::math::isqrt;
///
/// assert_eq!(isqrt(4_000_000_000_000), 2_000_000);
/// assert_eq!(isqrt(15), 3);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n > 3 {
        let mut z = n;
        let mut x = n / 2 + 1;
        while x < z {
            z = x;
            x = (n / x + x) / 2;
        }
        z
    } else if n != 0 {
        1
    } else {
        0
    }
}

/// `⌊√(a × b)⌋` for two `u128` factors, with the product held in 256 bits.
///
/// The root of a product of two `u128` values always fits in `u128`.
///
/// # Examples
///
/// ```
/// use hydra_pair::math::isqrt_product;
///
/// let e20 = 100_000_000_000_000_000_000u128;
/// assert_eq!(isqrt_product(e20, e20), e20);
/// assert_eq!(isqrt_product(1_000_000, 4_000_000), 2_000_000);
/// ```
#[must_use]
pub fn isqrt_product(a: u128, b: u128) -> u128 {
    let n = widen(a).saturating_mul(widen(b));
    let one = U256::from(1u8);
    if n <= U256::from(3u8) {
        return if n.is_zero() { 0 } else { 1 };
    }
    let mut z = n;
    let mut x = (n >> 1usize) + one;
    while x < z {
        z = x;
        x = (n / x + x) >> 1usize;
    }
    u128::try_from(z).unwrap_or(u128::MAX)
}
