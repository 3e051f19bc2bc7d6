//! 256-bit intermediates for multiply-then-divide formulas.
//!
//! Reserves and shares are stored as `u128`, but the product of two of
//! them routinely exceeds it: a pair holding 100 tokens of 18 decimals
//! per side already has `k = 10^40`.  The helpers here hold the product
//! in a [`U256`] and narrow only the floored quotient.

use ruint::aliases::U256;

use crate::error::AmmError;

/// Widens a `u128` operand.
pub(crate) fn widen(value: u128) -> U256 {
    U256::from(value)
}

/// Narrows a final result back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] tagged with `context` if `value` does
/// not fit.
pub(crate) fn narrow(value: U256, context: &'static str) -> Result<u128, AmmError> {
    u128::try_from(value).map_err(|_| AmmError::Overflow(context))
}

/// `⌊a × b / divisor⌋`, with the product held in 256 bits.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `divisor` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
///
/// # Examples
///
/// ```
/// use hydra_pair::math::mul_div;
///
/// // 100 tokens × 100 tokens at 18 decimals, over 50 tokens
/// let e18 = 1_000_000_000_000_000_000u128;
/// assert_eq!(mul_div(100 * e18, 100 * e18, 50 * e18, "example"), Ok(200 * e18));
/// ```
pub fn mul_div(a: u128, b: u128, divisor: u128, context: &'static str) -> Result<u128, AmmError> {
    mul_div_wide(a, b, widen(divisor), context)
}

/// [`mul_div`] with a divisor that may itself exceed `u128`.
pub(crate) fn mul_div_wide(
    a: u128,
    b: u128,
    divisor: U256,
    context: &'static str,
) -> Result<u128, AmmError> {
    let product = widen(a)
        .checked_mul(widen(b))
        .ok_or(AmmError::Overflow(context))?;
    let quotient = product
        .checked_div(divisor)
        .ok_or(AmmError::DivisionByZero)?;
    narrow(quotient, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E18: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn product_beyond_u128_still_divides() {
        // 1e21 * 1e21 = 1e42 > u128::MAX
        assert_eq!(
            mul_div(1_000 * E18, 1_000 * E18, 10 * E18, "t"),
            Ok(100_000 * E18)
        );
    }

    #[test]
    fn extreme_operands() {
        assert_eq!(mul_div(u128::MAX, u128::MAX, u128::MAX, "t"), Ok(u128::MAX));
        assert_eq!(mul_div(u128::MAX, 2, 3, "t"), Ok(u128::MAX / 3 * 2));
    }

    #[test]
    fn quotient_overflow_is_reported() {
        assert_eq!(
            mul_div(u128::MAX, 2, 1, "quotient"),
            Err(AmmError::Overflow("quotient"))
        );
    }

    #[test]
    fn zero_divisor() {
        assert_eq!(mul_div(1, 1, 0, "t"), Err(AmmError::DivisionByZero));
    }

    #[test]
    fn floors() {
        assert_eq!(mul_div(100, 1_000, 1_100, "t"), Ok(90));
        assert_eq!(mul_div_wide(1, 1, widen(u128::MAX) + widen(1), "t"), Ok(0));
    }
}
