//! Fixed-point exchange rate.

use core::fmt;

use super::Amount;
use crate::error::AmmError;
use crate::math::mul_div;

/// Scale of the fixed-point representation (`10^18`).
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Exchange rate as an integer scaled by [`PRICE_SCALE`].
///
/// `ScaledPrice::from_reserves(base, quote)` is the number of `quote`
/// units one `base` unit is worth, times `10^18`, floored.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, ScaledPrice, PRICE_SCALE};
///
/// let p = ScaledPrice::from_reserves(Amount::new(1_000), Amount::new(4_000)).expect("non-zero");
/// assert_eq!(p.get(), 4 * PRICE_SCALE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaledPrice(u128);

impl ScaledPrice {
    /// Computes `quote_reserve × 10^18 / base_reserve`, floored, with the
    /// scaled numerator held in 256 bits.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NoLiquidity`] if either reserve is zero.
    /// - [`AmmError::Overflow`] if the price itself exceeds `u128`.
    pub fn from_reserves(base_reserve: Amount, quote_reserve: Amount) -> Result<Self, AmmError> {
        if base_reserve.is_zero() || quote_reserve.is_zero() {
            return Err(AmmError::NoLiquidity);
        }
        mul_div(
            quote_reserve.get(),
            PRICE_SCALE,
            base_reserve.get(),
            "price overflow",
        )
        .map(Self)
    }

    /// Returns the scaled raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for ScaledPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / PRICE_SCALE, self.0 % PRICE_SCALE)
    }
}
