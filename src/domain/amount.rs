//! Raw asset amount with checked arithmetic.

use core::fmt;

/// A quantity of one asset, counted in that asset's smallest unit.
///
/// Reserves, deposits, payouts, and slippage floors are all `Amount`s.
/// The pool never interprets decimals and never goes negative, so every
/// `u128` is a valid amount.  Arithmetic is checked: overflow, underflow,
/// and a zero divisor yield `None` rather than a wrapped value.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Amount;
///
/// let reserve = Amount::new(1_000);
/// let deposit = Amount::new(100);
/// assert_eq!(reserve.checked_add(&deposit), Some(Amount::new(1_100)));
/// assert_eq!(Amount::new(200).checked_floor_div(&Amount::new(3)), Some(Amount::new(66)));
/// assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// No units.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw unit count.
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    /// Raw unit count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` for an empty amount.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `self + rhs`, or `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Self::lift(self.0.checked_add(rhs.0))
    }

    /// `self - rhs`, or `None` if `rhs` is larger.
    #[must_use]
    pub const fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Self::lift(self.0.checked_sub(rhs.0))
    }

    /// `self × rhs`, or `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Self::lift(self.0.checked_mul(rhs.0))
    }

    /// `⌊self / divisor⌋`, or `None` for a zero divisor.
    ///
    /// Floor is the only division offered: a truncated remainder always
    /// stays with the pool.
    #[must_use]
    pub const fn checked_floor_div(&self, divisor: &Self) -> Option<Self> {
        Self::lift(self.0.checked_div(divisor.0))
    }

    const fn lift(raw: Option<u128>) -> Option<Self> {
        match raw {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_amount() {
        assert_eq!(Amount::default(), Amount::ZERO);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
        assert_eq!(Amount::new(42).get(), 42);
    }

    #[test]
    fn prints_raw_units() {
        assert_eq!(Amount::new(4_000_000).to_string(), "4000000");
    }

    #[test]
    fn reserve_cannot_overflow_or_go_negative() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
        assert_eq!(Amount::new(909).checked_sub(&Amount::new(910)), None);
        assert_eq!(
            Amount::new(1_000).checked_sub(&Amount::new(90)),
            Some(Amount::new(910))
        );
    }

    #[test]
    fn product_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
        assert_eq!(
            Amount::new(100).checked_mul(&Amount::new(1_000)),
            Some(Amount::new(100_000))
        );
    }

    #[test]
    fn floor_div_keeps_remainder_in_pool() {
        // 100 * 1000 / 1100 = 90.9 -> 90
        assert_eq!(
            Amount::new(100_000).checked_floor_div(&Amount::new(1_100)),
            Some(Amount::new(90))
        );
        assert_eq!(
            Amount::new(1).checked_floor_div(&Amount::new(2)),
            Some(Amount::ZERO)
        );
        assert_eq!(Amount::new(100).checked_floor_div(&Amount::ZERO), None);
    }
}
