//! Liquidity share units.

use core::fmt;

use super::Amount;

/// Liquidity shares: a fungible claim on a proportional slice of both
/// reserves.
///
/// Distinct from [`Amount`] because it counts claims on the pool, not
/// units of an asset.  All `u128` values are valid share counts.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Shares::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` value from a raw `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Reinterprets the share count as a raw [`Amount`] for mixed
    /// share/reserve formulas.
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }
}

impl From<Amount> for Shares {
    fn from(amount: Amount) -> Self {
        Self(amount.get())
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_constant() {
        assert!(Shares::ZERO.is_zero());
        assert_eq!(Shares::default(), Shares::ZERO);
    }

    #[test]
    fn checked_sub_underflow() {
        assert_eq!(Shares::new(1).checked_sub(&Shares::new(2)), None);
    }

    #[test]
    fn amount_conversion_preserves_value() {
        let s = Shares::new(1_999_000);
        assert_eq!(s.as_amount(), Amount::new(1_999_000));
        assert_eq!(Shares::from(Amount::new(7)), Shares::new(7));
    }

    #[test]
    fn display() {
        assert_eq!(Shares::new(1_000).to_string(), "1000");
    }
}
