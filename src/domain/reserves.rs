//! The pool's holdings of both assets.

use super::{Amount, Side};
use crate::math::U256;

/// Reserve balances of asset A and asset B.
///
/// Both are zero before the first deposit; after it, both stay non-zero
/// because neither a swap nor a redemption can pay out a full reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reserves {
    /// Holdings of asset A.
    pub reserve_a: Amount,
    /// Holdings of asset B.
    pub reserve_b: Amount,
}

impl Reserves {
    /// Creates a reserve pair.
    pub const fn new(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// Reserve of the asset in `side`.
    pub const fn get(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// Returns a copy with the reserve in `side` replaced.
    pub const fn with(self, side: Side, amount: Amount) -> Self {
        match side {
            Side::A => Self::new(amount, self.reserve_b),
            Side::B => Self::new(self.reserve_a, amount),
        }
    }

    /// `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Returns `true` when both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// The invariant product `k = reserve_a × reserve_b`, in 256 bits.
    #[must_use]
    pub fn product(&self) -> U256 {
        U256::from(self.reserve_a.get()) * U256::from(self.reserve_b.get())
    }
}
