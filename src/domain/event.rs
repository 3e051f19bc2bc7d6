//! Notifications emitted after successful mutations.

use super::{AccountId, Amount, AssetId, Shares};

/// A fire-and-forget notification describing a completed state change.
///
/// Events are delivered to a [`PoolObserver`](crate::traits::PoolObserver)
/// after the pool has committed its own state.  They carry no
/// correctness weight: dropping them changes nothing in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// Shares were minted against a deposit.
    LiquidityAdded {
        /// Account credited with the shares.
        recipient: AccountId,
        /// Asset A deposited.
        amount_a: Amount,
        /// Asset B deposited.
        amount_b: Amount,
        /// Shares minted.
        liquidity: Shares,
    },
    /// Shares were burned for a withdrawal.
    LiquidityRemoved {
        /// Account paid out.
        recipient: AccountId,
        /// Asset A withdrawn.
        amount_a: Amount,
        /// Asset B withdrawn.
        amount_b: Amount,
        /// Shares burned.
        liquidity: Shares,
    },
    /// An exact-in swap executed.
    Swap {
        /// Account that paid the input.
        caller: AccountId,
        /// Asset sold.
        token_in: AssetId,
        /// Asset bought.
        token_out: AssetId,
        /// Amount sold.
        amount_in: Amount,
        /// Amount bought.
        amount_out: Amount,
    },
    /// Shares moved between holders.
    SharesTransferred {
        /// Previous holder.
        from: AccountId,
        /// New holder.
        to: AccountId,
        /// Shares moved.
        amount: Shares,
    },
}

impl PoolEvent {
    /// Short, stable name of the event kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LiquidityAdded { .. } => "LiquidityAdded",
            Self::LiquidityRemoved { .. } => "LiquidityRemoved",
            Self::Swap { .. } => "Swap",
            Self::SharesTransferred { .. } => "SharesTransferred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        let ev = PoolEvent::SharesTransferred {
            from: AccountId::from_bytes([1u8; 32]),
            to: AccountId::from_bytes([2u8; 32]),
            amount: Shares::new(5),
        };
        assert_eq!(ev.name(), "SharesTransferred");
    }
}
