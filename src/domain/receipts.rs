//! Outcomes of successful pool operations.

use core::fmt;

use super::{Amount, AssetId, Shares};

/// Result of [`add_liquidity`](crate::pools::PairPool::add_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidityReceipt {
    /// Amount of asset A actually deposited.
    pub amount_a: Amount,
    /// Amount of asset B actually deposited.
    pub amount_b: Amount,
    /// Shares minted to the recipient.
    pub liquidity: Shares,
}

/// Result of [`remove_liquidity`](crate::pools::PairPool::remove_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidityReceipt {
    /// Amount of asset A paid out.
    pub amount_a: Amount,
    /// Amount of asset B paid out.
    pub amount_b: Amount,
}

/// Result of [`swap_exact_in`](crate::pools::PairPool::swap_exact_in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    /// Asset sold.
    pub token_in: AssetId,
    /// Asset bought.
    pub token_out: AssetId,
    /// Exact amount sold.
    pub amount_in: Amount,
    /// Amount bought.
    pub amount_out: Amount,
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.amount_in, self.token_in, self.amount_out, self.token_out
        )
    }
}
