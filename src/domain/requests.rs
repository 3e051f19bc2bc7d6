//! Parameter sets for the mutating pool operations.
//!
//! Each request is a plain value carrying exactly what the caller signs
//! off on: the assets, the desired and minimum amounts, the recipient,
//! and a deadline.  Validation happens inside the pool, against its
//! current state, so that every rejection maps to a single
//! [`AmmError`](crate::error::AmmError) variant.

use super::{AccountId, Amount, AssetId, Shares, Timestamp};

/// Deposit both assets and mint shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidity {
    /// Asset expected in slot A.
    pub asset_a: AssetId,
    /// Asset expected in slot B.
    pub asset_b: AssetId,
    /// Upper bound on the amount of A deposited.
    pub desired_a: Amount,
    /// Upper bound on the amount of B deposited.
    pub desired_b: Amount,
    /// Floor on A when the deposit is rebalanced.
    pub min_a: Amount,
    /// Floor on B when the deposit is rebalanced.
    pub min_b: Amount,
    /// Account credited with the minted shares.
    pub recipient: AccountId,
    /// Last instant the call is valid.
    pub deadline: Timestamp,
}

/// Burn shares and withdraw both assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidity {
    /// Asset expected in slot A.
    pub asset_a: AssetId,
    /// Asset expected in slot B.
    pub asset_b: AssetId,
    /// Shares to burn from the caller.
    pub liquidity: Shares,
    /// Floor on A withdrawn.
    pub min_a: Amount,
    /// Floor on B withdrawn.
    pub min_b: Amount,
    /// Account receiving both assets.
    pub recipient: AccountId,
    /// Last instant the call is valid.
    pub deadline: Timestamp,
}

/// Sell an exact amount of one asset for as much of the other as the
/// curve gives.
///
/// `path` must be `[token_in, token_out]`; any other length is rejected
/// with [`AmmError::InvalidPath`](crate::error::AmmError::InvalidPath).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapExactIn {
    /// Exact input amount.
    pub amount_in: Amount,
    /// Floor on the output amount.
    pub amount_out_min: Amount,
    /// `[token_in, token_out]`.
    pub path: Vec<AssetId>,
    /// Account receiving the output.
    pub recipient: AccountId,
    /// Last instant the call is valid.
    pub deadline: Timestamp,
}

impl SwapExactIn {
    /// Builds a swap over the path `[token_in, token_out]`.
    #[must_use]
    pub fn new(
        amount_in: Amount,
        amount_out_min: Amount,
        token_in: AssetId,
        token_out: AssetId,
        recipient: AccountId,
        deadline: Timestamp,
    ) -> Self {
        Self {
            amount_in,
            amount_out_min,
            path: vec![token_in, token_out],
            recipient,
            deadline,
        }
    }
}
