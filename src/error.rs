//! Unified error types for the pair pool.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every rejection is synchronous and final: the call that
//! produced it left no partial effect behind, and nothing is retried
//! internally.

use thiserror::Error;

/// Failure reported by an external [`AssetLedger`](crate::traits::AssetLedger).
///
/// Transfers are all-or-nothing, so a `LedgerError` always means no funds
/// moved for that particular transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LedgerError {
    /// The debited party does not hold enough of the asset.
    #[error("insufficient funds for transfer")]
    InsufficientFunds,

    /// The pool's custody does not hold enough of the asset.
    #[error("insufficient pool custody for transfer")]
    InsufficientCustody,

    /// The ledger refused the transfer for another reason.
    #[error("transfer rejected: {0}")]
    Rejected(&'static str),
}

/// Every way a pool operation can fail.
///
/// Variants without a payload map one-to-one onto the pool's rejection
/// taxonomy; the arithmetic variants carry a short context string naming
/// the computation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// `initialize` called on a pool whose pair is already fixed.
    #[error("pool is already initialized")]
    AlreadyInitialized,

    /// The two assets are equal or one of them is the null reference.
    #[error("invalid pair: assets must be distinct and non-null")]
    InvalidPair,

    /// The supplied assets do not match the stored pair position-for-position.
    #[error("asset pair does not match the pool")]
    PairMismatch,

    /// The call arrived after its deadline.
    #[error("deadline expired")]
    Expired,

    /// The recipient is the null account.
    #[error("invalid recipient")]
    InvalidRecipient,

    /// The amount of asset A fell below the caller's floor.
    #[error("insufficient amount of asset A")]
    InsufficientA,

    /// The amount of asset B fell below the caller's floor.
    #[error("insufficient amount of asset B")]
    InsufficientB,

    /// The deposit would mint zero (or negative) shares.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidity,

    /// A zero amount where a positive one is required.
    #[error("invalid amount")]
    InvalidAmount,

    /// The swap path does not have exactly two entries.
    #[error("invalid swap path")]
    InvalidPath,

    /// A swap token is not one of the pool's two assets.
    #[error("token is not part of the pool pair")]
    InvalidToken,

    /// The swap input and output token are the same.
    #[error("input and output token are identical")]
    SameToken,

    /// At least one reserve is zero.
    #[error("pool has no liquidity")]
    NoLiquidity,

    /// The swap output fell below the caller's floor.
    #[error("insufficient output amount")]
    InsufficientOutput,

    /// The caller holds fewer shares than requested.
    #[error("insufficient share balance")]
    InsufficientBalance,

    /// An external ledger transfer failed.
    #[error("asset transfer failed: {0}")]
    TransferFailed(LedgerError),

    /// Checked addition or multiplication exceeded `u128`.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Checked subtraction went below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A [`PoolConfig`](crate::config::PoolConfig) failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl From<LedgerError> for AmmError {
    fn from(err: LedgerError) -> Self {
        Self::TransferFailed(err)
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_error_converts_into_transfer_failed() {
        let err: AmmError = LedgerError::InsufficientFunds.into();
        assert_eq!(err, AmmError::TransferFailed(LedgerError::InsufficientFunds));
    }

    #[test]
    fn display_includes_context() {
        let err = AmmError::Overflow("reserve_a overflow on add");
        assert_eq!(err.to_string(), "arithmetic overflow: reserve_a overflow on add");
    }

    #[test]
    fn transfer_failed_display_nests_ledger_message() {
        let err = AmmError::TransferFailed(LedgerError::Rejected("frozen account"));
        assert_eq!(
            err.to_string(),
            "asset transfer failed: transfer rejected: frozen account"
        );
    }
}
