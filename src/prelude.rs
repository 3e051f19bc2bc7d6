//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use hydra_pair::prelude::*;
//! ```
//!
//! This re-exports the domain values, the pool types, the collaborator
//! traits, configuration, and error types so that consumers don't need to
//! import from individual submodules.

// Re-export domain types
pub use crate::domain::{
    AccountId, AddLiquidity, AddLiquidityReceipt, Amount, AssetId, CallContext, PRICE_SCALE,
    PairIdentity, PoolEvent, RemoveLiquidity, RemoveLiquidityReceipt, Reserves, ScaledPrice,
    Shares, SwapExactIn, SwapReceipt, Timestamp,
};

// Re-export core traits
pub use crate::traits::{AssetLedger, EventLog, FromConfig, NoopObserver, PoolObserver};

// Re-export math utilities
pub use crate::math::{CheckedArithmetic, MINIMUM_LIQUIDITY};

// Re-export configuration
pub use crate::config::PoolConfig;

// Re-export error types
pub use crate::error::{AmmError, LedgerError, Result};

// Re-export pools and the reference ledger
pub use crate::ledger::InMemoryLedger;
pub use crate::pools::{PairPool, SharedPool};
