//! Fundamental domain value types used throughout the pool.
//!
//! Newtypes with validated constructors model the pair's vocabulary:
//! asset and account references, amounts and shares, the positional pair
//! identity, the reserve balances, call framing, the fixed-point price, and
//! the request, receipt, and event values exchanged with callers.

mod account_id;
mod amount;
mod asset_id;
mod context;
mod event;
mod pair_identity;
mod price;
mod receipts;
mod requests;
mod reserves;
mod shares;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use context::{CallContext, Timestamp};
pub use event::PoolEvent;
pub use pair_identity::{PairIdentity, Side};
pub use price::{PRICE_SCALE, ScaledPrice};
pub use receipts::{AddLiquidityReceipt, RemoveLiquidityReceipt, SwapReceipt};
pub use requests::{AddLiquidity, RemoveLiquidity, SwapExactIn};
pub use reserves::Reserves;
pub use shares::Shares;
