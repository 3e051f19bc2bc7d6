//! Trait seams between the pool and its collaborators.
//!
//! - [`AssetLedger`]: the external ledgers assets move through.
//! - [`PoolObserver`]: fire-and-forget receiver of committed events, with
//!   the [`NoopObserver`] and recording [`EventLog`] implementations.
//! - [`FromConfig`]: configuration-driven construction.

mod asset_ledger;
mod from_config;
mod pool_observer;

pub use asset_ledger::AssetLedger;
pub use from_config::FromConfig;
pub use pool_observer::{EventLog, NoopObserver, PoolObserver};
