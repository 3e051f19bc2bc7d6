//! The pair pool and its supporting state.
//!
//! | Type | Role |
//! |------|------|
//! | [`PairPool`] | Single-writer constant-product pool for one asset pair |
//! | [`SharedPool`] | [`PairPool`] behind one mutex for concurrent callers |
//! | [`ShareLedger`] | Liquidity-share balances, supply, and the locked minimum |
//! | [`SharesUpdate`] | A validated mint or burn, applied once transfers succeed |

mod pair_pool;
mod share_ledger;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use pair_pool::PairPool;
pub use share_ledger::{ShareLedger, SharesUpdate};
pub use shared::SharedPool;
