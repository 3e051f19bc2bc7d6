//! Reference implementation of the external asset ledger.
//!
//! Production deployments plug in their own
//! [`AssetLedger`](crate::traits::AssetLedger); [`InMemoryLedger`] exists
//! so the pool can be driven end to end without one.

mod in_memory;

pub use in_memory::InMemoryLedger;
