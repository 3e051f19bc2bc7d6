//! The external asset ledgers a pool moves funds through.
//!
//! The pool never holds assets itself; it asks an [`AssetLedger`] to move
//! them between a user and the pool's custody.  One ledger value answers
//! for every asset, keyed by [`AssetId`].
//!
//! # All-or-nothing contract
//!
//! Each call either moves exactly `amount` and returns `Ok(())`, or moves
//! nothing and returns a [`LedgerError`].  A partial transfer is not a
//! valid outcome.  The pool builds its own atomicity on this contract:
//! when a later transfer in the same operation fails, earlier ones are
//! reversed with the opposite call.
//!
//! # Re-entrancy
//!
//! Mutating pool methods take the ledger as a separate `&mut` borrow next
//! to `&mut self`, so a ledger implementation has no path back into the
//! pool while a call is in flight.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::LedgerError;

/// External per-asset ledger: "debit user into pool" and
/// "credit pool to user".
pub trait AssetLedger {
    /// Moves `amount` of `asset` from `from` into the pool's custody.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if nothing was moved.
    fn debit(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<(), LedgerError>;

    /// Moves `amount` of `asset` from the pool's custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if nothing was moved.
    fn credit(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<(), LedgerError>;
}
