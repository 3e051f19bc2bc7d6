//! Pool-share bookkeeping.
//!
//! A [`ShareLedger`] tracks who owns how many shares of the pool, plus
//! the [`MINIMUM_LIQUIDITY`](crate::math::MINIMUM_LIQUIDITY) that is
//! locked on the first deposit and never redeemable.
//!
//! # Invariant
//!
//! ```text
//! total_supply = locked + Σ balance[holder]
//! ```
//!
//! # Planned updates
//!
//! Mints and burns are split into a fallible *plan* step, which checks
//! every bound and returns a [`SharesUpdate`], and an infallible
//! [`apply`](ShareLedger::apply) step.  The pool plans before it moves
//! any asset and applies only once the asset transfers succeeded, so a
//! commit can never fail halfway.

use std::collections::HashMap;

use crate::domain::{AccountId, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Share balances of a single pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: HashMap<AccountId, Shares>,
    locked: Shares,
    total_supply: Shares,
}

/// A validated change to one holder's balance and to the supply.
///
/// Produced by [`ShareLedger::plan_mint`] and [`ShareLedger::plan_burn`];
/// carries both the previous and the next values so it can be applied and
/// reverted without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharesUpdate {
    holder: AccountId,
    balance: (Shares, Shares),
    locked: (Shares, Shares),
    total_supply: (Shares, Shares),
}

impl SharesUpdate {
    /// The holder whose balance changes.
    #[must_use]
    pub const fn holder(&self) -> AccountId {
        self.holder
    }

    /// Total supply after the update.
    #[must_use]
    pub const fn next_total_supply(&self) -> Shares {
        self.total_supply.1
    }
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding shares, locked ones included.
    #[must_use]
    pub const fn total_supply(&self) -> Shares {
        self.total_supply
    }

    /// Shares locked by the first deposit.
    #[must_use]
    pub const fn locked(&self) -> Shares {
        self.locked
    }

    /// Share balance of `holder`; zero for unknown accounts.
    #[must_use]
    pub fn balance_of(&self, holder: AccountId) -> Shares {
        self.balances.get(&holder).copied().unwrap_or_default()
    }

    /// Number of accounts holding a non-zero balance.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.balances.values().filter(|s| !s.is_zero()).count()
    }

    /// Returns `true` if the supply equals the locked shares plus the sum
    /// of all balances.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.balances
            .values()
            .try_fold(self.locked, |acc, s| acc.checked_add(s))
            .is_some_and(|sum| sum == self.total_supply)
    }

    /// Plans minting `amount` to `to`, locking `lock` additional shares.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidRecipient`] if `to` is the null account.
    /// - [`AmmError::Overflow`] if the supply or the balance would exceed
    ///   `u128`.
    pub fn plan_mint(
        &self,
        to: AccountId,
        amount: Shares,
        lock: Shares,
    ) -> Result<SharesUpdate, AmmError> {
        if to.is_null() {
            return Err(AmmError::InvalidRecipient);
        }
        let balance = self.balance_of(to);
        let next_total = self
            .total_supply
            .safe_add(&lock, "total supply overflow on lock")?
            .safe_add(&amount, "total supply overflow on mint")?;
        Ok(SharesUpdate {
            holder: to,
            balance: (balance, balance.safe_add(&amount, "share balance overflow")?),
            locked: (
                self.locked,
                self.locked.safe_add(&lock, "locked shares overflow")?,
            ),
            total_supply: (self.total_supply, next_total),
        })
    }

    /// Plans burning `amount` from `from`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`] if `from` holds fewer than
    ///   `amount` shares.
    /// - [`AmmError::Underflow`] if the supply would go negative.
    pub fn plan_burn(&self, from: AccountId, amount: Shares) -> Result<SharesUpdate, AmmError> {
        let balance = self.balance_of(from);
        let next_balance = balance
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance)?;
        Ok(SharesUpdate {
            holder: from,
            balance: (balance, next_balance),
            locked: (self.locked, self.locked),
            total_supply: (
                self.total_supply,
                self.total_supply
                    .safe_sub(&amount, "total supply underflow on burn")?,
            ),
        })
    }

    /// Commits a planned update.
    pub fn apply(&mut self, update: &SharesUpdate) {
        self.write(update.holder, update.balance.1);
        self.locked = update.locked.1;
        self.total_supply = update.total_supply.1;
    }

    /// Restores the values an applied update replaced.
    pub fn revert(&mut self, update: &SharesUpdate) {
        self.write(update.holder, update.balance.0);
        self.locked = update.locked.0;
        self.total_supply = update.total_supply.0;
    }

    /// Moves `amount` shares from `from` to `to`.  Supply is unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidRecipient`] if `to` is the null account.
    /// - [`AmmError::InsufficientBalance`] if `from` holds fewer than
    ///   `amount` shares.
    /// - [`AmmError::Overflow`] if the receiving balance would exceed
    ///   `u128`.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Shares,
    ) -> Result<(), AmmError> {
        if to.is_null() {
            return Err(AmmError::InvalidRecipient);
        }
        let from_balance = self
            .balance_of(from)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance_of(to)
            .safe_add(&amount, "share balance overflow")?;
        self.write(from, from_balance);
        self.write(to, to_balance);
        Ok(())
    }

    fn write(&mut self, holder: AccountId, balance: Shares) {
        if balance.is_zero() {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, balance);
        }
    }
}
