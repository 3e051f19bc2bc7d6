//! Hash-map backed [`AssetLedger`] for tests, simulations, and demos.

use std::collections::{HashMap, HashSet};

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::LedgerError;
use crate::traits::AssetLedger;

/// In-process ledger holding user balances and the pool's custody for any
/// number of assets.
///
/// Accounts can be frozen to make every transfer touching them fail,
/// which lets callers exercise the pool's rollback paths.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AccountId, Amount, AssetId};
/// use hydra_pair::ledger::InMemoryLedger;
/// use hydra_pair::traits::AssetLedger;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([7u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(usdc, alice, Amount::new(500)).expect("fits");
/// ledger.debit(usdc, alice, Amount::new(200)).expect("funded");
/// assert_eq!(ledger.balance_of(usdc, alice), Amount::new(300));
/// assert_eq!(ledger.custody(usdc), Amount::new(200));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: HashMap<(AssetId, AccountId), Amount>,
    custody: HashMap<AssetId, Amount>,
    frozen: HashSet<AccountId>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `amount` of `asset` out of thin air for `account`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Rejected`] if the balance would overflow.
    pub fn mint(
        &mut self,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let balance = self
            .balance_of(asset, account)
            .checked_add(&amount)
            .ok_or(LedgerError::Rejected("balance overflow"))?;
        self.store(asset, account, balance);
        Ok(())
    }

    /// Balance of `account` in `asset`.
    #[must_use]
    pub fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount {
        self.balances
            .get(&(asset, account))
            .copied()
            .unwrap_or_default()
    }

    /// Amount of `asset` held in the pool's custody.
    #[must_use]
    pub fn custody(&self, asset: AssetId) -> Amount {
        self.custody.get(&asset).copied().unwrap_or_default()
    }

    /// Makes every subsequent transfer from or to `account` fail.
    pub fn freeze(&mut self, account: AccountId) {
        self.frozen.insert(account);
    }

    /// Lifts a previous [`freeze`](Self::freeze).
    pub fn unfreeze(&mut self, account: AccountId) {
        self.frozen.remove(&account);
    }

    // Zero entries are dropped so that two ledgers holding the same
    // balances compare equal.
    fn store(&mut self, asset: AssetId, account: AccountId, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&(asset, account));
        } else {
            self.balances.insert((asset, account), amount);
        }
    }

    fn store_custody(&mut self, asset: AssetId, amount: Amount) {
        if amount.is_zero() {
            self.custody.remove(&asset);
        } else {
            self.custody.insert(asset, amount);
        }
    }

    fn ensure_active(&self, account: AccountId) -> Result<(), LedgerError> {
        if self.frozen.contains(&account) {
            return Err(LedgerError::Rejected("account frozen"));
        }
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn debit(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_active(from)?;
        let new_balance = self
            .balance_of(asset, from)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientFunds)?;
        let new_custody = self
            .custody(asset)
            .checked_add(&amount)
            .ok_or(LedgerError::Rejected("custody overflow"))?;
        self.store(asset, from, new_balance);
        self.store_custody(asset, new_custody);
        Ok(())
    }

    fn credit(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_active(to)?;
        let new_custody = self
            .custody(asset)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientCustody)?;
        let new_balance = self
            .balance_of(asset, to)
            .checked_add(&amount)
            .ok_or(LedgerError::Rejected("balance overflow"))?;
        self.store_custody(asset, new_custody);
        self.store(asset, to, new_balance);
        Ok(())
    }
}
