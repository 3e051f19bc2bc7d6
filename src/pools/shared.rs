//! Whole-pool mutual exclusion for concurrent callers.
//!
//! [`PairPool`] is a single-writer state machine.  [`SharedPool`] puts it
//! behind one [`Mutex`] so every operation, queries included, runs
//! against a consistent snapshot and no two mutations interleave.  Share
//! it across threads by reference or with an [`Arc`](std::sync::Arc).

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::PairPool;
use crate::domain::{
    AccountId, AddLiquidity, AddLiquidityReceipt, Amount, AssetId, CallContext, RemoveLiquidity,
    RemoveLiquidityReceipt, Reserves, ScaledPrice, Shares, SwapExactIn, SwapReceipt,
};
use crate::error::Result;
use crate::traits::{AssetLedger, NoopObserver, PoolObserver};

/// A [`PairPool`] guarded by a single lock.
///
/// The pool's own code does not panic, but a caller-supplied
/// [`AssetLedger`], [`PoolObserver`] or [`with`](Self::with) closure can
/// while the lock is held.  The pool's fields hold the last committed
/// state at every point such code runs (observers are notified only after
/// the commit), so a poisoned lock is recovered rather than propagated.
/// A ledger that panics mid-transfer can still leave its custody out of
/// step with the reserves.
#[derive(Debug)]
pub struct SharedPool<O = NoopObserver> {
    inner: Mutex<PairPool<O>>,
}

impl<O: PoolObserver> SharedPool<O> {
    /// Wraps `pool`.
    pub const fn new(pool: PairPool<O>) -> Self {
        Self {
            inner: Mutex::new(pool),
        }
    }

    /// Unwraps the pool.
    pub fn into_inner(self) -> PairPool<O> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access, for composite operations that must
    /// not interleave with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut PairPool<O>) -> R) -> R {
        f(&mut self.lock())
    }

    /// See [`PairPool::initialize`].
    pub fn initialize(&self, asset_a: AssetId, asset_b: AssetId) -> Result<()> {
        self.lock().initialize(asset_a, asset_b)
    }

    /// See [`PairPool::add_liquidity`].
    pub fn add_liquidity<L>(
        &self,
        ctx: &CallContext,
        request: &AddLiquidity,
        ledger: &mut L,
    ) -> Result<AddLiquidityReceipt>
    where
        L: AssetLedger + ?Sized,
    {
        self.lock().add_liquidity(ctx, request, ledger)
    }

    /// See [`PairPool::remove_liquidity`].
    pub fn remove_liquidity<L>(
        &self,
        ctx: &CallContext,
        request: &RemoveLiquidity,
        ledger: &mut L,
    ) -> Result<RemoveLiquidityReceipt>
    where
        L: AssetLedger + ?Sized,
    {
        self.lock().remove_liquidity(ctx, request, ledger)
    }

    /// See [`PairPool::swap_exact_in`].
    pub fn swap_exact_in<L>(
        &self,
        ctx: &CallContext,
        request: &SwapExactIn,
        ledger: &mut L,
    ) -> Result<SwapReceipt>
    where
        L: AssetLedger + ?Sized,
    {
        self.lock().swap_exact_in(ctx, request, ledger)
    }

    /// See [`PairPool::transfer_shares`].
    pub fn transfer_shares(
        &self,
        ctx: &CallContext,
        to: AccountId,
        amount: Shares,
    ) -> Result<()> {
        self.lock().transfer_shares(ctx, to, amount)
    }

    /// See [`PairPool::quote_out`].
    pub fn quote_out(
        &self,
        token_in: AssetId,
        token_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount> {
        self.lock().quote_out(token_in, token_out, amount_in)
    }

    /// See [`PairPool::price`].
    pub fn price(&self, asset_a: AssetId, asset_b: AssetId) -> Result<ScaledPrice> {
        self.lock().price(asset_a, asset_b)
    }

    /// See [`PairPool::reserves`].
    pub fn reserves(&self) -> Reserves {
        self.lock().reserves()
    }

    /// See [`PairPool::total_supply`].
    pub fn total_supply(&self) -> Shares {
        self.lock().total_supply()
    }

    /// See [`PairPool::balance_of`].
    pub fn balance_of(&self, holder: AccountId) -> Shares {
        self.lock().balance_of(holder)
    }

    fn lock(&self) -> MutexGuard<'_, PairPool<O>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::thread;

    use super::*;
    use crate::config::PoolConfig;
    use crate::domain::{PoolEvent, Timestamp};
    use crate::ledger::InMemoryLedger;
    use crate::traits::FromConfig;

    fn usdc() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    fn weth() -> AssetId {
        AssetId::from_bytes([2u8; 32])
    }

    fn trader(i: u8) -> AccountId {
        AccountId::from_bytes([20 + i; 32])
    }

    fn seeded() -> (SharedPool, Mutex<InMemoryLedger>) {
        let lp = AccountId::from_bytes([10u8; 32]);
        let mut ledger = InMemoryLedger::new();
        for asset in [usdc(), weth()] {
            let Ok(()) = ledger.mint(asset, lp, Amount::new(1_000_000_000)) else {
                panic!("mint");
            };
            for i in 0..4 {
                let Ok(()) = ledger.mint(asset, trader(i), Amount::new(1_000_000)) else {
                    panic!("mint");
                };
            }
        }
        let Ok(cfg) = PoolConfig::uninitialized("shared") else {
            panic!("valid config");
        };
        let Ok(pool) = PairPool::from_config(&cfg) else {
            panic!("pool created");
        };
        let shared = SharedPool::new(pool);
        let request = AddLiquidity {
            asset_a: usdc(),
            asset_b: weth(),
            desired_a: Amount::new(100_000_000),
            desired_b: Amount::new(100_000_000),
            min_a: Amount::ZERO,
            min_b: Amount::ZERO,
            recipient: lp,
            deadline: Timestamp::from_secs(10),
        };
        let ctx = CallContext::new(lp, Timestamp::from_secs(1));
        let Ok(_) = shared.add_liquidity(&ctx, &request, &mut ledger) else {
            panic!("seed deposit");
        };
        (shared, Mutex::new(ledger))
    }

    #[test]
    fn concurrent_swaps_never_lower_k() {
        let (shared, ledger) = seeded();
        let k_before = shared.reserves().product();

        thread::scope(|scope| {
            for i in 0..4u8 {
                let shared = &shared;
                let ledger = &ledger;
                scope.spawn(move || {
                    let (token_in, token_out) = if i % 2 == 0 {
                        (usdc(), weth())
                    } else {
                        (weth(), usdc())
                    };
                    let ctx = CallContext::new(trader(i), Timestamp::from_secs(1));
                    for _ in 0..10 {
                        let request = SwapExactIn::new(
                            Amount::new(1_000),
                            Amount::ZERO,
                            token_in,
                            token_out,
                            trader(i),
                            Timestamp::from_secs(10),
                        );
                        let mut guard = ledger.lock().unwrap_or_else(PoisonError::into_inner);
                        assert!(shared.swap_exact_in(&ctx, &request, &mut *guard).is_ok());
                    }
                });
            }
        });

        assert!(shared.reserves().product() >= k_before);
        let pool = shared.into_inner();
        let ledger = ledger.into_inner().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(ledger.custody(usdc()), pool.reserves().reserve_a);
        assert_eq!(ledger.custody(weth()), pool.reserves().reserve_b);
    }

    #[test]
    fn with_runs_exclusively() {
        let (shared, _) = seeded();
        let supply = shared.with(|pool| pool.total_supply());
        assert_eq!(supply, shared.total_supply());
        assert_eq!(shared.balance_of(trader(0)), Shares::ZERO);
        assert!(shared.price(usdc(), weth()).is_ok());
        assert!(shared.quote_out(usdc(), weth(), Amount::new(10)).is_ok());
    }

    struct PanicsOnSwap;

    impl PoolObserver for PanicsOnSwap {
        fn notify(&mut self, event: &PoolEvent) {
            if matches!(event, PoolEvent::Swap { .. }) {
                panic!("observer failure");
            }
        }
    }

    #[test]
    fn observer_panic_keeps_committed_swap() {
        let (shared, ledger) = seeded();
        let shared = SharedPool::new(shared.into_inner().with_observer(PanicsOnSwap));
        let before = shared.reserves();
        let request = SwapExactIn::new(
            Amount::new(1_000),
            Amount::ZERO,
            usdc(),
            weth(),
            trader(0),
            Timestamp::from_secs(10),
        );
        let ctx = CallContext::new(trader(0), Timestamp::from_secs(1));

        let outcome = thread::scope(|scope| {
            scope
                .spawn(|| {
                    let mut guard = ledger.lock().unwrap_or_else(PoisonError::into_inner);
                    shared.swap_exact_in(&ctx, &request, &mut *guard)
                })
                .join()
        });
        assert!(outcome.is_err());

        // poisoned, but the swap was committed before the observer ran
        let after = shared.reserves();
        assert_eq!(
            before.reserve_a.checked_add(&Amount::new(1_000)),
            Some(after.reserve_a)
        );
        assert!(after.reserve_b < before.reserve_b);
        let custody = ledger.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(custody.custody(usdc()), after.reserve_a);
        assert_eq!(custody.custody(weth()), after.reserve_b);
        assert!(shared.quote_out(usdc(), weth(), Amount::new(10)).is_ok());
    }
}
