//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Invariant preservation**: `k` never decreases across swaps.
//! 2. **Proportional mint**: a later deposit mints exactly the minimum of
//!    the two per-asset share amounts.
//! 3. **No free value**: add then remove returns at most what was added.
//! 4. **Swap reversibility**: a round trip A→B→A returns ≤ the original.
//! 5. **Accounting**: after any operation sequence, custody equals the
//!    reserves and supply equals the locked shares plus all balances.
//! 6. **Integer square root**: `isqrt(n)² ≤ n < (isqrt(n) + 1)²`.
//!
//! Reserve and amount strategies mix small unit counts with 18-decimal
//! token magnitudes (`10^18` to `10^27`), where reserve products exceed
//! `u128`.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{
    AccountId, AddLiquidity, Amount, AssetId, CallContext, RemoveLiquidity, Shares, SwapExactIn,
    Timestamp,
};
use crate::ledger::InMemoryLedger;
use crate::math::{U256, isqrt, isqrt_product};
use crate::pools::PairPool;
use crate::traits::FromConfig;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const DEADLINE: Timestamp = Timestamp::from_secs(1_000);
const E18: u128 = 1_000_000_000_000_000_000;
const E27: u128 = 1_000_000_000 * E18;

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn lp() -> AccountId {
    AccountId::from_bytes([10u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([11u8; 32])
}

fn ctx(caller: AccountId) -> CallContext {
    CallContext::new(caller, Timestamp::from_secs(1))
}

fn deposit(desired_a: u128, desired_b: u128, recipient: AccountId) -> AddLiquidity {
    AddLiquidity {
        asset_a: asset_a(),
        asset_b: asset_b(),
        desired_a: Amount::new(desired_a),
        desired_b: Amount::new(desired_b),
        min_a: Amount::ZERO,
        min_b: Amount::ZERO,
        recipient,
        deadline: DEADLINE,
    }
}

fn withdrawal(liquidity: Shares, recipient: AccountId) -> RemoveLiquidity {
    RemoveLiquidity {
        asset_a: asset_a(),
        asset_b: asset_b(),
        liquidity,
        min_a: Amount::ZERO,
        min_b: Amount::ZERO,
        recipient,
        deadline: DEADLINE,
    }
}

fn swap(a_to_b: bool, amount_in: u128) -> SwapExactIn {
    let (token_in, token_out) = if a_to_b {
        (asset_a(), asset_b())
    } else {
        (asset_b(), asset_a())
    };
    SwapExactIn::new(
        Amount::new(amount_in),
        Amount::ZERO,
        token_in,
        token_out,
        trader(),
        DEADLINE,
    )
}

/// A pool seeded by `lp` with `(ra, rb)`, and a ledger where both `lp`
/// and `trader` hold plenty of both assets.
fn seeded(ra: u128, rb: u128) -> (PairPool, InMemoryLedger) {
    let mut ledger = InMemoryLedger::new();
    for account in [lp(), trader()] {
        for asset in [asset_a(), asset_b()] {
            let Ok(()) = ledger.mint(asset, account, Amount::new(1_000 * E27)) else {
                panic!("mint");
            };
        }
    }
    let Ok(cfg) = PoolConfig::uninitialized("prop") else {
        panic!("valid config");
    };
    let Ok(mut pool) = PairPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.add_liquidity(&ctx(lp()), &deposit(ra, rb, lp()), &mut ledger) else {
        panic!("seed deposit");
    };
    (pool, ledger)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000] or [10^18, 10^27]; every pair
/// clears the first-deposit lock.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![10_000u128..=10_000_000u128, E18..=E27]
}

/// Deposit, swap and burn sizes at both unit and token scale.
fn amount_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![1u128..=5_000_000u128, E18 / 1_000..=5 * E27]
}

fn swap_strategy() -> impl Strategy<Value = (bool, u128)> {
    (any::<bool>(), amount_strategy())
}

#[derive(Debug, Clone)]
enum Op {
    Add(u128, u128),
    Remove(u128),
    Swap(bool, u128),
    Transfer(u128),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (amount_strategy(), amount_strategy()).prop_map(|(a, b)| Op::Add(a, b)),
        amount_strategy().prop_map(Op::Remove),
        swap_strategy().prop_map(|(d, x)| Op::Swap(d, x)),
        amount_strategy().prop_map(Op::Transfer),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_k_non_decreasing_across_swaps(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in proptest::collection::vec(swap_strategy(), 1..8),
    ) {
        let (mut pool, mut ledger) = seeded(ra, rb);
        for (a_to_b, amount_in) in swaps {
            let k_before = pool.reserves().product();
            let Ok(_) = pool.swap_exact_in(&ctx(trader()), &swap(a_to_b, amount_in), &mut ledger)
            else {
                continue;
            };
            let k_after = pool.reserves().product();
            prop_assert!(
                k_after >= k_before,
                "k decreased: before={} after={}",
                k_before, k_after
            );
            prop_assert!(!pool.reserves().reserve_a.is_zero());
            prop_assert!(!pool.reserves().reserve_b.is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Proportional Mint
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_mint_is_min_of_both_sides(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded(ra, rb);
        prop_assert_eq!(pool.total_supply().get(), isqrt_product(ra, rb));
        let total = U256::from(pool.total_supply().get());
        let Ok(receipt) = pool.add_liquidity(&ctx(trader()), &deposit(da, db, trader()), &mut ledger)
        else {
            return Ok(());
        };
        let a = receipt.amount_a.get();
        let b = receipt.amount_b.get();
        let by_a = U256::from(a) * total / U256::from(ra);
        let by_b = U256::from(b) * total / U256::from(rb);
        prop_assert_eq!(U256::from(receipt.liquidity.get()), by_a.min(by_b));
        prop_assert!(a <= da && b <= db, "deposit exceeded desired amounts");
    }
}

// ---------------------------------------------------------------------------
// Property 3: No Free Value
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_then_remove_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded(ra, rb);
        let Ok(added) = pool.add_liquidity(&ctx(trader()), &deposit(da, db, trader()), &mut ledger)
        else {
            return Ok(());
        };
        let Ok(removed) =
            pool.remove_liquidity(&ctx(trader()), &withdrawal(added.liquidity, trader()), &mut ledger)
        else {
            return Ok(());
        };
        prop_assert!(
            removed.amount_a <= added.amount_a,
            "profited on A: added={} removed={}",
            added.amount_a, removed.amount_a
        );
        prop_assert!(
            removed.amount_b <= added.amount_b,
            "profited on B: added={} removed={}",
            added.amount_b, removed.amount_b
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in amount_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded(ra, rb);

        // A → B
        let Ok(there) = pool.swap_exact_in(&ctx(trader()), &swap(true, amount_in), &mut ledger)
        else {
            return Ok(());
        };
        if there.amount_out.is_zero() { return Ok(()); }

        // B → A
        let Ok(back) = pool.swap_exact_in(
            &ctx(trader()),
            &swap(false, there.amount_out.get()),
            &mut ledger,
        ) else {
            return Ok(());
        };
        prop_assert!(
            back.amount_out.get() <= amount_in,
            "round-trip should lose value: final={} > original={}",
            back.amount_out, amount_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Accounting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_custody_matches_reserves(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..16),
    ) {
        let (mut pool, mut ledger) = seeded(ra, rb);
        for op in ops {
            let _ = match op {
                Op::Add(a, b) => pool
                    .add_liquidity(&ctx(trader()), &deposit(a, b, trader()), &mut ledger)
                    .map(|_| ()),
                Op::Remove(l) => pool
                    .remove_liquidity(
                        &ctx(lp()),
                        &withdrawal(Shares::new(l), lp()),
                        &mut ledger,
                    )
                    .map(|_| ()),
                Op::Swap(d, x) => pool
                    .swap_exact_in(&ctx(trader()), &swap(d, x), &mut ledger)
                    .map(|_| ()),
                Op::Transfer(s) => pool.transfer_shares(&ctx(lp()), trader(), Shares::new(s)),
            };
            prop_assert_eq!(ledger.custody(asset_a()), pool.reserves().reserve_a);
            prop_assert_eq!(ledger.custody(asset_b()), pool.reserves().reserve_b);
            prop_assert!(pool.share_ledger().is_consistent());
            prop_assert!(pool.total_supply() >= pool.locked_liquidity());
            prop_assert!(!pool.reserves().is_empty());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Integer Square Root
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_isqrt_is_floor(n in any::<u128>()) {
        let r = isqrt(n);
        prop_assert!(r.checked_mul(r).is_some_and(|sq| sq <= n));
        let next = r + 1;
        prop_assert!(next.checked_mul(next).is_none_or(|sq| sq > n));
    }
}
