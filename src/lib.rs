//! # Hydra Pair
//!
//! Accounting core of a constant-product automated market maker for
//! exactly one asset pair: two reserves, a fungible liquidity-share
//! ledger, and fee-less `x × y = k` pricing.
//!
//! All arithmetic is integer and checked.  Every division floors in the
//! pool's favour, so no sequence of calls can create value out of thin
//! air, and no call leaves a partial effect behind when it fails.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hydra-pair = "0.1"
//! ```
//!
//! ## Seed a pool and execute a swap
//!
//! ```rust
//! use hydra_pair::prelude::*;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([10u8; 32]);
//! let bob = AccountId::from_bytes([11u8; 32]);
//!
//! // 1. Fund accounts on the external ledger
//! let mut ledger = InMemoryLedger::new();
//! for account in [alice, bob] {
//!     ledger.mint(usdc, account, Amount::new(10_000_000)).expect("mint");
//!     ledger.mint(weth, account, Amount::new(10_000_000)).expect("mint");
//! }
//!
//! // 2. Build the pool from its configuration
//! let config = PoolConfig::with_pair("usdc-weth", usdc, weth).expect("valid config");
//! let mut pool = PairPool::from_config(&config).expect("pool created");
//!
//! // 3. First deposit: sqrt(1e6 * 4e6) - 1000 shares
//! let deadline = Timestamp::from_secs(60);
//! let ctx = CallContext::new(alice, Timestamp::from_secs(30));
//! let added = pool
//!     .add_liquidity(
//!         &ctx,
//!         &AddLiquidity {
//!             asset_a: usdc,
//!             asset_b: weth,
//!             desired_a: Amount::new(1_000_000),
//!             desired_b: Amount::new(4_000_000),
//!             min_a: Amount::ZERO,
//!             min_b: Amount::ZERO,
//!             recipient: alice,
//!             deadline,
//!         },
//!         &mut ledger,
//!     )
//!     .expect("deposit succeeded");
//! assert_eq!(added.liquidity, Shares::new(1_999_000));
//! assert_eq!(pool.total_supply(), Shares::new(2_000_000));
//!
//! // 4. Quote, then swap with the quote as slippage floor
//! let quoted = pool.quote_out(usdc, weth, Amount::new(10_000)).expect("quote");
//! let request = SwapExactIn::new(Amount::new(10_000), quoted, usdc, weth, bob, deadline);
//! let ctx = CallContext::new(bob, Timestamp::from_secs(31));
//! let receipt = pool.swap_exact_in(&ctx, &request, &mut ledger).expect("swap succeeded");
//! assert_eq!(receipt.amount_out, quoted);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Caller     │  CallContext (caller, now) + request value
//! └──────┬───────┘
//!        │ &mut PairPool / &SharedPool
//!        ▼
//! ┌──────────────┐
//! │    Pool      │  validate → compute next state → transfer → commit
//! └──┬────────┬──┘
//!    │        │ PoolEvent
//!    │        ▼
//!    │   ┌──────────────┐
//!    │   │  Observer    │  fire-and-forget
//!    │   └──────────────┘
//!    │ debit / credit
//!    ▼
//! ┌──────────────┐
//! │ AssetLedger  │  external balances and pool custody
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`PairIdentity`](domain::PairIdentity), requests, receipts, events |
//! | [`traits`] | Collaborator seams: [`AssetLedger`](traits::AssetLedger), [`PoolObserver`](traits::PoolObserver), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) blueprint |
//! | [`pools`]  | [`PairPool`](pools::PairPool), [`SharedPool`](pools::SharedPool), [`ShareLedger`](pools::ShareLedger) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) reference asset ledger |
//! | [`math`]   | Checked arithmetic, `isqrt`, constant-product formulas |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The pool emits [`tracing`] events tagged with its name: `info` for
//! committed mutations, `debug` for rejected calls, `error` for a payout
//! that failed after a commit.  The crate installs no subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
