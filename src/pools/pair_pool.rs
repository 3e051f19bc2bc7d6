//! Single-pair constant-product pool (`x × y = k`, no fee).
//!
//! [`PairPool`] owns the pair identity, both reserves, and the share
//! ledger.  Assets never live inside the pool: every mutating call takes
//! an [`AssetLedger`] and moves funds between the caller and the pool's
//! custody through it.
//!
//! # Operation Ordering
//!
//! Every mutating call first validates its inputs and computes the full
//! next state with checked arithmetic.  Only then does it touch the
//! ledger.
//!
//! | Operation          | Transfers                         | Commit           |
//! |--------------------|-----------------------------------|------------------|
//! | `add_liquidity`    | debit A, debit B from caller      | after transfers  |
//! | `swap_exact_in`    | debit in, credit out to recipient | after transfers  |
//! | `remove_liquidity` | credit A, credit B to recipient   | before transfers |
//!
//! When a later transfer of `add_liquidity` or `swap_exact_in` fails, the
//! earlier one is reversed and the pool is left untouched.  In
//! `remove_liquidity` the burn and the reserve decrease commit before any
//! asset leaves custody; if the first credit fails the commit is rolled
//! back, and if the second one fails the call reports
//! [`AmmError::TransferFailed`] with the commit in place, which the
//! enclosing transaction must treat as fatal.
//!
//! # Re-entrancy
//!
//! Mutators take `&mut self` and the ledger as a separate `&mut` borrow,
//! so nothing reachable from a ledger call can observe or modify the pool
//! mid-operation.  Use [`SharedPool`](super::SharedPool) for callers on
//! several threads.

use tracing::{debug, error, info};

use super::ShareLedger;
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, AddLiquidity, AddLiquidityReceipt, Amount, AssetId, CallContext, PairIdentity,
    PoolEvent, RemoveLiquidity, RemoveLiquidityReceipt, Reserves, ScaledPrice, Shares, Side,
    SwapExactIn, SwapReceipt,
};
use crate::error::{AmmError, Result};
use crate::math::{
    self, CheckedArithmetic, MINIMUM_LIQUIDITY, initial_shares, optimal_deposit,
    proportional_shares, redeem_amounts,
};
use crate::traits::{AssetLedger, FromConfig, NoopObserver, PoolObserver};

/// A constant-product pool for exactly one asset pair.
///
/// Created from a [`PoolConfig`] via [`FromConfig`].  The pool starts
/// with empty reserves and zero supply; its pair is either bound by the
/// configuration, by [`initialize`](Self::initialize), or by the first
/// successful [`add_liquidity`](Self::add_liquidity).
///
/// # State
///
/// - `pair`: the positional `(A, B)` identity, `None` until initialised
/// - `reserves`: pool holdings in smallest units, both zero or both non-zero
/// - `shares`: holder balances, total supply, and the locked minimum
/// - `observer`: receives a [`PoolEvent`] after every committed mutation
///
/// # Example
///
/// ```rust
/// use hydra_pair::config::PoolConfig;
/// use hydra_pair::domain::{
///     AccountId, AddLiquidity, Amount, AssetId, CallContext, Shares, SwapExactIn, Timestamp,
/// };
/// use hydra_pair::ledger::InMemoryLedger;
/// use hydra_pair::pools::PairPool;
/// use hydra_pair::traits::FromConfig;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
/// let alice = AccountId::from_bytes([10u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(usdc, alice, Amount::new(10_000_000)).expect("mint");
/// ledger.mint(weth, alice, Amount::new(10_000_000)).expect("mint");
///
/// let cfg = PoolConfig::uninitialized("usdc-weth").expect("valid config");
/// let mut pool = PairPool::from_config(&cfg).expect("pool created");
/// let ctx = CallContext::new(alice, Timestamp::from_secs(100));
///
/// let receipt = pool
///     .add_liquidity(
///         &ctx,
///         &AddLiquidity {
///             asset_a: usdc,
///             asset_b: weth,
///             desired_a: Amount::new(1_000_000),
///             desired_b: Amount::new(4_000_000),
///             min_a: Amount::ZERO,
///             min_b: Amount::ZERO,
///             recipient: alice,
///             deadline: Timestamp::from_secs(200),
///         },
///         &mut ledger,
///     )
///     .expect("first deposit");
/// assert_eq!(receipt.liquidity, Shares::new(1_999_000));
///
/// let swap = SwapExactIn::new(
///     Amount::new(1_000),
///     Amount::ZERO,
///     usdc,
///     weth,
///     alice,
///     Timestamp::from_secs(200),
/// );
/// let out = pool.swap_exact_in(&ctx, &swap, &mut ledger).expect("swap ok");
/// assert!(out.amount_out.get() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct PairPool<O = NoopObserver> {
    name: String,
    pair: Option<PairIdentity>,
    reserves: Reserves,
    shares: ShareLedger,
    observer: O,
}

impl FromConfig<PoolConfig> for PairPool {
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: config.name().to_owned(),
            pair: config.pair(),
            reserves: Reserves::default(),
            shares: ShareLedger::new(),
            observer: NoopObserver,
        })
    }
}

impl<O: PoolObserver> PairPool<O> {
    /// Replaces the observer, keeping all pool state.
    pub fn with_observer<P: PoolObserver>(self, observer: P) -> PairPool<P> {
        PairPool {
            name: self.name,
            pair: self.pair,
            reserves: self.reserves,
            shares: self.shares,
            observer,
        }
    }

    // -- queries --------------------------------------------------------------

    /// Returns the pool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pair identity, `None` until initialised.
    #[must_use]
    pub const fn pair(&self) -> Option<PairIdentity> {
        self.pair
    }

    /// Returns `true` once the pair identity is fixed.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.pair.is_some()
    }

    /// Current `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }

    /// Outstanding shares, the locked minimum included.
    #[must_use]
    pub const fn total_supply(&self) -> Shares {
        self.shares.total_supply()
    }

    /// Share balance of `holder`.
    #[must_use]
    pub fn balance_of(&self, holder: AccountId) -> Shares {
        self.shares.balance_of(holder)
    }

    /// Shares locked forever by the first deposit.
    #[must_use]
    pub const fn locked_liquidity(&self) -> Shares {
        self.shares.locked()
    }

    /// Read access to the share ledger.
    #[must_use]
    pub const fn share_ledger(&self) -> &ShareLedger {
        &self.shares
    }

    /// Returns the observer.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably, e.g. to drain recorded events.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Output a swap of `amount_in` would produce right now.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InvalidToken`] if either token is not in the pair.
    /// - [`AmmError::SameToken`] if both tokens are the same.
    /// - [`AmmError::NoLiquidity`] if either reserve is zero.
    pub fn quote_out(
        &self,
        token_in: AssetId,
        token_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        let (side_in, side_out) = self.direction(token_in, token_out)?;
        math::amount_out(
            amount_in,
            self.reserves.get(side_in),
            self.reserves.get(side_out),
        )
    }

    /// Price of one unit of `asset_a` in `asset_b`, scaled by `10^18`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PairMismatch`] unless `(asset_a, asset_b)` is the
    ///   pool's pair in the stored order.
    /// - [`AmmError::NoLiquidity`] if either reserve is zero.
    pub fn price(&self, asset_a: AssetId, asset_b: AssetId) -> Result<ScaledPrice> {
        self.exact_pair(asset_a, asset_b)?;
        ScaledPrice::from_reserves(self.reserves.reserve_a, self.reserves.reserve_b)
    }

    // -- mutations ------------------------------------------------------------

    /// Fixes the pair identity without moving any funds.
    ///
    /// # Errors
    ///
    /// - [`AmmError::AlreadyInitialized`] if the pair is already set.
    /// - [`AmmError::InvalidPair`] if the assets are equal or null.
    pub fn initialize(&mut self, asset_a: AssetId, asset_b: AssetId) -> Result<()> {
        if self.pair.is_some() {
            return Err(AmmError::AlreadyInitialized);
        }
        let pair = PairIdentity::new(asset_a, asset_b)?;
        self.pair = Some(pair);
        info!(pool = %self.name, %asset_a, %asset_b, "pool initialized");
        Ok(())
    }

    /// Deposits both assets and mints shares to `request.recipient`.
    ///
    /// On an uninitialised pool the request's `(asset_a, asset_b)` becomes
    /// the pair; that binding only sticks if the whole call succeeds.  The
    /// first deposit takes the desired amounts as given, skipping the
    /// minimum checks, and locks [`MINIMUM_LIQUIDITY`] shares.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if `now > deadline`.
    /// - [`AmmError::InvalidRecipient`] for the null recipient.
    /// - [`AmmError::InvalidPair`] / [`AmmError::PairMismatch`] for a bad
    ///   or non-matching pair.
    /// - [`AmmError::InsufficientA`] / [`AmmError::InsufficientB`] when the
    ///   ratio-adjusted amount falls below its minimum.
    /// - [`AmmError::InsufficientLiquidity`] if no share would be minted.
    /// - [`AmmError::TransferFailed`] if either debit fails.
    pub fn add_liquidity<L>(
        &mut self,
        ctx: &CallContext,
        request: &AddLiquidity,
        ledger: &mut L,
    ) -> Result<AddLiquidityReceipt>
    where
        L: AssetLedger + ?Sized,
    {
        let result = self.execute_add(ctx, request, ledger);
        self.trace_rejection("add_liquidity", ctx, &result);
        result
    }

    /// Burns the caller's shares and pays out the proportional reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if `now > deadline`.
    /// - [`AmmError::PairMismatch`] unless the assets match positionally.
    /// - [`AmmError::InvalidAmount`] for zero `liquidity`.
    /// - [`AmmError::InsufficientBalance`] if the caller holds less.
    /// - [`AmmError::InvalidRecipient`] for the null recipient.
    /// - [`AmmError::InsufficientA`] / [`AmmError::InsufficientB`] when a
    ///   payout falls below its minimum.
    /// - [`AmmError::TransferFailed`] if a credit fails.
    pub fn remove_liquidity<L>(
        &mut self,
        ctx: &CallContext,
        request: &RemoveLiquidity,
        ledger: &mut L,
    ) -> Result<RemoveLiquidityReceipt>
    where
        L: AssetLedger + ?Sized,
    {
        let result = self.execute_remove(ctx, request, ledger);
        self.trace_rejection("remove_liquidity", ctx, &result);
        result
    }

    /// Sells exactly `request.amount_in` of `path[0]` for `path[1]`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if `now > deadline`.
    /// - [`AmmError::InvalidAmount`] for a zero input.
    /// - [`AmmError::InvalidPath`] unless the path has two entries.
    /// - [`AmmError::InvalidRecipient`] for the null recipient.
    /// - [`AmmError::InvalidToken`] / [`AmmError::SameToken`] for a path
    ///   that does not cross the pair.
    /// - [`AmmError::NoLiquidity`] if either reserve is zero.
    /// - [`AmmError::InsufficientOutput`] below `amount_out_min`.
    /// - [`AmmError::TransferFailed`] if the debit or the credit fails.
    pub fn swap_exact_in<L>(
        &mut self,
        ctx: &CallContext,
        request: &SwapExactIn,
        ledger: &mut L,
    ) -> Result<SwapReceipt>
    where
        L: AssetLedger + ?Sized,
    {
        let result = self.execute_swap(ctx, request, ledger);
        self.trace_rejection("swap_exact_in", ctx, &result);
        result
    }

    /// Moves `amount` of the caller's shares to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidRecipient`] for the null recipient.
    /// - [`AmmError::InvalidAmount`] for a zero amount.
    /// - [`AmmError::InsufficientBalance`] if the caller holds less.
    pub fn transfer_shares(
        &mut self,
        ctx: &CallContext,
        to: AccountId,
        amount: Shares,
    ) -> Result<()> {
        let result = self.execute_transfer(ctx, to, amount);
        self.trace_rejection("transfer_shares", ctx, &result);
        result
    }

    // -- internals ------------------------------------------------------------

    fn execute_add<L>(
        &mut self,
        ctx: &CallContext,
        request: &AddLiquidity,
        ledger: &mut L,
    ) -> Result<AddLiquidityReceipt>
    where
        L: AssetLedger + ?Sized,
    {
        ctx.ensure_before(request.deadline)?;
        if request.recipient.is_null() {
            return Err(AmmError::InvalidRecipient);
        }
        let pair = match self.pair {
            Some(_) => self.exact_pair(request.asset_a, request.asset_b)?,
            None => PairIdentity::new(request.asset_a, request.asset_b)?,
        };

        let (amount_a, amount_b) = optimal_deposit(
            (request.desired_a, request.desired_b),
            (request.min_a, request.min_b),
            self.reserves.as_tuple(),
        )?;

        let total_supply = self.shares.total_supply();
        let (liquidity, lock) = if total_supply.is_zero() {
            (initial_shares(amount_a, amount_b)?, MINIMUM_LIQUIDITY)
        } else {
            let minted = proportional_shares(
                (amount_a, amount_b),
                self.reserves.as_tuple(),
                total_supply,
            )?;
            (minted, Shares::ZERO)
        };
        let mint = self.shares.plan_mint(request.recipient, liquidity, lock)?;
        let next_reserves = Reserves::new(
            self.reserves
                .reserve_a
                .safe_add(&amount_a, "reserve_a overflow on deposit")?,
            self.reserves
                .reserve_b
                .safe_add(&amount_b, "reserve_b overflow on deposit")?,
        );

        let caller = ctx.caller();
        ledger.debit(pair.asset_a(), caller, amount_a)?;
        if let Err(err) = ledger.debit(pair.asset_b(), caller, amount_b) {
            self.refund(ledger, pair.asset_a(), caller, amount_a);
            return Err(err.into());
        }

        self.pair = Some(pair);
        self.reserves = next_reserves;
        self.shares.apply(&mint);

        info!(
            pool = %self.name,
            recipient = %mint.holder(),
            %amount_a,
            %amount_b,
            %liquidity,
            total_supply = %mint.next_total_supply(),
            "liquidity added"
        );
        self.observer.notify(&PoolEvent::LiquidityAdded {
            recipient: request.recipient,
            amount_a,
            amount_b,
            liquidity,
        });
        Ok(AddLiquidityReceipt {
            amount_a,
            amount_b,
            liquidity,
        })
    }

    fn execute_remove<L>(
        &mut self,
        ctx: &CallContext,
        request: &RemoveLiquidity,
        ledger: &mut L,
    ) -> Result<RemoveLiquidityReceipt>
    where
        L: AssetLedger + ?Sized,
    {
        ctx.ensure_before(request.deadline)?;
        let pair = self.exact_pair(request.asset_a, request.asset_b)?;
        let caller = ctx.caller();
        let liquidity = request.liquidity;
        if liquidity.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        if self.shares.balance_of(caller) < liquidity {
            return Err(AmmError::InsufficientBalance);
        }
        if request.recipient.is_null() {
            return Err(AmmError::InvalidRecipient);
        }

        let (amount_a, amount_b) = redeem_amounts(
            liquidity,
            self.reserves.as_tuple(),
            self.shares.total_supply(),
        )?;
        if amount_a < request.min_a {
            return Err(AmmError::InsufficientA);
        }
        if amount_b < request.min_b {
            return Err(AmmError::InsufficientB);
        }
        let burn = self.shares.plan_burn(caller, liquidity)?;
        let previous = self.reserves;
        let next_reserves = Reserves::new(
            previous
                .reserve_a
                .safe_sub(&amount_a, "reserve_a underflow on redeem")?,
            previous
                .reserve_b
                .safe_sub(&amount_b, "reserve_b underflow on redeem")?,
        );

        self.reserves = next_reserves;
        self.shares.apply(&burn);

        if let Err(err) = ledger.credit(pair.asset_a(), request.recipient, amount_a) {
            self.reserves = previous;
            self.shares.revert(&burn);
            return Err(err.into());
        }
        if let Err(err) = ledger.credit(pair.asset_b(), request.recipient, amount_b) {
            error!(
                pool = %self.name,
                recipient = %request.recipient,
                %amount_a,
                %amount_b,
                %err,
                "asset B payout failed after commit; custody and reserves diverge"
            );
            return Err(err.into());
        }

        info!(
            pool = %self.name,
            recipient = %request.recipient,
            %amount_a,
            %amount_b,
            holder = %burn.holder(),
            %liquidity,
            total_supply = %burn.next_total_supply(),
            "liquidity removed"
        );
        self.observer.notify(&PoolEvent::LiquidityRemoved {
            recipient: request.recipient,
            amount_a,
            amount_b,
            liquidity,
        });
        Ok(RemoveLiquidityReceipt { amount_a, amount_b })
    }

    fn execute_swap<L>(
        &mut self,
        ctx: &CallContext,
        request: &SwapExactIn,
        ledger: &mut L,
    ) -> Result<SwapReceipt>
    where
        L: AssetLedger + ?Sized,
    {
        ctx.ensure_before(request.deadline)?;
        let amount_in = request.amount_in;
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        let &[token_in, token_out] = request.path.as_slice() else {
            return Err(AmmError::InvalidPath);
        };
        if request.recipient.is_null() {
            return Err(AmmError::InvalidRecipient);
        }
        let (side_in, side_out) = self.direction(token_in, token_out)?;

        let reserve_in = self.reserves.get(side_in);
        let reserve_out = self.reserves.get(side_out);
        let amount_out = math::amount_out(amount_in, reserve_in, reserve_out)?;
        if amount_out < request.amount_out_min {
            return Err(AmmError::InsufficientOutput);
        }
        let next_reserves = self
            .reserves
            .with(
                side_in,
                reserve_in.safe_add(&amount_in, "reserve_in overflow on swap")?,
            )
            .with(
                side_out,
                reserve_out.safe_sub(&amount_out, "reserve_out underflow on swap")?,
            );

        let caller = ctx.caller();
        ledger.debit(token_in, caller, amount_in)?;
        if let Err(err) = ledger.credit(token_out, request.recipient, amount_out) {
            self.refund(ledger, token_in, caller, amount_in);
            return Err(err.into());
        }

        self.reserves = next_reserves;

        info!(
            pool = %self.name,
            %caller,
            %token_in,
            %token_out,
            %amount_in,
            %amount_out,
            "swap executed"
        );
        self.observer.notify(&PoolEvent::Swap {
            caller,
            token_in,
            token_out,
            amount_in,
            amount_out,
        });
        Ok(SwapReceipt {
            token_in,
            token_out,
            amount_in,
            amount_out,
        })
    }

    fn execute_transfer(&mut self, ctx: &CallContext, to: AccountId, amount: Shares) -> Result<()> {
        if to.is_null() {
            return Err(AmmError::InvalidRecipient);
        }
        if amount.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        let from = ctx.caller();
        self.shares.transfer(from, to, amount)?;
        debug!(pool = %self.name, %from, %to, %amount, "shares transferred");
        self.observer
            .notify(&PoolEvent::SharesTransferred { from, to, amount });
        Ok(())
    }

    /// The stored pair, if `(asset_a, asset_b)` matches it positionally.
    fn exact_pair(&self, asset_a: AssetId, asset_b: AssetId) -> Result<PairIdentity> {
        self.pair
            .filter(|pair| pair.matches_exact(asset_a, asset_b))
            .ok_or(AmmError::PairMismatch)
    }

    /// Resolves a swap direction to reserve sides.
    fn direction(&self, token_in: AssetId, token_out: AssetId) -> Result<(Side, Side)> {
        let pair = self.pair.ok_or(AmmError::InvalidToken)?;
        let side_in = pair.side_of(token_in).ok_or(AmmError::InvalidToken)?;
        let side_out = pair.side_of(token_out).ok_or(AmmError::InvalidToken)?;
        if side_out != side_in.flip() {
            return Err(AmmError::SameToken);
        }
        Ok((side_in, side_out))
    }

    /// Returns a completed debit.  A failure here cannot be reported to
    /// the caller any better than the error that triggered it, so it is
    /// logged.
    fn refund<L>(&self, ledger: &mut L, asset: AssetId, to: AccountId, amount: Amount)
    where
        L: AssetLedger + ?Sized,
    {
        if let Err(err) = ledger.credit(asset, to, amount) {
            error!(
                pool = %self.name,
                %asset,
                %to,
                %amount,
                %err,
                "refund failed; custody holds unmatched funds"
            );
        }
    }

    fn trace_rejection<T>(&self, op: &'static str, ctx: &CallContext, result: &Result<T>) {
        if let Err(err) = result {
            debug!(pool = %self.name, op, caller = %ctx.caller(), %err, "call rejected");
        }
    }
}
