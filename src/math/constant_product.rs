//! Pure constant-product formulas (`x × y = k`, no fee).
//!
//! Every function here is stateless and floors every division, so the
//! pool never pays out a fractional unit it does not hold.  The
//! [`PairPool`](crate::pools::PairPool) composes them; integrators can
//! call them directly to price without a pool instance.
//!
//! # Swap
//!
//! ```text
//! amount_out = ⌊amount_in × reserve_out / (reserve_in + amount_in)⌋
//! ```
//!
//! # Mint
//!
//! ```text
//! first deposit:  ⌊√(a × b)⌋ − MINIMUM_LIQUIDITY
//! later deposits: min(⌊a × T / Ra⌋, ⌊b × T / Rb⌋)
//! ```
//!
//! # Redeem
//!
//! ```text
//! amount_x = ⌊liquidity × Rx / T⌋
//! ```
//!
//! Every product above is formed in 256 bits; only a floored result that
//! does not fit in `u128` is an overflow.

use super::wide::{mul_div_wide, widen};
use super::{CheckedArithmetic, isqrt_product, mul_div};
use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Shares permanently locked to the burned holder at the first deposit.
pub const MINIMUM_LIQUIDITY: Shares = Shares::new(1_000);

/// Output of an exact-in swap against `(reserve_in, reserve_out)`.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::NoLiquidity`] if either reserve is zero.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Amount;
/// use hydra_pair::math::amount_out;
///
/// let out = amount_out(Amount::new(100), Amount::new(1_000), Amount::new(1_000));
/// assert_eq!(out, Ok(Amount::new(90)));
/// ```
pub fn amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::NoLiquidity);
    }
    let denominator = widen(reserve_in.get()).saturating_add(widen(amount_in.get()));
    mul_div_wide(
        amount_in.get(),
        reserve_out.get(),
        denominator,
        "swap output overflow",
    )
    .map(Amount::new)
}

/// Amount of the counter-asset equal in value to `amount_a` at the
/// current reserve ratio: `⌊amount_a × reserve_b / reserve_a⌋`.
///
/// # Errors
///
/// - [`AmmError::NoLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, AmmError> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::NoLiquidity);
    }
    scale(amount_a, reserve_b, reserve_a, "quote overflow")
}

/// Chooses the deposit amounts for an add-liquidity call.
///
/// An empty pool (both reserves zero) takes the desired amounts as-is and
/// applies no minimum check.  Otherwise the deposit is trimmed on one
/// side to match the current ratio, and the trimmed side is checked
/// against its floor.
///
/// # Errors
///
/// - [`AmmError::InsufficientB`] if the trimmed B amount is below `min_b`.
/// - [`AmmError::InsufficientA`] if the trimmed A amount is below `min_a`.
/// - [`AmmError::NoLiquidity`] if exactly one reserve is zero.
/// - [`AmmError::Overflow`] on arithmetic overflow.
pub fn optimal_deposit(
    desired: (Amount, Amount),
    min: (Amount, Amount),
    reserves: (Amount, Amount),
) -> Result<(Amount, Amount), AmmError> {
    let (desired_a, desired_b) = desired;
    let (min_a, min_b) = min;
    let (reserve_a, reserve_b) = reserves;

    if reserve_a.is_zero() && reserve_b.is_zero() {
        return Ok((desired_a, desired_b));
    }

    let optimal_b = quote(desired_a, reserve_a, reserve_b)?;
    if optimal_b <= desired_b {
        if optimal_b < min_b {
            return Err(AmmError::InsufficientB);
        }
        return Ok((desired_a, optimal_b));
    }

    let optimal_a = quote(desired_b, reserve_b, reserve_a)?;
    // optimal_a <= desired_a always holds once optimal_b > desired_b.
    if optimal_a > desired_a || optimal_a < min_a {
        return Err(AmmError::InsufficientA);
    }
    Ok((optimal_a, desired_b))
}

/// Shares minted by the very first deposit, after the
/// [`MINIMUM_LIQUIDITY`] lock is taken out.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientLiquidity`] if
/// `⌊√(a × b)⌋ ≤ MINIMUM_LIQUIDITY`.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, Shares};
/// use hydra_pair::math::initial_shares;
///
/// let minted = initial_shares(Amount::new(1_000_000), Amount::new(4_000_000));
/// assert_eq!(minted, Ok(Shares::new(1_999_000)));
/// ```
pub fn initial_shares(amount_a: Amount, amount_b: Amount) -> Result<Shares, AmmError> {
    let root = Shares::new(isqrt_product(amount_a.get(), amount_b.get()));
    if root <= MINIMUM_LIQUIDITY {
        return Err(AmmError::InsufficientLiquidity);
    }
    root.safe_sub(&MINIMUM_LIQUIDITY, "initial shares underflow")
}

/// Shares minted by a deposit into a funded pool: the smaller of the two
/// per-asset proportional mints.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if the result is zero.
/// - [`AmmError::DivisionByZero`] if a reserve is zero.
/// - [`AmmError::Overflow`] if a per-asset mint exceeds `u128`.
pub fn proportional_shares(
    amounts: (Amount, Amount),
    reserves: (Amount, Amount),
    total_supply: Shares,
) -> Result<Shares, AmmError> {
    let total = total_supply.as_amount();
    let by_a = scale(amounts.0, total, reserves.0, "mint_a overflow")?;
    let by_b = scale(amounts.1, total, reserves.1, "mint_b overflow")?;
    let minted = Shares::from(by_a.min(by_b));
    if minted.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(minted)
}

/// Amounts of A and B paid out for burning `liquidity` shares.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `total_supply` is zero.
/// - [`AmmError::Overflow`] if `liquidity` exceeds `total_supply` by
///   enough to push a payout past `u128`.
pub fn redeem_amounts(
    liquidity: Shares,
    reserves: (Amount, Amount),
    total_supply: Shares,
) -> Result<(Amount, Amount), AmmError> {
    let total = total_supply.as_amount();
    let amount_a = scale(liquidity.as_amount(), reserves.0, total, "redeem_a overflow")?;
    let amount_b = scale(liquidity.as_amount(), reserves.1, total, "redeem_b overflow")?;
    Ok((amount_a, amount_b))
}

fn scale(
    amount: Amount,
    numerator: Amount,
    denominator: Amount,
    context: &'static str,
) -> Result<Amount, AmmError> {
    mul_div(amount.get(), numerator.get(), denominator.get(), context).map(Amount::new)
}
