//! Arithmetic utilities for pool calculations.
//!
//! - [`CheckedArithmetic`]: `Result`-returning checked ops on
//!   [`Amount`](crate::domain::Amount) and [`Shares`](crate::domain::Shares).
//! - [`isqrt`], [`isqrt_product`]: floor integer square roots for the
//!   first mint.
//! - [`mul_div`]: `⌊a × b / d⌋` with a 256-bit intermediate.
//! - Constant-product formulas: [`amount_out`], [`quote`],
//!   [`optimal_deposit`], [`initial_shares`], [`proportional_shares`],
//!   [`redeem_amounts`].

mod checked;
mod constant_product;
mod isqrt;
mod wide;

pub use checked::CheckedArithmetic;
pub use constant_product::{
    MINIMUM_LIQUIDITY, amount_out, initial_shares, optimal_deposit, proportional_shares, quote,
    redeem_amounts,
};
pub use isqrt::{isqrt, isqrt_product};
pub use ruint::aliases::U256;
pub use wide::mul_div;
