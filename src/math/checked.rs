//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait lifts the `Option`-returning checked
//! operations of [`Amount`] and [`Shares`] into
//! [`Result<Self, AmmError>`](crate::error::AmmError), so pool code can
//! use `?` and every failure names the computation that broke.
//!
//! # Examples
//!
//! ```
//! use hydra_pair::domain::Amount;
//! use hydra_pair::math::CheckedArithmetic;
//!
//! let a = Amount::new(100);
//! assert_eq!(a.safe_add(&Amount::new(1), "example"), Ok(Amount::new(101)));
//! assert!(Amount::MAX.safe_add(&Amount::new(1), "example").is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No wrapping or saturation**: errors propagate instead.
/// - Division always floors.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] tagged with `context`.
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] tagged with `context`.
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] tagged with `context`.
    fn safe_mul(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Floor division.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError>;
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other).ok_or(AmmError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::Underflow(context))
    }

    #[inline]
    fn safe_mul(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_mul(other).ok_or(AmmError::Overflow(context))
    }

    #[inline]
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_floor_div(other).ok_or(AmmError::DivisionByZero)
    }
}

// ---------------------------------------------------------------------------
// Shares
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other).ok_or(AmmError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::Underflow(context))
    }

    #[inline]
    fn safe_mul(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.get()
            .checked_mul(other.get())
            .map(Shares::new)
            .ok_or(AmmError::Overflow(context))
    }

    #[inline]
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError> {
        self.get()
            .checked_div(other.get())
            .map(Shares::new)
            .ok_or(AmmError::DivisionByZero)
    }
}
