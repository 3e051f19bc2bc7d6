//! Construction of a pool from a declarative configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during
//! construction.  A successfully constructed pool is in a valid initial
//! state: either uninitialised with empty reserves and supply, or with a
//! pair identity that already satisfies the pair invariants.

use crate::error::AmmError;

/// Builds `Self` from a configuration value `C`.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for PairPool`
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// The configuration is taken by reference so it can be reused, for
    /// example to build several independent pools in tests.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPair`] if a configured pair is invalid.
    /// - [`AmmError::InvalidConfiguration`] for any other rejected value.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
