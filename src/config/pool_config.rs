//! Configuration for a single-pair pool.

use crate::domain::{AssetId, PairIdentity};
use crate::error::AmmError;

/// Declarative blueprint for a [`PairPool`](crate::pools::PairPool).
///
/// A pool either starts uninitialised (its pair is fixed later by
/// `initialize` or by the first deposit), or starts with a pair identity
/// already bound.  Reserves and supply always start at zero.
///
/// # Validation
///
/// - `name` must be non-empty; it tags every log line the pool emits.
/// - A configured pair must hold two distinct non-null assets.
///
/// # Examples
///
/// ```
/// use hydra_pair::config::PoolConfig;
/// use hydra_pair::domain::AssetId;
///
/// let cfg = PoolConfig::with_pair(
///     "usdc-weth",
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
/// )
/// .expect("valid pair");
/// assert!(cfg.pair().is_some());
///
/// assert!(PoolConfig::uninitialized("fresh").expect("valid").pair().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    name: String,
    pair: Option<PairIdentity>,
}

impl PoolConfig {
    /// Creates a config for a pool whose pair is bound later.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `name` is empty.
    pub fn uninitialized(name: impl Into<String>) -> Result<Self, AmmError> {
        let config = Self {
            name: name.into(),
            pair: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a config for a pool whose pair is `(asset_a, asset_b)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPair`] if the assets are equal or null.
    /// - [`AmmError::InvalidConfiguration`] if `name` is empty.
    pub fn with_pair(
        name: impl Into<String>,
        asset_a: AssetId,
        asset_b: AssetId,
    ) -> Result<Self, AmmError> {
        let config = Self {
            name: name.into(),
            pair: Some(PairIdentity::new(asset_a, asset_b)?),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `name` is empty.
    /// - [`AmmError::InvalidPair`] if the pair no longer satisfies its
    ///   invariants.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.name.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration("pool name must not be empty"));
        }
        if let Some(pair) = self.pair {
            PairIdentity::new(pair.asset_a(), pair.asset_b())?;
        }
        Ok(())
    }

    /// Returns the pool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pre-bound pair, if any.
    #[must_use]
    pub const fn pair(&self) -> Option<PairIdentity> {
        self.pair
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    #[test]
    fn uninitialized_has_no_pair() {
        let cfg = PoolConfig::uninitialized("pool");
        assert!(matches!(cfg, Ok(ref c) if c.pair().is_none() && c.name() == "pool"));
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(
            PoolConfig::uninitialized("  "),
            Err(AmmError::InvalidConfiguration("pool name must not be empty"))
        );
    }

    #[test]
    fn invalid_pair_rejected() {
        assert_eq!(
            PoolConfig::with_pair("pool", asset(1), asset(1)),
            Err(AmmError::InvalidPair)
        );
        assert_eq!(
            PoolConfig::with_pair("pool", AssetId::NULL, asset(1)),
            Err(AmmError::InvalidPair)
        );
    }

    #[test]
    fn pair_order_is_kept() {
        let cfg = PoolConfig::with_pair("pool", asset(2), asset(1));
        let Ok(cfg) = cfg else {
            panic!("valid config");
        };
        let pair = cfg.pair();
        assert_eq!(pair.map(|p| p.asset_a()), Some(asset(2)));
    }
}
