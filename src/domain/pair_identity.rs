//! Positional pair of distinct assets.

use super::AssetId;
use crate::error::AmmError;

/// Which slot of the pair an asset occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first asset of the pair (`A`).
    A,
    /// The second asset of the pair (`B`).
    B,
}

impl Side {
    /// Returns the opposite slot.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// The two assets a pool trades, in the order they were first supplied.
///
/// Unlike a canonically sorted pair, `PairIdentity` keeps the caller's
/// order: `(A, B)` and `(B, A)` are different identities, and liquidity
/// calls must name the assets in the stored positions.
///
/// # Invariants
///
/// - `asset_a != asset_b`
/// - neither asset is [`AssetId::NULL`]
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AssetId, PairIdentity};
///
/// let a = AssetId::from_bytes([2u8; 32]);
/// let b = AssetId::from_bytes([1u8; 32]);
/// let pair = PairIdentity::new(a, b).expect("distinct assets");
/// assert_eq!(pair.asset_a(), a);
/// assert!(pair.matches_exact(a, b));
/// assert!(!pair.matches_exact(b, a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairIdentity {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl PairIdentity {
    /// Creates a pair, preserving argument order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPair`] if the assets are equal or either
    /// is null.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        if asset_a == asset_b || asset_a.is_null() || asset_b.is_null() {
            return Err(AmmError::InvalidPair);
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the first asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns the asset stored in `side`.
    #[must_use]
    pub const fn asset(&self, side: Side) -> AssetId {
        match side {
            Side::A => self.asset_a,
            Side::B => self.asset_b,
        }
    }

    /// Returns `true` only if `(asset_a, asset_b)` equals the stored pair
    /// slot by slot.
    #[must_use]
    pub fn matches_exact(&self, asset_a: AssetId, asset_b: AssetId) -> bool {
        self.asset_a == asset_a && self.asset_b == asset_b
    }

    /// Returns the slot holding `asset`, if it belongs to the pair.
    #[must_use]
    pub fn side_of(&self, asset: AssetId) -> Option<Side> {
        if asset == self.asset_a {
            Some(Side::A)
        } else if asset == self.asset_b {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Returns `true` if `asset` is one of the two pair members.
    #[must_use]
    pub fn contains(&self, asset: AssetId) -> bool {
        self.side_of(asset).is_some()
    }
}
