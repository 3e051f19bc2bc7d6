//! Chain-agnostic asset reference.

use core::fmt;

/// Reference to one fungible asset (the address of its ledger).
///
/// Wraps a fixed-size `[u8; 32]` array.  The all-zero value is the null
/// reference: it is constructible, but never accepted as a pair member.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::AssetId;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// assert!(!usdc.is_null());
/// assert!(AssetId::NULL.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// The null asset reference.
    pub const NULL: Self = Self([0u8; 32]);

    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for the null reference.
    #[must_use]
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter().take(4) {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_all_zeros() {
        assert_eq!(AssetId::NULL.as_bytes(), [0u8; 32]);
        assert!(AssetId::from_bytes([0u8; 32]).is_null());
    }

    #[test]
    fn non_zero_is_not_null() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(!AssetId::from_bytes(bytes).is_null());
    }

    #[test]
    fn display_is_short_hex_prefix() {
        let id = AssetId::from_bytes([0xab; 32]);
        assert_eq!(id.to_string(), "abababab…");
    }
}
