//! Transaction framing passed into every mutating call.

use core::fmt;

use super::AccountId;
use crate::error::AmmError;

/// Wall-clock instant in seconds, as supplied by the caller's framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from raw seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the raw seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Who is calling, and when.
///
/// The pool does not implement sessions; the enclosing transaction layer
/// hands these in as plain values.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AccountId, CallContext, Timestamp};
///
/// let ctx = CallContext::new(AccountId::from_bytes([7u8; 32]), Timestamp::from_secs(100));
/// assert!(ctx.ensure_before(Timestamp::from_secs(100)).is_ok());
/// assert!(ctx.ensure_before(Timestamp::from_secs(99)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    caller: AccountId,
    now: Timestamp,
}

impl CallContext {
    /// Creates a context for `caller` at time `now`.
    #[must_use]
    pub const fn new(caller: AccountId, now: Timestamp) -> Self {
        Self { caller, now }
    }

    /// Returns the calling account.
    #[must_use]
    pub const fn caller(&self) -> AccountId {
        self.caller
    }

    /// Returns the current time.
    #[must_use]
    pub const fn now(&self) -> Timestamp {
        self.now
    }

    /// Checks the deadline; `now == deadline` is still in time.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Expired`] if `now > deadline`.
    pub fn ensure_before(&self, deadline: Timestamp) -> Result<(), AmmError> {
        if self.now > deadline {
            return Err(AmmError::Expired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_at(secs: u64) -> CallContext {
        CallContext::new(AccountId::from_bytes([1u8; 32]), Timestamp::from_secs(secs))
    }

    #[test]
    fn deadline_boundary_is_inclusive() {
        let deadline = Timestamp::from_secs(1_000);
        assert_eq!(ctx_at(999).ensure_before(deadline), Ok(()));
        assert_eq!(ctx_at(1_000).ensure_before(deadline), Ok(()));
        assert_eq!(ctx_at(1_001).ensure_before(deadline), Err(AmmError::Expired));
    }

    #[test]
    fn accessors() {
        let ctx = ctx_at(5);
        assert_eq!(ctx.caller(), AccountId::from_bytes([1u8; 32]));
        assert_eq!(ctx.now().as_secs(), 5);
        assert_eq!(ctx.now().to_string(), "5s");
    }
}
