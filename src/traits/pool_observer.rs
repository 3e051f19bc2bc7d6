//! Side-channel notification of committed pool changes.

use crate::domain::PoolEvent;

/// Receives [`PoolEvent`]s after the pool has committed a mutation.
///
/// Delivery is fire-and-forget: observers cannot fail the operation and
/// see events only for calls that succeeded.
pub trait PoolObserver {
    /// Called once per committed event.
    fn notify(&mut self, event: &PoolEvent);
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoopObserver;

impl PoolObserver for NoopObserver {
    fn notify(&mut self, _event: &PoolEvent) {}
}

/// Observer that keeps every event in arrival order.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AccountId, PoolEvent, Shares};
/// use hydra_pair::traits::{EventLog, PoolObserver};
///
/// let mut log = EventLog::default();
/// log.notify(&PoolEvent::SharesTransferred {
///     from: AccountId::from_bytes([1u8; 32]),
///     to: AccountId::from_bytes([2u8; 32]),
///     amount: Shares::new(10),
/// });
/// assert_eq!(log.events().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventLog {
    events: Vec<PoolEvent>,
}

impl EventLog {
    /// Returns all recorded events.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Returns the most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PoolEvent> {
        self.events.last()
    }

    /// Removes and returns every recorded event.
    pub fn drain(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }
}

impl PoolObserver for EventLog {
    fn notify(&mut self, event: &PoolEvent) {
        self.events.push(*event);
    }
}
