//! In-process domain event bus.

use tokio::sync::broadcast;
use tracing::trace;

use tribe_core::config::bus::BusConfig;
use tribe_core::events::DomainEvent;

/// Fan-out of [`DomainEvent`]s to every live subscriber.
///
/// Publishing never blocks and never fails: with no subscribers the event
/// is dropped, and a slow subscriber observes `RecvError::Lagged`.
#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Creates a bus buffering `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Creates a bus from configuration.
    pub fn from_config(config: &BusConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Publishes an event. Returns how many subscribers received it.
    pub fn publish(&self, event: DomainEvent) -> usize {
        let delivered = self.tx.send(event).unwrap_or(0);
        trace!(delivered, "Domain event published");
        delivered
    }

    /// Subscribes to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::from_config(&BusConfig::default())
    }
}
