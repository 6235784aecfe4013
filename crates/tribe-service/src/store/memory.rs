//! Event store backed by a concurrent map of per-event mutexes.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::Mutex;
use tracing::debug;

use tribe_core::error::AppError;
use tribe_core::types::id::EventId;
use tribe_entity::event::Event;

use super::ledger::EventLedger;

/// Owner of every event ledger.
///
/// Each event sits behind its own Tokio mutex, so mutations of one event
/// are serialised while different events proceed in parallel. The host
/// constructs the store at startup and shares it through `Arc`.
#[derive(Debug, Default)]
pub struct EventStore {
    events: DashMap<EventId, Arc<Mutex<EventLedger>>>,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event. Fails if the id is already taken or the event lists a
    /// member twice.
    pub fn insert(&self, event: Event) -> Result<(), AppError> {
        let id = event.id;
        let ledger = EventLedger::from_event(event)?;

        match self.events.entry(id) {
            Entry::Occupied(_) => Err(AppError::conflict(format!("Event {id} already exists"))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(ledger)));
                debug!(event_id = %id, "Event added to store");
                Ok(())
            }
        }
    }

    /// Returns the lock guarding one event.
    ///
    /// The map guard is released before returning, so callers may hold the
    /// handle across `.await`.
    pub fn handle(&self, id: EventId) -> Option<Arc<Mutex<EventLedger>>> {
        self.events.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Handles for every event, in no particular order.
    pub fn handles(&self) -> Vec<Arc<Mutex<EventLedger>>> {
        self.events
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Copy of one event as it is right now.
    pub async fn snapshot(&self, id: EventId) -> Option<Event> {
        let handle = self.handle(id)?;
        let ledger = handle.lock().await;
        Some(ledger.event().clone())
    }

    /// Copies of every event.
    pub async fn snapshots(&self) -> Vec<Event> {
        let mut events = Vec::with_capacity(self.events.len());
        for handle in self.handles() {
            events.push(handle.lock().await.event().clone());
        }
        events
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
