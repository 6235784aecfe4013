//! Seed loader: populates an [`EventStore`] from a JSON fixture.

use std::path::Path;

use tracing::info;

use tribe_core::error::{AppError, ErrorKind};
use tribe_core::result::AppResult;
use tribe_entity::event::Event;

use crate::store::EventStore;

/// Reads a JSON array of events from `path`.
pub fn load_events(path: impl AsRef<Path>) -> AppResult<Vec<Event>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read seed file {}: {e}", path.display()),
            e,
        )
    })?;
    parse_events(&raw)
}

/// Parses a JSON array of events.
pub fn parse_events(raw: &str) -> AppResult<Vec<Event>> {
    Ok(serde_json::from_str(raw)?)
}

/// Inserts `events` into the store, stopping at the first rejected event.
/// Returns the number of events added.
pub fn seed_store(store: &EventStore, events: Vec<Event>) -> AppResult<usize> {
    let mut count = 0;
    for event in events {
        store.insert(event)?;
        count += 1;
    }
    Ok(count)
}

/// Loads the fixture at `path` into the store.
pub fn seed_from_file(store: &EventStore, path: impl AsRef<Path>) -> AppResult<usize> {
    let path = path.as_ref();
    let count = seed_store(store, load_events(path)?)?;
    info!(path = %path.display(), events = count, "Seeded event store");
    Ok(count)
}
