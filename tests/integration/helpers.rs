//! Shared test helpers for integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;

use tribe_core::config::AppConfig;
use tribe_core::types::id::{EventId, UserId};
use tribe_entity::event::{CreateEvent, Event};
use tribe_entity::member::{Member, MembershipTier};
use tribe_service::{EventBus, EventService, EventStore, RsvpService, seed};

/// Seeded event ids.
pub const BOOK_CLUB: &str = "00000000-0000-4000-8000-000000001001";
pub const THAMES_WALK: &str = "00000000-0000-4000-8000-000000001002";
pub const POTTERY: &str = "00000000-0000-4000-8000-000000001003";

/// Seeded member ids.
pub const EMMA: &str = "00000000-0000-4000-8000-000000000001";
pub const LISA: &str = "00000000-0000-4000-8000-000000000002";
pub const JENNY: &str = "00000000-0000-4000-8000-000000000003";
pub const HANNAH: &str = "00000000-0000-4000-8000-000000000010";
pub const SOPHIE: &str = "00000000-0000-4000-8000-000000000011";
pub const SARAH_HOST: &str = "00000000-0000-4000-8000-000000002001";

/// Test application context
pub struct TestApp {
    /// Shared event store
    pub store: Arc<EventStore>,
    /// Domain event bus
    pub bus: Arc<EventBus>,
    /// Catalogue service
    pub events: EventService,
    /// RSVP service
    pub rsvp: RsvpService,
}

impl TestApp {
    /// An application with an empty store and default configuration
    pub fn empty() -> Self {
        let config = AppConfig::default();
        let store = Arc::new(EventStore::new());
        let bus = Arc::new(EventBus::from_config(&config.bus));
        Self {
            events: EventService::new(Arc::clone(&store), Arc::clone(&bus), config.events),
            rsvp: RsvpService::new(Arc::clone(&store), Arc::clone(&bus)),
            store,
            bus,
        }
    }

    /// An application seeded from the bundled fixture
    pub fn seeded() -> Self {
        let app = Self::empty();
        seed::seed_from_file(&app.store, seed_path()).expect("Failed to seed store");
        app
    }

    /// Create an event hosted by a fresh premium member
    pub async fn create_event(&self, title: &str, capacity: u32, allow_waitlist: bool) -> Event {
        let host = member("Host", MembershipTier::Premium);
        self.events
            .create_event(
                CreateEvent {
                    title: title.to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date"),
                    max_attendees: Some(capacity),
                    allow_waitlist: Some(allow_waitlist),
                    ..Default::default()
                },
                &host,
            )
            .await
            .expect("Failed to create event")
    }

    /// Whether the event's lists, counters, positions and RSVPs agree
    pub async fn is_consistent(&self, event_id: EventId) -> bool {
        let handle = self.store.handle(event_id).expect("event exists");
        let ledger = handle.lock().await;
        ledger.is_consistent()
    }
}

/// Path to the bundled seed fixture
pub fn seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/seed/events.json")
}

/// A fresh member
pub fn member(name: &str, tier: MembershipTier) -> Member {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    Member::new(UserId::new(), name, email, tier)
}

/// A seeded member with a known id
pub fn seeded_member(id: &str, name: &str, tier: MembershipTier) -> Member {
    Member::new(user_id(id), name, "seeded@example.com", tier)
}

/// Parse a fixed event id
pub fn event_id(id: &str) -> EventId {
    id.parse().expect("valid event id")
}

/// Parse a fixed member id
pub fn user_id(id: &str) -> UserId {
    id.parse().expect("valid user id")
}
