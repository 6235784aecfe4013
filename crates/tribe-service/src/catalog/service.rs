//! Event catalogue service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use tribe_core::config::events::EventsConfig;
use tribe_core::error::AppError;
use tribe_core::events::{CatalogEvent, DomainEvent};
use tribe_core::result::AppResult;
use tribe_core::traits::Service;
use tribe_core::types::id::{EventId, ReviewId, UserId};
use tribe_entity::event::{AttendeeStatus, CreateEvent, Event, EventReview};
use tribe_entity::member::Member;
use tribe_entity::rsvp::Rsvp;

use super::filter::{EventFilters, EventSort};
use crate::bus::EventBus;
use crate::store::EventStore;

/// Browsing, hosting, and reviewing events.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Event ledgers.
    store: Arc<EventStore>,
    /// Domain event fan-out.
    bus: Arc<EventBus>,
    /// Creation defaults and review bounds.
    config: EventsConfig,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(store: Arc<EventStore>, bus: Arc<EventBus>, config: EventsConfig) -> Self {
        Self { store, bus, config }
    }

    /// Events passing `filters`, ordered by `sort`.
    pub async fn list_events(&self, filters: &EventFilters, sort: EventSort) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .store
            .snapshots()
            .await
            .into_iter()
            .filter(|e| filters.matches(e))
            .collect();
        events.sort_by(|a, b| sort.compare(a, b).then_with(|| a.id.cmp(&b.id)));
        events
    }

    /// A snapshot of one event.
    pub async fn get_event(&self, event_id: EventId) -> AppResult<Event> {
        self.store
            .snapshot(event_id)
            .await
            .ok_or_else(|| AppError::not_found("Event not found"))
    }

    /// Creates an event hosted by `host`.
    pub async fn create_event(&self, req: CreateEvent, host: &Member) -> AppResult<Event> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Event title must not be empty"));
        }
        if req.max_attendees == Some(0) {
            return Err(AppError::validation("Event capacity must be at least 1"));
        }
        if req.currency.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(AppError::validation("Currency must not be empty"));
        }

        let event = Event::from_create(req, host, &self.config, Utc::now());
        self.store.insert(event.clone())?;

        info!(event_id = %event.id, host_id = %host.id, title = %event.title, "Event created");
        self.bus.publish(DomainEvent::catalog(
            host.id,
            CatalogEvent::Created {
                event_id: event.id,
                host_id: host.id,
                title: event.title.clone(),
            },
        ));

        Ok(event)
    }

    /// Records a review by a confirmed attendee.
    pub async fn add_review(
        &self,
        event_id: EventId,
        member: &Member,
        rating: u8,
        comment: impl Into<String>,
    ) -> AppResult<EventReview> {
        if !(self.config.min_rating..=self.config.max_rating).contains(&rating) {
            return Err(AppError::validation(format!(
                "Rating must be between {} and {}",
                self.config.min_rating, self.config.max_rating
            )));
        }

        let handle = self
            .store
            .handle(event_id)
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let (review, average_rating) = {
            let mut ledger = handle.lock().await;
            let event = ledger.event_mut();

            let attended = event
                .find_attendee(member.id)
                .is_some_and(|a| a.status == AttendeeStatus::Confirmed);
            if !attended {
                return Err(AppError::authorization("You must attend an event to review it"));
            }
            if event.reviews.iter().any(|r| r.user_id == member.id) {
                return Err(AppError::conflict("You have already reviewed this event"));
            }

            let now = Utc::now();
            let review = EventReview {
                id: ReviewId::new(),
                user_id: member.id,
                reviewer_name: member.name.clone(),
                membership_tier: member.membership_tier,
                rating,
                comment: comment.into(),
                created_at: now,
                helpful: 0,
            };
            event.add_review(review.clone(), now);
            (review, event.average_rating)
        };

        info!(event_id = %event_id, user_id = %member.id, rating, average_rating, "Review added");
        self.bus.publish(DomainEvent::catalog(
            member.id,
            CatalogEvent::Reviewed {
                event_id,
                user_id: member.id,
                rating,
                average_rating,
            },
        ));

        Ok(review)
    }

    /// Every RSVP record of a member, cancelled history included, oldest
    /// first.
    pub async fn member_rsvps(&self, user_id: UserId) -> Vec<Rsvp> {
        let mut rsvps = Vec::new();
        for handle in self.store.handles() {
            let ledger = handle.lock().await;
            rsvps.extend(
                ledger
                    .rsvps()
                    .iter()
                    .filter(|r| r.user_id == user_id)
                    .cloned(),
            );
        }
        rsvps.sort_by_key(|r| r.created_at);
        rsvps
    }

    /// Events hosted by a member, by date.
    pub async fn hosted_events(&self, user_id: UserId) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .store
            .snapshots()
            .await
            .into_iter()
            .filter(|e| e.host_id == user_id)
            .collect();
        events.sort_by_key(|e| e.date);
        events
    }

    /// Flags a waitlisted member as contacted by the host.
    pub async fn mark_waitlist_notified(&self, event_id: EventId, user_id: UserId) -> AppResult<()> {
        let handle = self
            .store
            .handle(event_id)
            .ok_or_else(|| AppError::not_found("Event not found"))?;
        let mut ledger = handle.lock().await;
        if !ledger.event_mut().mark_notified(user_id) {
            return Err(AppError::not_found("Member is not on the waitlist"));
        }
        info!(event_id = %event_id, user_id = %user_id, "Waitlist entry marked notified");
        Ok(())
    }
}

impl Service for EventService {
    fn name(&self) -> &'static str {
        "events"
    }
}
