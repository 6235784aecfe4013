//! Event aggregate model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use tribe_core::config::events::EventsConfig;
use tribe_core::types::id::{EventId, UserId};

use super::attendee::Attendee;
use super::review::EventReview;
use super::status::EventStatus;
use super::waitlist::WaitlistEntry;
use crate::member::{Member, MembershipTier};

/// A community event.
///
/// The event exclusively owns its attendee and waitlist collections. They
/// are only reachable through methods that keep `current_attendees` and
/// `waitlist_count` equal to the list lengths and waitlist positions equal
/// to `index + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Headline shown in listings.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Listing category, e.g. "Books & Reading".
    #[serde(default)]
    pub category: String,
    /// Free-form search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Hosting member.
    pub host_id: UserId,
    /// Host display name.
    #[serde(default)]
    pub host_name: String,
    /// Lowest tier allowed to RSVP.
    #[serde(default)]
    pub membership_required: MembershipTier,
    /// Ticket price in minor currency units (pence). `0` is free.
    #[serde(default)]
    pub price_minor: u64,
    /// ISO currency code.
    pub currency: String,
    /// Capacity.
    pub max_attendees: u32,
    /// Whether a waitlist opens once the event is full.
    #[serde(default = "default_true")]
    pub allow_waitlist: bool,
    /// Publication status.
    #[serde(default)]
    pub status: EventStatus,
    /// Promoted in listings.
    #[serde(default)]
    pub featured: bool,
    /// Number of members who favourited the event.
    #[serde(default)]
    pub favorites: u32,
    #[serde(default)]
    attendees: Vec<Attendee>,
    #[serde(default)]
    waitlist: Vec<WaitlistEntry>,
    #[serde(default)]
    current_attendees: u32,
    #[serde(default)]
    waitlist_count: u32,
    /// Reviews left by attendees.
    #[serde(default)]
    pub reviews: Vec<EventReview>,
    /// Mean rating over `reviews`, one decimal place.
    #[serde(default)]
    pub average_rating: f64,
    /// Total number of reviews ever counted for the event.
    #[serde(default)]
    pub total_reviews: u32,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Host-supplied fields for a new event. Unset fields fall back to the
/// configured [`EventsConfig`] defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Headline.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Listing category.
    #[serde(default)]
    pub category: String,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Calendar date.
    pub date: NaiveDate,
    /// Lowest tier allowed to RSVP (default free).
    #[serde(default)]
    pub membership_required: Option<MembershipTier>,
    /// Price in minor units (default 0).
    #[serde(default)]
    pub price_minor: Option<u64>,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Capacity.
    #[serde(default)]
    pub max_attendees: Option<u32>,
    /// Waitlist switch.
    #[serde(default)]
    pub allow_waitlist: Option<bool>,
    /// Initial status (default draft).
    #[serde(default)]
    pub status: Option<EventStatus>,
    /// Featured flag.
    #[serde(default)]
    pub featured: bool,
}

impl Event {
    /// Builds a new, empty event hosted by `host`.
    pub fn from_create(
        req: CreateEvent,
        host: &Member,
        defaults: &EventsConfig,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EventId::new(),
            title: req.title,
            description: req.description,
            category: req.category,
            tags: req.tags,
            date: req.date,
            host_id: host.id,
            host_name: host.name.clone(),
            membership_required: req.membership_required.unwrap_or_default(),
            price_minor: req.price_minor.unwrap_or(0),
            currency: req
                .currency
                .unwrap_or_else(|| defaults.default_currency.clone()),
            max_attendees: req.max_attendees.unwrap_or(defaults.default_max_attendees),
            allow_waitlist: req.allow_waitlist.unwrap_or(defaults.default_allow_waitlist),
            status: req.status.unwrap_or_default(),
            featured: req.featured,
            favorites: 0,
            attendees: Vec::new(),
            waitlist: Vec::new(),
            current_attendees: 0,
            waitlist_count: 0,
            reviews: Vec::new(),
            average_rating: 0.0,
            total_reviews: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Confirmed attendees in confirmation order.
    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    /// Waitlist in queue order.
    pub fn waitlist(&self) -> &[WaitlistEntry] {
        &self.waitlist
    }

    /// Number of confirmed attendees.
    pub fn current_attendees(&self) -> u32 {
        self.current_attendees
    }

    /// Number of queued members.
    pub fn waitlist_count(&self) -> u32 {
        self.waitlist_count
    }

    /// Whether a confirmed spot is free.
    pub fn has_open_spot(&self) -> bool {
        self.current_attendees < self.max_attendees
    }

    /// Remaining confirmed spots.
    pub fn spots_left(&self) -> u32 {
        self.max_attendees.saturating_sub(self.current_attendees)
    }

    /// Whether the event is full and still accepts waitlist joins.
    pub fn is_waitlisting(&self) -> bool {
        !self.has_open_spot() && self.allow_waitlist
    }

    /// Looks up a confirmed attendee.
    pub fn find_attendee(&self, user_id: UserId) -> Option<&Attendee> {
        self.attendees.iter().find(|a| a.user_id == user_id)
    }

    /// Looks up a waitlist entry.
    pub fn find_waitlist_entry(&self, user_id: UserId) -> Option<&WaitlistEntry> {
        self.waitlist.iter().find(|w| w.user_id == user_id)
    }

    /// Appends a confirmed attendee.
    pub fn admit(&mut self, attendee: Attendee, now: DateTime<Utc>) {
        self.attendees.push(attendee);
        self.current_attendees += 1;
        self.updated_at = now;
    }

    /// Appends `member` to the back of the waitlist and returns the entry.
    pub fn enqueue(&mut self, member: &Member, now: DateTime<Utc>) -> &WaitlistEntry {
        let position = self.waitlist.len() as u32 + 1;
        self.waitlist.push(WaitlistEntry::join(member, position, now));
        self.waitlist_count += 1;
        self.updated_at = now;
        &self.waitlist[self.waitlist.len() - 1]
    }

    /// Removes a confirmed attendee.
    pub fn remove_attendee(&mut self, user_id: UserId, now: DateTime<Utc>) -> Option<Attendee> {
        let index = self.attendees.iter().position(|a| a.user_id == user_id)?;
        let attendee = self.attendees.remove(index);
        self.current_attendees -= 1;
        self.updated_at = now;
        Some(attendee)
    }

    /// Removes a member from the waitlist and closes the gap.
    pub fn remove_from_waitlist(
        &mut self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> Option<WaitlistEntry> {
        let index = self.waitlist.iter().position(|w| w.user_id == user_id)?;
        let entry = self.waitlist.remove(index);
        self.waitlist_count -= 1;
        self.renumber_waitlist();
        self.updated_at = now;
        Some(entry)
    }

    /// Takes the entry at position 1, if any.
    pub fn pop_waitlist_head(&mut self, now: DateTime<Utc>) -> Option<WaitlistEntry> {
        if self.waitlist.is_empty() {
            return None;
        }
        let entry = self.waitlist.remove(0);
        self.waitlist_count -= 1;
        self.renumber_waitlist();
        self.updated_at = now;
        Some(entry)
    }

    /// Flags a waitlisted member as contacted. Returns `false` when the
    /// member is not queued.
    pub fn mark_notified(&mut self, user_id: UserId) -> bool {
        match self.waitlist.iter_mut().find(|w| w.user_id == user_id) {
            Some(entry) => {
                entry.notified = true;
                true
            }
            None => false,
        }
    }

    /// Records a review and refreshes the rating summary.
    pub fn add_review(&mut self, review: EventReview, now: DateTime<Utc>) {
        self.reviews.push(review);
        self.total_reviews += 1;
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        let mean = f64::from(sum) / self.reviews.len() as f64;
        self.average_rating = (mean * 10.0).round() / 10.0;
        self.updated_at = now;
    }

    /// Re-derives counters and positions from the lists. Used after
    /// deserializing externally supplied data.
    pub fn normalize(&mut self) {
        self.current_attendees = self.attendees.len() as u32;
        self.waitlist_count = self.waitlist.len() as u32;
        self.renumber_waitlist();
    }

    /// Whether counters match list lengths and positions run 1..=N.
    pub fn is_consistent(&self) -> bool {
        self.current_attendees as usize == self.attendees.len()
            && self.waitlist_count as usize == self.waitlist.len()
            && self
                .waitlist
                .iter()
                .enumerate()
                .all(|(i, w)| w.position as usize == i + 1)
    }

    fn renumber_waitlist(&mut self) {
        for (index, entry) in self.waitlist.iter_mut().enumerate() {
            entry.position = index as u32 + 1;
        }
    }
}

fn default_true() -> bool {
    true
}
