//! Listing filters and sort orders.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tribe_core::types::SortDirection;
use tribe_entity::event::Event;
use tribe_entity::member::MembershipTier;

/// Spot availability filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// At least one confirmed spot is free.
    Available,
    /// Full, but a waitlist is open.
    Waitlist,
    /// No restriction.
    #[default]
    All,
}

/// Conjunction of listing filters. Unset fields do not restrict.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFilters {
    /// Exact category match.
    #[serde(default)]
    pub category: Option<String>,
    /// Only events this tier may attend.
    #[serde(default)]
    pub membership_level: Option<MembershipTier>,
    /// Case-insensitive match on title, description, or any tag.
    #[serde(default)]
    pub search: Option<String>,
    /// Earliest event date, inclusive.
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Latest event date, inclusive.
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    /// Availability restriction.
    #[serde(default)]
    pub availability: Availability,
    /// Only featured (or only non-featured) events.
    #[serde(default)]
    pub featured: Option<bool>,
}

impl EventFilters {
    /// Whether `event` passes every set filter.
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(category) = &self.category {
            if &event.category != category {
                return false;
            }
        }

        if let Some(tier) = self.membership_level {
            if !tier.has_at_least(event.membership_required) {
                return false;
            }
        }

        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            let hit = event.title.to_lowercase().contains(&query)
                || event.description.to_lowercase().contains(&query)
                || event.tags.iter().any(|t| t.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        if self.date_from.is_some_and(|from| event.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| event.date > to) {
            return false;
        }

        let available = match self.availability {
            Availability::Available => event.has_open_spot(),
            Availability::Waitlist => event.is_waitlisting(),
            Availability::All => true,
        };
        if !available {
            return false;
        }

        self.featured.is_none_or(|featured| event.featured == featured)
    }
}

/// Sortable listing fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSortField {
    /// Event date, earliest first.
    #[default]
    Date,
    /// Attendees plus favourites, most popular first.
    Popularity,
    /// Average rating, best first.
    Rating,
    /// Price, cheapest first.
    Price,
    /// Creation time, newest first.
    Created,
    /// Title, case-insensitive A to Z.
    Alphabetical,
}

/// A sort field plus direction. `Desc` reverses the field's natural order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSort {
    /// Field to sort on.
    pub field: EventSortField,
    /// Direction applied to the field's natural order.
    #[serde(default)]
    pub direction: SortDirection,
}

impl EventSort {
    /// Creates a sort specification.
    pub fn new(field: EventSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Compares two events under this sort.
    pub fn compare(&self, a: &Event, b: &Event) -> Ordering {
        let natural = match self.field {
            EventSortField::Date => a.date.cmp(&b.date),
            EventSortField::Popularity => popularity(b).cmp(&popularity(a)),
            EventSortField::Rating => b.average_rating.total_cmp(&a.average_rating),
            EventSortField::Price => a.price_minor.cmp(&b.price_minor),
            EventSortField::Created => b.created_at.cmp(&a.created_at),
            EventSortField::Alphabetical => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        };
        self.direction.apply(natural)
    }
}

fn popularity(event: &Event) -> u64 {
    u64::from(event.current_attendees()) + u64::from(event.favorites)
}

impl std::str::FromStr for EventSortField {
    type Err = tribe_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "popularity" => Ok(Self::Popularity),
            "rating" => Ok(Self::Rating),
            "price" => Ok(Self::Price),
            "created" => Ok(Self::Created),
            "alphabetical" => Ok(Self::Alphabetical),
            _ => Err(tribe_core::AppError::validation(format!(
                "Invalid sort field: '{s}'. Expected one of: date, popularity, rating, price, created, alphabetical"
            ))),
        }
    }
}

impl std::str::FromStr for Availability {
    type Err = tribe_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "waitlist" => Ok(Self::Waitlist),
            "all" => Ok(Self::All),
            _ => Err(tribe_core::AppError::validation(format!(
                "Invalid availability: '{s}'. Expected one of: available, waitlist, all"
            ))),
        }
    }
}
