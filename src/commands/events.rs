//! Event catalogue commands.

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tribe_core::error::AppError;
use tribe_core::types::SortDirection;
use tribe_core::types::id::{EventId, UserId};
use tribe_entity::event::{Event, EventStatus};
use tribe_entity::member::MembershipTier;
use tribe_service::{Availability, EventFilters, EventSort, EventSortField};

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Exact category, e.g. "Books & Reading"
    #[arg(long)]
    pub category: Option<String>,
    /// Only events open to this tier
    #[arg(long)]
    pub tier: Option<MembershipTier>,
    /// Search title, description, and tags
    #[arg(short = 'q', long)]
    pub search: Option<String>,
    /// Earliest date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Latest date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// available, waitlist, or all
    #[arg(long, default_value = "all")]
    pub availability: Availability,
    /// Only featured events
    #[arg(long)]
    pub featured: bool,
    /// date, popularity, rating, price, created, or alphabetical
    #[arg(long, default_value = "date")]
    pub sort: EventSortField,
    /// asc or desc
    #[arg(long, default_value = "asc")]
    pub direction: SortDirection,
}

/// Arguments for `show`
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Event id
    pub event_id: EventId,
}

/// Arguments for `hosted`
#[derive(Debug, Args)]
pub struct HostedArgs {
    /// Host member id
    #[arg(short = 'm', long)]
    pub member_id: UserId,
}

/// Event display row for table output
#[derive(Debug, Serialize, Tabled)]
struct EventRow {
    /// Event ID
    id: String,
    /// Date
    date: String,
    /// Title
    title: String,
    /// Category
    category: String,
    /// Required tier
    tier: String,
    /// Price
    price: String,
    /// Attendance
    spots: String,
    /// Waitlist length
    waitlist: u32,
    /// Rating
    rating: String,
}

impl From<&Event> for EventRow {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id.to_string(),
            date: e.date.format("%Y-%m-%d").to_string(),
            title: e.title.clone(),
            category: e.category.clone(),
            tier: e.membership_required.to_string(),
            price: output::format_price(e.price_minor, &e.currency),
            spots: format!("{}/{}", e.current_attendees(), e.max_attendees),
            waitlist: e.waitlist_count(),
            rating: if e.total_reviews == 0 {
                "-".to_string()
            } else {
                format!("{:.1} ({})", e.average_rating, e.total_reviews)
            },
        }
    }
}

/// Attendee or waitlist display row
#[derive(Debug, Serialize, Tabled)]
struct PersonRow {
    /// Queue position, or blank for confirmed attendees
    #[tabled(rename = "#")]
    position: String,
    /// Member ID
    user_id: String,
    /// Name
    name: String,
    /// Tier
    tier: String,
    /// Joined at
    joined_at: String,
}

/// Execute `list`
pub async fn list(args: &ListArgs, ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let filters = EventFilters {
        category: args.category.clone(),
        membership_level: args.tier,
        search: args.search.clone(),
        date_from: args.from,
        date_to: args.to,
        availability: args.availability,
        featured: args.featured.then_some(true),
    };
    let sort = EventSort::new(args.sort, args.direction);

    let events = ctx.events.list_events(&filters, sort).await;
    print_events(&events, format);
    Ok(())
}

/// Execute `hosted`
pub async fn hosted(args: &HostedArgs, ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let events = ctx.events.hosted_events(args.member_id).await;
    print_events(&events, format);
    Ok(())
}

/// Execute `show`
pub async fn show(args: &ShowArgs, ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let event = ctx.events.get_event(args.event_id).await?;

    if format == OutputFormat::Json {
        output::print_json(&event);
        return Ok(());
    }

    println!("{}", event.title);
    output::print_kv("ID", &event.id.to_string());
    output::print_kv("Date", &event.date.format("%A %-d %B %Y").to_string());
    output::print_kv("Category", &event.category);
    output::print_kv("Host", &event.host_name);
    output::print_kv("Membership", event.membership_required.as_str());
    output::print_kv("Price", &output::format_price(event.price_minor, &event.currency));
    output::print_kv("Status", event.status.as_str());
    output::print_kv(
        "Spots",
        &format!(
            "{}/{} ({} left)",
            event.current_attendees(),
            event.max_attendees,
            event.spots_left()
        ),
    );
    output::print_kv("Waitlist", if event.allow_waitlist { "open" } else { "closed" });
    if event.total_reviews > 0 {
        output::print_kv(
            "Rating",
            &format!("{:.1} from {} reviews", event.average_rating, event.total_reviews),
        );
    }
    if event.status != EventStatus::Published {
        output::print_warning(&format!("Event is {}", event.status));
    }

    let attendees: Vec<PersonRow> = event
        .attendees()
        .iter()
        .map(|a| PersonRow {
            position: String::new(),
            user_id: a.user_id.to_string(),
            name: a.name.clone(),
            tier: a.membership_tier.to_string(),
            joined_at: a.joined_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();
    println!("\nAttendees");
    output::print_list(&attendees, format);

    if !event.waitlist().is_empty() {
        let waitlist: Vec<PersonRow> = event
            .waitlist()
            .iter()
            .map(|w| PersonRow {
                position: w.position.to_string(),
                user_id: w.user_id.to_string(),
                name: w.name.clone(),
                tier: w.membership_tier.to_string(),
                joined_at: w.joined_at.format("%Y-%m-%d %H:%M").to_string(),
            })
            .collect();
        println!("\nWaitlist");
        output::print_list(&waitlist, format);
    }

    Ok(())
}

fn print_events(events: &[Event], format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_json(events),
        OutputFormat::Table => {
            let rows: Vec<EventRow> = events.iter().map(EventRow::from).collect();
            output::print_list(&rows, format);
        }
    }
}
