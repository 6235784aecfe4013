//! CLI command definitions and dispatch.

pub mod events;
pub mod review;
pub mod rsvp;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tokio::sync::broadcast;

use tribe_core::config::AppConfig;
use tribe_core::error::AppError;
use tribe_core::events::DomainEvent;
use tribe_core::traits::Service;
use tribe_core::types::id::UserId;
use tribe_entity::member::{Member, MembershipTier};
use tribe_service::{EventBus, EventService, EventStore, RsvpService, seed};

use crate::output::OutputFormat;

/// AdyaTribe events: browse events, RSVP, and review
#[derive(Debug, Parser)]
#[command(name = "tribe-events", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file. Without it, `config/default.toml`
    /// and `config/{TRIBE_ENV}.toml` are merged when present.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed file overriding `seed.path` from the configuration
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List events matching filters
    List(events::ListArgs),
    /// Show one event with its attendees and waitlist
    Show(events::ShowArgs),
    /// List events hosted by a member
    Hosted(events::HostedArgs),
    /// Register a member for an event
    Register(rsvp::RegisterArgs),
    /// Cancel a member's RSVP
    Cancel(rsvp::CancelArgs),
    /// List a member's RSVPs
    Rsvps(rsvp::RsvpsArgs),
    /// Mark a waitlisted member as contacted
    Notify(rsvp::NotifyArgs),
    /// Review an attended event
    Review(review::ReviewArgs),
}

impl Cli {
    /// Load configuration from `--config` or the default locations.
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        match &self.config {
            Some(path) => AppConfig::load_from(path),
            None => {
                let env = std::env::var("TRIBE_ENV").unwrap_or_else(|_| "development".to_string());
                AppConfig::load(&env)
            }
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self, ctx: &Context) -> Result<(), AppError> {
        let result = match &self.command {
            Commands::List(args) => events::list(args, ctx, self.format).await,
            Commands::Show(args) => events::show(args, ctx, self.format).await,
            Commands::Hosted(args) => events::hosted(args, ctx, self.format).await,
            Commands::Register(args) => rsvp::register(args, ctx, self.format).await,
            Commands::Cancel(args) => rsvp::cancel(args, ctx, self.format).await,
            Commands::Rsvps(args) => rsvp::rsvps(args, ctx, self.format).await,
            Commands::Notify(args) => rsvp::notify(args, ctx).await,
            Commands::Review(args) => review::execute(args, ctx, self.format).await,
        };
        ctx.drain_events();
        result
    }
}

/// Services wired over one freshly seeded in-memory store.
pub struct Context {
    /// Shared event store.
    pub store: Arc<EventStore>,
    /// Catalogue operations.
    pub events: EventService,
    /// RSVP operations.
    pub rsvp: RsvpService,
    /// Receiver for domain events published while the command runs.
    receiver: std::sync::Mutex<broadcast::Receiver<DomainEvent>>,
}

impl Context {
    /// Build the store and services and load seed data.
    pub fn build(config: &AppConfig, seed_override: Option<&str>) -> Result<Self, AppError> {
        let store = Arc::new(EventStore::new());
        let bus = Arc::new(EventBus::from_config(&config.bus));
        let receiver = bus.subscribe();

        if let Some(path) = seed_override.or(config.seed.path.as_deref()) {
            seed::seed_from_file(&store, path)?;
        }

        let events = EventService::new(Arc::clone(&store), Arc::clone(&bus), config.events.clone());
        let rsvp = RsvpService::new(Arc::clone(&store), bus);
        for service in [&events as &dyn Service, &rsvp] {
            tracing::debug!(service = service.name(), events = store.len(), "Service ready");
        }

        Ok(Self {
            events,
            rsvp,
            store,
            receiver: std::sync::Mutex::new(receiver),
        })
    }

    /// Resolve the acting member.
    ///
    /// When the id matches someone listed on a seeded event, their stored
    /// name, email and tier are used unless overridden on the command line.
    pub async fn resolve_member(&self, args: &MemberArgs) -> Member {
        let id = args.member_id.unwrap_or_default();
        let mut member = Member::new(id, "Guest", "guest@adyatribe.local", MembershipTier::Free);

        for event in self.store.snapshots().await {
            if let Some(a) = event.find_attendee(id) {
                member = Member::new(id, a.name.clone(), a.email.clone(), a.membership_tier);
                break;
            }
            if let Some(w) = event.find_waitlist_entry(id) {
                member = Member::new(id, w.name.clone(), w.email.clone(), w.membership_tier);
                break;
            }
        }

        if let Some(name) = &args.name {
            member.name = name.clone();
        }
        if let Some(email) = &args.email {
            member.email = email.clone();
        }
        if let Some(tier) = args.tier {
            member.membership_tier = tier;
        }
        member
    }

    /// Log every domain event published by the command.
    fn drain_events(&self) {
        let Ok(mut rx) = self.receiver.lock() else {
            return;
        };
        while let Ok(event) = rx.try_recv() {
            match serde_json::to_string(&event.payload) {
                Ok(payload) => tracing::info!(event_id = %event.id, %payload, "Domain event"),
                Err(e) => tracing::warn!(error = %e, "Unserializable domain event"),
            }
        }
    }
}

/// Identity of the member acting on an event
#[derive(Debug, Clone, Args)]
pub struct MemberArgs {
    /// Member id (a fresh id is generated when omitted)
    #[arg(short = 'm', long)]
    pub member_id: Option<UserId>,
    /// Display name
    #[arg(long)]
    pub name: Option<String>,
    /// Contact email
    #[arg(long)]
    pub email: Option<String>,
    /// Membership tier: free, core, or premium
    #[arg(long)]
    pub tier: Option<MembershipTier>,
}
