//! RSVP commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tribe_core::error::AppError;
use tribe_core::types::id::{EventId, UserId};
use tribe_entity::rsvp::RsvpStatus;
use tribe_service::CancelReceipt;

use super::{Context, MemberArgs};
use crate::output::{self, OutputFormat};

/// Arguments for `register`
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Event id
    pub event_id: EventId,
    /// Acting member
    #[command(flatten)]
    pub member: MemberArgs,
}

/// Arguments for `cancel`
#[derive(Debug, Args)]
pub struct CancelArgs {
    /// Event id
    pub event_id: EventId,
    /// Acting member
    #[command(flatten)]
    pub member: MemberArgs,
}

/// Arguments for `rsvps`
#[derive(Debug, Args)]
pub struct RsvpsArgs {
    /// Member id
    #[arg(short = 'm', long)]
    pub member_id: UserId,
}

/// Arguments for `notify`
#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Event id
    pub event_id: EventId,
    /// Waitlisted member id
    #[arg(short = 'm', long)]
    pub member_id: UserId,
}

/// RSVP display row for table output
#[derive(Debug, Serialize, Tabled)]
struct RsvpRow {
    /// RSVP ID
    id: String,
    /// Event ID
    event_id: String,
    /// Event title
    event: String,
    /// Status
    status: String,
    /// Created at
    created_at: String,
}

/// Execute `register`
pub async fn register(
    args: &RegisterArgs,
    ctx: &Context,
    format: OutputFormat,
) -> Result<(), AppError> {
    let member = ctx.resolve_member(&args.member).await;
    let receipt = ctx.rsvp.register(args.event_id, &member).await?;

    match format {
        OutputFormat::Json => output::print_json(&receipt),
        OutputFormat::Table => match receipt.status {
            RsvpStatus::Waitlist => {
                output::print_warning(&receipt.message);
                if let Some(position) = receipt.position {
                    output::print_kv("Position", &position.to_string());
                }
            }
            _ => output::print_success(&receipt.message),
        },
    }
    if format == OutputFormat::Table {
        output::print_kv("Member", &member.id.to_string());
    }
    Ok(())
}

/// Execute `cancel`
pub async fn cancel(args: &CancelArgs, ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let member = ctx.resolve_member(&args.member).await;
    let receipt = CancelReceipt::from_result(ctx.rsvp.cancel(args.event_id, &member).await);

    match format {
        OutputFormat::Json => output::print_json(&receipt),
        OutputFormat::Table if receipt.success => {
            output::print_success(&receipt.message);
            if let Some(promoted) = receipt.promoted {
                output::print_kv("Promoted", &promoted.to_string());
            }
        }
        OutputFormat::Table => {}
    }

    if receipt.success {
        Ok(())
    } else {
        Err(AppError::not_found(receipt.message))
    }
}

/// Execute `rsvps`
pub async fn rsvps(args: &RsvpsArgs, ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let rsvps = ctx.events.member_rsvps(args.member_id).await;

    if format == OutputFormat::Json {
        output::print_json(&rsvps);
        return Ok(());
    }

    let mut rows = Vec::with_capacity(rsvps.len());
    for r in &rsvps {
        let title = ctx
            .events
            .get_event(r.event_id)
            .await
            .map(|e| e.title)
            .unwrap_or_default();
        rows.push(RsvpRow {
            id: r.id.to_string(),
            event_id: r.event_id.to_string(),
            event: title,
            status: r.status.to_string(),
            created_at: r.created_at.format("%Y-%m-%d %H:%M").to_string(),
        });
    }
    output::print_list(&rows, format);
    Ok(())
}

/// Execute `notify`
pub async fn notify(args: &NotifyArgs, ctx: &Context) -> Result<(), AppError> {
    ctx.events
        .mark_waitlist_notified(args.event_id, args.member_id)
        .await?;
    output::print_success(&format!("Member {} marked as notified", args.member_id));
    Ok(())
}
