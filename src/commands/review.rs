//! Review command.

use clap::Args;

use tribe_core::error::AppError;
use tribe_core::types::id::EventId;

use super::{Context, MemberArgs};
use crate::output::{self, OutputFormat};

/// Arguments for `review`
#[derive(Debug, Args)]
pub struct ReviewArgs {
    /// Event id
    pub event_id: EventId,
    /// Star rating
    #[arg(short, long)]
    pub rating: u8,
    /// Review text
    #[arg(long, default_value = "")]
    pub comment: String,
    /// Reviewing member
    #[command(flatten)]
    pub member: MemberArgs,
}

/// Execute `review`
pub async fn execute(args: &ReviewArgs, ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let member = ctx.resolve_member(&args.member).await;
    let review = ctx
        .events
        .add_review(args.event_id, &member, args.rating, args.comment.clone())
        .await?;

    match format {
        OutputFormat::Json => output::print_json(&review),
        OutputFormat::Table => {
            output::print_success("Review added successfully");
            let event = ctx.events.get_event(args.event_id).await?;
            output::print_kv(
                "Average rating",
                &format!("{:.1} from {} reviews", event.average_rating, event.total_reviews),
            );
        }
    }
    Ok(())
}
