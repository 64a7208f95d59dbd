use anyhow::Result;
use tracing::info;

use super::message_or;
use super::run_batch::{run_batch, Dispatch};
use crate::domains::engagement::models::{
    ActionKind, AttendeeTarget, BatchActionReport, BatchRejection, OutcomeStatus, Pacing,
};
use crate::kernel::BaseSocialClient;

pub const DEFAULT_QUOTE: &str = "Check this out! 👀";

/// Quote text: the message, a blank line, then a `Via @<handle>` credit.
pub fn compose_quote(username: &str, message: Option<&str>) -> String {
    format!(
        "{}\n\n🔁 Via @{}",
        message_or(message, DEFAULT_QUOTE),
        username.replace('@', "")
    )
}

/// Post a standalone status crediting each target's author.
///
/// The original post is not embedded; the status only names its author.
/// Requires the v1.1 capability, independently of general operability.
pub async fn post_quote_tweets(
    client: &dyn BaseSocialClient,
    targets: &[AttendeeTarget],
    message: Option<&str>,
    pacing: &Pacing,
) -> Result<BatchActionReport, BatchRejection> {
    info!(count = targets.len(), "Posting quote tweets");

    if !client.has_legacy_auth() {
        return Err(BatchRejection::LegacyAuthMissing);
    }

    let kind = ActionKind::Quote;
    Ok(run_batch(kind, targets, pacing.delay_for(kind), |d| {
        quote_one(client, message, d)
    })
    .await)
}

async fn quote_one(
    client: &dyn BaseSocialClient,
    message: Option<&str>,
    d: Dispatch,
) -> Result<OutcomeStatus> {
    let text = compose_quote(&d.handle, message);
    let quote_id = client.legacy_post(&text).await?;

    Ok(OutcomeStatus::quoted(&d.tweet_id, &d.username, quote_id, text))
}
