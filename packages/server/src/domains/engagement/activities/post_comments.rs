use anyhow::Result;
use tracing::info;

use super::message_or;
use super::run_batch::{run_batch, Dispatch};
use crate::domains::engagement::models::{
    ActionKind, AttendeeTarget, BatchActionReport, BatchRejection, OutcomeStatus, Pacing,
};
use crate::kernel::BaseSocialClient;

pub const DEFAULT_COMMENT: &str = "Great post! 👍";

/// Reply text: `@<handle> <message>`.
pub fn compose_comment(username: &str, message: Option<&str>) -> String {
    format!(
        "@{} {}",
        username.replace('@', ""),
        message_or(message, DEFAULT_COMMENT)
    )
}

/// Reply to every target's post with a mention of its author.
pub async fn post_comments(
    client: &dyn BaseSocialClient,
    targets: &[AttendeeTarget],
    message: Option<&str>,
    pacing: &Pacing,
) -> Result<BatchActionReport, BatchRejection> {
    info!(count = targets.len(), "Posting comments");

    if !client.is_operational() {
        return Err(BatchRejection::NotOperational);
    }

    let kind = ActionKind::Comment;
    Ok(run_batch(kind, targets, pacing.delay_for(kind), |d| {
        comment_one(client, message, d)
    })
    .await)
}

async fn comment_one(
    client: &dyn BaseSocialClient,
    message: Option<&str>,
    d: Dispatch,
) -> Result<OutcomeStatus> {
    let text = compose_comment(&d.handle, message);
    let result = client.post(&text, Some(&d.tweet_id)).await?;

    Ok(if result.success {
        OutcomeStatus::commented(
            &d.tweet_id,
            &d.username,
            result.tweet_id.unwrap_or_default(),
            text,
        )
    } else {
        OutcomeStatus::failed(result.error.unwrap_or_else(|| "Unknown error".to_string()))
    })
}
