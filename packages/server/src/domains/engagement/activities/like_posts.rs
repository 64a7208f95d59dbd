use anyhow::Result;
use tracing::info;

use super::run_batch::{run_batch, Dispatch};
use crate::domains::engagement::models::{
    ActionKind, AttendeeTarget, BatchActionReport, BatchRejection, OutcomeStatus, Pacing,
};
use crate::kernel::BaseSocialClient;

/// Like every target's post.
pub async fn like_posts(
    client: &dyn BaseSocialClient,
    targets: &[AttendeeTarget],
    pacing: &Pacing,
) -> Result<BatchActionReport, BatchRejection> {
    info!(count = targets.len(), "Liking posts");

    if !client.is_operational() {
        return Err(BatchRejection::NotOperational);
    }

    let kind = ActionKind::Like;
    Ok(run_batch(kind, targets, pacing.delay_for(kind), |d| like_one(client, d)).await)
}

async fn like_one(client: &dyn BaseSocialClient, d: Dispatch) -> Result<OutcomeStatus> {
    Ok(if client.like(&d.tweet_id).await? {
        OutcomeStatus::liked(&d.tweet_id, &d.username)
    } else {
        OutcomeStatus::failed("Like failed")
    })
}
