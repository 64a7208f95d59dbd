use anyhow::Result;
use tracing::info;

use super::run_batch::{run_batch, Dispatch};
use crate::domains::engagement::models::{
    ActionKind, AttendeeTarget, BatchActionReport, BatchRejection, OutcomeStatus, Pacing,
};
use crate::kernel::BaseSocialClient;

/// Retweet every target's post.
pub async fn retweet_posts(
    client: &dyn BaseSocialClient,
    targets: &[AttendeeTarget],
    pacing: &Pacing,
) -> Result<BatchActionReport, BatchRejection> {
    info!(count = targets.len(), "Retweeting posts");

    if !client.is_operational() {
        return Err(BatchRejection::NotOperational);
    }

    let kind = ActionKind::Retweet;
    Ok(run_batch(kind, targets, pacing.delay_for(kind), |d| retweet_one(client, d)).await)
}

async fn retweet_one(client: &dyn BaseSocialClient, d: Dispatch) -> Result<OutcomeStatus> {
    Ok(if client.retweet(&d.tweet_id).await? {
        OutcomeStatus::retweeted(&d.tweet_id, &d.username)
    } else {
        OutcomeStatus::failed("Retweet failed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{MockSocialClient, SocialCall};

    #[tokio::test]
    async fn test_not_operational_short_circuits() {
        let client = MockSocialClient::new().not_operational();
        let targets = vec![AttendeeTarget::new("@a", "https://twitter.com/a/status/1")];

        let result = retweet_posts(&client, &targets, &Pacing::none()).await;

        assert_eq!(result, Err(BatchRejection::NotOperational));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_refused_retweet_is_failed_outcome() {
        let client = MockSocialClient::new().refusing("2");
        let targets = vec![
            AttendeeTarget::new("@a", "https://twitter.com/a/status/1"),
            AttendeeTarget::new("@b", "https://twitter.com/b/status/2"),
        ];

        let report = retweet_posts(&client, &targets, &Pacing::none()).await.unwrap();

        assert_eq!(report.success_count, 1);
        assert_eq!(report.results[1].detail(), "Retweet failed");
        assert_eq!(
            client.calls(),
            vec![SocialCall::Retweet("1".into()), SocialCall::Retweet("2".into())]
        );
    }
}
