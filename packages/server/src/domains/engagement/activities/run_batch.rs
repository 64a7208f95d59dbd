use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::common::extract_tweet_id;
use crate::domains::engagement::models::{
    ActionKind, ActionOutcome, AttendeeTarget, BatchActionReport, OutcomeStatus,
};

pub const NO_POST_LINK: &str = "No post link available";
pub const NO_TWEET_ID: &str = "Could not extract tweet ID from link";

/// What the action closure receives for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Username exactly as submitted
    pub username: String,
    /// Username with `@` stripped
    pub handle: String,
    pub tweet_id: String,
}

/// Apply `action` to every target, strictly in order.
///
/// - Targets without a post link, or whose link has no post id, are recorded
///   as failed and cost no pause.
/// - `Ok(status)` from the action is recorded as-is (a `Failed` status is an
///   explicit refusal) and is followed by `delay` when more targets remain.
/// - `Err` from the action is recorded as failed with the error text; the
///   batch carries on without pausing.
///
/// The returned report always has exactly one outcome per target.
pub async fn run_batch<F, Fut>(
    kind: ActionKind,
    targets: &[AttendeeTarget],
    delay: Duration,
    action: F,
) -> BatchActionReport
where
    F: Fn(Dispatch) -> Fut,
    Fut: Future<Output = Result<OutcomeStatus>>,
{
    let mut results = Vec::with_capacity(targets.len());

    for (index, target) in targets.iter().enumerate() {
        let username = target.username();
        let remaining = targets.len() - index - 1;

        if !target.has_post_link() {
            results.push(ActionOutcome::new(username, OutcomeStatus::failed(NO_POST_LINK)));
            continue;
        }

        let Some(tweet_id) = extract_tweet_id(target.post_link()) else {
            debug!(username, post_link = target.post_link(), "No tweet id in post link");
            results.push(ActionOutcome::new(username, OutcomeStatus::failed(NO_TWEET_ID)));
            continue;
        };

        debug!(action = kind.as_str(), username, %tweet_id, "Dispatching action");

        let dispatch = Dispatch {
            username: username.to_string(),
            handle: target.handle(),
            tweet_id,
        };

        match action(dispatch).await {
            Ok(status) => {
                if status.is_success() {
                    info!(action = kind.as_str(), username, "Action succeeded");
                } else {
                    warn!(action = kind.as_str(), username, ?status, "Action refused");
                }
                results.push(ActionOutcome::new(username, status));

                if remaining > 0 && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
            Err(e) => {
                warn!(action = kind.as_str(), username, error = %e, "Action failed");
                results.push(ActionOutcome::new(username, OutcomeStatus::failed(e.to_string())));
            }
        }
    }

    let report = BatchActionReport::from_results(results);
    info!(
        action = kind.as_str(),
        succeeded = report.success_count,
        failed = report.failed_count,
        "Batch complete"
    );
    report
}
