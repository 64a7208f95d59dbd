use std::time::Duration;

use super::ActionKind;

/// Pause inserted after each completed external call, per action.
///
/// This is the only rate-limit control: batches are never parallelised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub retweet: Duration,
    pub like: Duration,
    pub comment: Duration,
    pub quote: Duration,
}

impl Pacing {
    /// No pauses at all. Used by tests.
    pub const fn none() -> Self {
        Self {
            retweet: Duration::ZERO,
            like: Duration::ZERO,
            comment: Duration::ZERO,
            quote: Duration::ZERO,
        }
    }

    pub fn delay_for(&self, kind: ActionKind) -> Duration {
        match kind {
            ActionKind::Retweet => self.retweet,
            ActionKind::Like => self.like,
            ActionKind::Comment => self.comment,
            ActionKind::Quote => self.quote,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            retweet: Duration::from_secs(2),
            like: Duration::from_secs(2),
            comment: Duration::from_secs(3),
            quote: Duration::from_secs(3),
        }
    }
}
