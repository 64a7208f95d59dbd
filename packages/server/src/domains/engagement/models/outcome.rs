use serde::Serialize;
use thiserror::Error;

/// The four bulk actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Retweet,
    Like,
    Comment,
    Quote,
}

impl ActionKind {
    /// Name of the success counter in the HTTP response.
    pub fn count_field(&self) -> &'static str {
        match self {
            ActionKind::Retweet => "retweeted_count",
            ActionKind::Like => "liked_count",
            ActionKind::Comment => "commented_count",
            ActionKind::Quote => "quoted_count",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Retweet => "retweet",
            ActionKind::Like => "like",
            ActionKind::Comment => "comment",
            ActionKind::Quote => "quote",
        }
    }
}

/// Per-target result. Serialized flat next to the username, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Retweeted {
        tweet_id: String,
        message: String,
    },
    Liked {
        tweet_id: String,
        message: String,
    },
    Commented {
        tweet_id: String,
        comment_id: String,
        comment_text: String,
        message: String,
    },
    Quoted {
        original_tweet_id: String,
        quote_tweet_id: String,
        quote_text: String,
        message: String,
    },
    Failed {
        error: String,
    },
}

impl OutcomeStatus {
    pub fn retweeted(tweet_id: &str, username: &str) -> Self {
        OutcomeStatus::Retweeted {
            tweet_id: tweet_id.to_string(),
            message: format!("Successfully retweeted post from {}", username),
        }
    }

    pub fn liked(tweet_id: &str, username: &str) -> Self {
        OutcomeStatus::Liked {
            tweet_id: tweet_id.to_string(),
            message: format!("Successfully liked post from {}", username),
        }
    }

    pub fn commented(tweet_id: &str, username: &str, comment_id: String, comment_text: String) -> Self {
        OutcomeStatus::Commented {
            tweet_id: tweet_id.to_string(),
            comment_id,
            comment_text,
            message: format!("Successfully commented on post from {}", username),
        }
    }

    pub fn quoted(tweet_id: &str, username: &str, quote_tweet_id: String, quote_text: String) -> Self {
        OutcomeStatus::Quoted {
            original_tweet_id: tweet_id.to_string(),
            quote_tweet_id,
            quote_text,
            message: format!("Successfully quoted post from {}", username),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        OutcomeStatus::Failed {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, OutcomeStatus::Failed { .. })
    }
}

/// Result recorded for one target of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub username: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl ActionOutcome {
    pub fn new(username: impl Into<String>, status: OutcomeStatus) -> Self {
        Self {
            username: username.into(),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Id of the post the action targeted, when one was extracted and acted on.
    pub fn tweet_id(&self) -> Option<&str> {
        match &self.status {
            OutcomeStatus::Retweeted { tweet_id, .. }
            | OutcomeStatus::Liked { tweet_id, .. }
            | OutcomeStatus::Commented { tweet_id, .. } => Some(tweet_id),
            OutcomeStatus::Quoted {
                original_tweet_id, ..
            } => Some(original_tweet_id),
            OutcomeStatus::Failed { .. } => None,
        }
    }

    /// Success message or failure reason.
    pub fn detail(&self) -> &str {
        match &self.status {
            OutcomeStatus::Retweeted { message, .. }
            | OutcomeStatus::Liked { message, .. }
            | OutcomeStatus::Commented { message, .. }
            | OutcomeStatus::Quoted { message, .. } => message,
            OutcomeStatus::Failed { error } => error,
        }
    }
}

/// Aggregate of one batch, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchActionReport {
    pub success_count: usize,
    pub failed_count: usize,
    pub results: Vec<ActionOutcome>,
}

impl BatchActionReport {
    pub fn from_results(results: Vec<ActionOutcome>) -> Self {
        let success_count = results.iter().filter(|r| r.is_success()).count();
        Self {
            success_count,
            failed_count: results.len() - success_count,
            results,
        }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }
}

/// Whole-batch refusal, decided before any target is touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BatchRejection {
    #[error("Twitter client not operational")]
    NotOperational,

    #[error("Twitter OAuth 1.1 not configured for quote tweets")]
    LegacyAuthMissing,
}
