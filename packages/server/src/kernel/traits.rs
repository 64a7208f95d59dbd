// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Batch pacing, text composition and outcome bookkeeping live in the
// engagement domain and only call through these traits.
//
// Naming convention: Base* for trait names (e.g., BaseSocialClient)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::discovery::{AttendeeRecord, EventQuery, EventRecord};

// =============================================================================
// Social Client Trait (Infrastructure - Twitter/X actions)
// =============================================================================

/// Outcome of posting a status through the v2 API.
///
/// `success == false` means the API answered and refused; `error` carries
/// its explanation when one was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostResult {
    pub success: bool,
    pub tweet_id: Option<String>,
    pub error: Option<String>,
}

impl PostResult {
    pub fn posted(tweet_id: impl Into<String>) -> Self {
        Self {
            success: true,
            tweet_id: Some(tweet_id.into()),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            tweet_id: None,
            error: Some(error.into()),
        }
    }
}

#[async_trait]
pub trait BaseSocialClient: Send + Sync {
    /// Whether v2 user-context actions (retweet, like, post) can be made
    fn is_operational(&self) -> bool;

    /// Whether the v1.1 API (used for quote posts) is configured
    fn has_legacy_auth(&self) -> bool;

    /// Retweet a post. `Ok(false)` when the API refused.
    async fn retweet(&self, tweet_id: &str) -> Result<bool>;

    /// Like a post. `Ok(false)` when the API refused.
    async fn like(&self, tweet_id: &str) -> Result<bool>;

    /// Post a status, optionally as a reply
    async fn post(&self, text: &str, reply_to: Option<&str>) -> Result<PostResult>;

    /// Post a status through the v1.1 API, returning the new status id
    async fn legacy_post(&self, text: &str) -> Result<String>;

    /// Screen name of the account behind the v1.1 credentials
    async fn verify_credentials(&self) -> Result<String>;
}

// =============================================================================
// Discovery Engine Traits (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseEventEngine: Send + Sync {
    /// Find events matching the query, returning at most `limit` records
    async fn discover_events(&self, query: &EventQuery, limit: u32) -> Result<Vec<EventRecord>>;
}

#[async_trait]
pub trait BaseAttendeeEngine: Send + Sync {
    /// Find people posting about an event, returning at most `limit` records
    async fn discover_attendees(
        &self,
        event_name: &str,
        event_date: Option<&str>,
        limit: u32,
    ) -> Result<Vec<AttendeeRecord>>;
}
