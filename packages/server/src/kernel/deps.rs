//! Server dependencies for handlers (using traits for testability)
//!
//! This module provides the central dependency container used by all routes.
//! All external services use trait abstractions to enable testing.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use twitter::{TwitterError, TwitterService};

use crate::config::Config;
use crate::kernel::{
    create_discovery_engines, create_social_client, BaseAttendeeEngine, BaseEventEngine,
    BaseSocialClient, PostResult,
};

// =============================================================================
// TwitterService Adapter (implements BaseSocialClient trait)
// =============================================================================

/// Wrapper around TwitterService that implements BaseSocialClient trait
///
/// API refusals (non-2xx answers) are reported as explicit failures;
/// transport and configuration errors propagate as `Err`.
pub struct TwitterAdapter {
    service: Arc<TwitterService>,
    legacy_api_enabled: bool,
}

impl TwitterAdapter {
    pub fn new(service: Arc<TwitterService>, legacy_api_enabled: bool) -> Self {
        Self {
            service,
            legacy_api_enabled,
        }
    }
}

#[async_trait]
impl BaseSocialClient for TwitterAdapter {
    fn is_operational(&self) -> bool {
        self.service.has_user_context()
    }

    fn has_legacy_auth(&self) -> bool {
        self.legacy_api_enabled && self.service.has_user_context()
    }

    async fn retweet(&self, tweet_id: &str) -> Result<bool> {
        match self.service.retweet(tweet_id).await {
            Ok(retweeted) => Ok(retweeted),
            Err(TwitterError::Api { status, message }) => {
                tracing::warn!(tweet_id, status, %message, "Retweet refused");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn like(&self, tweet_id: &str) -> Result<bool> {
        match self.service.like(tweet_id).await {
            Ok(liked) => Ok(liked),
            Err(TwitterError::Api { status, message }) => {
                tracing::warn!(tweet_id, status, %message, "Like refused");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn post(&self, text: &str, reply_to: Option<&str>) -> Result<PostResult> {
        match self.service.create_tweet(text, reply_to).await {
            Ok(tweet) => Ok(PostResult::posted(tweet.id)),
            Err(e @ TwitterError::Api { .. }) => Ok(PostResult::rejected(e.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn legacy_post(&self, text: &str) -> Result<String> {
        if !self.has_legacy_auth() {
            bail!("Twitter OAuth 1.1 not configured");
        }
        let status = self.service.update_status(text).await?;
        Ok(status.id_str)
    }

    async fn verify_credentials(&self) -> Result<String> {
        let user = self.service.verify_credentials().await?;
        Ok(user.screen_name)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to routes (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub social: Arc<dyn BaseSocialClient>,
    pub event_engine: Arc<dyn BaseEventEngine>,
    pub attendee_engine: Arc<dyn BaseAttendeeEngine>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        social: Arc<dyn BaseSocialClient>,
        event_engine: Arc<dyn BaseEventEngine>,
        attendee_engine: Arc<dyn BaseAttendeeEngine>,
    ) -> Self {
        Self {
            social,
            event_engine,
            attendee_engine,
        }
    }

    /// Build real or no-op collaborators depending on which credentials are configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let service = Arc::new(
            TwitterService::new(config.twitter.clone())
                .context("Failed to create Twitter client")?,
        );

        let social = create_social_client(service.clone(), config.legacy_api_enabled);
        let (event_engine, attendee_engine) = create_discovery_engines(service);

        Ok(Self::new(social, event_engine, attendee_engine))
    }
}
