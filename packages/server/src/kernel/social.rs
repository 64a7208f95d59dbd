// Social client implementations and startup selection

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Arc;
use twitter::TwitterService;

use crate::kernel::deps::TwitterAdapter;
use crate::kernel::traits::{BaseSocialClient, PostResult};

// =============================================================================
// No-op Social Client (when no Twitter credentials are configured)
// =============================================================================

/// Social client that reports itself non-operational and performs nothing
pub struct NoopSocialClient;

impl NoopSocialClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopSocialClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseSocialClient for NoopSocialClient {
    fn is_operational(&self) -> bool {
        false
    }

    fn has_legacy_auth(&self) -> bool {
        false
    }

    async fn retweet(&self, tweet_id: &str) -> Result<bool> {
        tracing::warn!(tweet_id, "No Twitter client configured, skipping retweet");
        Ok(false)
    }

    async fn like(&self, tweet_id: &str) -> Result<bool> {
        tracing::warn!(tweet_id, "No Twitter client configured, skipping like");
        Ok(false)
    }

    async fn post(&self, _text: &str, _reply_to: Option<&str>) -> Result<PostResult> {
        tracing::warn!("No Twitter client configured, skipping post");
        Ok(PostResult::rejected("Twitter client not configured"))
    }

    async fn legacy_post(&self, _text: &str) -> Result<String> {
        bail!("Twitter OAuth 1.1 not configured")
    }

    async fn verify_credentials(&self) -> Result<String> {
        bail!("Twitter OAuth 1.1 not configured")
    }
}

// =============================================================================
// Factory function
// =============================================================================

/// Create the social client based on which credentials the service holds
pub fn create_social_client(
    service: Arc<TwitterService>,
    legacy_api_enabled: bool,
) -> Arc<dyn BaseSocialClient> {
    if !service.has_user_context() {
        tracing::warn!("Twitter user credentials not configured, social actions disabled");
        return Arc::new(NoopSocialClient::new());
    }

    if legacy_api_enabled {
        tracing::info!("Twitter client ready (v2 actions + v1.1 quote posts)");
    } else {
        tracing::info!("Twitter client ready (v2 actions only, v1.1 disabled)");
    }
    Arc::new(TwitterAdapter::new(service, legacy_api_enabled))
}
