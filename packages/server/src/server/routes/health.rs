use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

const FEATURES: [&str; 3] = ["event_discovery", "attendee_discovery", "twitter_actions"];

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    twitter_search_ready: bool,
    twitter_actions_ready: bool,
    features: Vec<&'static str>,
}

/// Health check endpoint
///
/// Reports the capabilities of the configured social client. Always 200;
/// a missing client only shows up as `false` readiness flags.
pub async fn health_handler(Extension(state): Extension<AxumAppState>) -> Json<HealthResponse> {
    let social = &state.deps.social;

    Json(HealthResponse {
        status: "healthy",
        twitter_search_ready: social.is_operational(),
        twitter_actions_ready: social.has_legacy_auth(),
        features: FEATURES.to_vec(),
    })
}

#[derive(Serialize)]
pub struct AuthStatusResponse {
    oauth1_ready: bool,
    oauth1_user: Option<String>,
    recommendation: &'static str,
}

/// Verify the v1.1 credentials against the API
pub async fn auth_status_handler(
    Extension(state): Extension<AxumAppState>,
) -> Json<AuthStatusResponse> {
    let social = &state.deps.social;

    let oauth1_user = if social.has_legacy_auth() {
        match social.verify_credentials().await {
            Ok(screen_name) => Some(screen_name),
            Err(e) => {
                tracing::warn!(error = %e, "OAuth 1.1 credential check failed");
                None
            }
        }
    } else {
        None
    };

    Json(AuthStatusResponse {
        oauth1_ready: oauth1_user.is_some(),
        oauth1_user,
        recommendation: "Using OAuth 1.1 for all actions",
    })
}
