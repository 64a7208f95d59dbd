//! Application setup and server configuration.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::engagement::Pacing;
use crate::kernel::ServerDeps;
use crate::server::routes::{
    auth_status_handler, discover_attendees_handler, discover_events_handler, health_handler,
    like_posts_handler, post_comments_handler, post_quote_tweets_handler, retweet_posts_handler,
};
use crate::server::static_files;

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
    pub pacing: Pacing,
    pub frontend_dir: Arc<PathBuf>,
}

/// Build the Axum application router.
///
/// API routes live under `/api`. Everything else is the static frontend,
/// or a small status document when `frontend_dir` does not exist.
pub fn build_app(deps: ServerDeps, pacing: Pacing, frontend_dir: PathBuf) -> Router {
    let api = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/auth-status", get(auth_status_handler))
        .route("/api/discover-events", post(discover_events_handler))
        .route("/api/discover-attendees", post(discover_attendees_handler))
        .route("/api/retweet-posts", post(retweet_posts_handler))
        .route("/api/like-posts", post(like_posts_handler))
        .route("/api/post-comments", post(post_comments_handler))
        .route("/api/post-quote-tweets", post(post_quote_tweets_handler));

    let router = static_files::mount(api, &frontend_dir);

    let state = AxumAppState {
        deps: Arc::new(deps),
        pacing,
        frontend_dir: Arc::new(frontend_dir),
    };

    // The frontend may be hosted anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
