use axum::{extract::Extension, Json};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::domains::engagement::{
    like_posts, post_comments, post_quote_tweets, retweet_posts, ActionKind, AttendeeTarget,
    BatchActionReport, BatchRejection,
};
use crate::server::app::AxumAppState;
use crate::server::error::ApiJson;

/// Body shared by all four bulk action endpoints
#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub attendees: Vec<AttendeeTarget>,
    /// Only read by comments and quotes
    #[serde(default)]
    pub message: Option<String>,
}

/// Shape a batch result. Rejections are reported in-band with HTTP 200.
fn batch_response(kind: ActionKind, result: Result<BatchActionReport, BatchRejection>) -> Json<Value> {
    let report = match result {
        Ok(report) => report,
        Err(rejection) => {
            tracing::warn!(action = kind.as_str(), %rejection, "Batch rejected");
            return Json(json!({ "success": false, "error": rejection.to_string() }));
        }
    };

    let mut body = Map::new();
    body.insert("success".into(), Value::Bool(true));
    body.insert(kind.count_field().into(), json!(report.success_count));
    body.insert("failed_count".into(), json!(report.failed_count));
    if kind == ActionKind::Quote {
        body.insert("total_attempted".into(), json!(report.total()));
    }
    body.insert("results".into(), json!(report.results));

    Json(Value::Object(body))
}

pub async fn retweet_posts_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(request): ApiJson<ActionRequest>,
) -> Json<Value> {
    let result = retweet_posts(state.deps.social.as_ref(), &request.attendees, &state.pacing).await;
    batch_response(ActionKind::Retweet, result)
}

pub async fn like_posts_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(request): ApiJson<ActionRequest>,
) -> Json<Value> {
    let result = like_posts(state.deps.social.as_ref(), &request.attendees, &state.pacing).await;
    batch_response(ActionKind::Like, result)
}

pub async fn post_comments_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(request): ApiJson<ActionRequest>,
) -> Json<Value> {
    let result = post_comments(
        state.deps.social.as_ref(),
        &request.attendees,
        request.message.as_deref(),
        &state.pacing,
    )
    .await;
    batch_response(ActionKind::Comment, result)
}

pub async fn post_quote_tweets_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(request): ApiJson<ActionRequest>,
) -> Json<Value> {
    let result = post_quote_tweets(
        state.deps.social.as_ref(),
        &request.attendees,
        request.message.as_deref(),
        &state.pacing,
    )
    .await;
    batch_response(ActionKind::Quote, result)
}
