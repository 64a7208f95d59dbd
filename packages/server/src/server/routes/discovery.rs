use axum::{extract::Extension, Json};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Number;

use crate::domains::discovery::{
    discover_attendees, discover_events, AttendeeRecord, EventQuery, EventRecord,
};
use crate::server::app::AxumAppState;
use crate::server::error::{ApiError, ApiJson};

#[derive(Debug, Deserialize)]
pub struct EventDiscoveryRequest {
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(deserialize_with = "any_number")]
    pub max_results: i64,
}

#[derive(Debug, Deserialize)]
pub struct AttendeeDiscoveryRequest {
    pub event_name: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(deserialize_with = "any_number")]
    pub max_results: i64,
}

/// Accept any JSON number for a limit, saturating at the `i64` bounds.
/// Fractions truncate toward zero; clamping happens in the activity.
fn any_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let n = Number::deserialize(deserializer)?;
    if let Some(v) = n.as_i64() {
        return Ok(v);
    }
    if n.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    n.as_f64()
        .filter(|v| !v.is_nan())
        .map(|v| v as i64)
        .ok_or_else(|| de::Error::custom("max_results must be a number"))
}

#[derive(Serialize)]
pub struct EventDiscoveryResponse {
    success: bool,
    events: Vec<EventRecord>,
    total_events: usize,
    requested_limit: u32,
}

#[derive(Serialize)]
pub struct AttendeeDiscoveryResponse {
    success: bool,
    attendees: Vec<AttendeeRecord>,
    total_attendees: usize,
    requested_limit: u32,
}

pub async fn discover_events_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(request): ApiJson<EventDiscoveryRequest>,
) -> Result<Json<EventDiscoveryResponse>, ApiError> {
    let query = EventQuery {
        location: request.location,
        start_date: request.start_date,
        end_date: request.end_date,
        categories: request.categories,
    };

    let result = discover_events(
        state.deps.event_engine.as_ref(),
        &query,
        request.max_results,
    )
    .await?;

    Ok(Json(EventDiscoveryResponse {
        success: true,
        total_events: result.events.len(),
        events: result.events,
        requested_limit: result.requested_limit,
    }))
}

pub async fn discover_attendees_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(request): ApiJson<AttendeeDiscoveryRequest>,
) -> Result<Json<AttendeeDiscoveryResponse>, ApiError> {
    let result = discover_attendees(
        state.deps.attendee_engine.as_ref(),
        &request.event_name,
        request.event_date.as_deref(),
        request.max_results,
    )
    .await?;

    Ok(Json(AttendeeDiscoveryResponse {
        success: true,
        total_attendees: result.attendees.len(),
        attendees: result.attendees,
        requested_limit: result.requested_limit,
    }))
}
