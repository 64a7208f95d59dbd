use anyhow::Result;
use tracing::info;

use super::clamp_max_results;
use crate::domains::discovery::models::{EventDiscovery, EventQuery};
use crate::kernel::BaseEventEngine;

/// Clamp the limit and ask the event engine once.
///
/// Engine failures propagate to the caller unchanged.
pub async fn discover_events(
    engine: &dyn BaseEventEngine,
    query: &EventQuery,
    max_results: i64,
) -> Result<EventDiscovery> {
    let requested_limit = clamp_max_results(max_results);

    info!(
        location = %query.location,
        requested = max_results,
        limit = requested_limit,
        "Event discovery requested"
    );

    let events = engine.discover_events(query, requested_limit).await?;

    info!(count = events.len(), "Event discovery complete");

    Ok(EventDiscovery {
        events,
        requested_limit,
    })
}
