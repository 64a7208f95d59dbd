use anyhow::Result;
use tracing::info;

use super::clamp_max_results;
use crate::domains::discovery::models::AttendeeDiscovery;
use crate::kernel::BaseAttendeeEngine;

/// Clamp the limit and ask the attendee engine once.
pub async fn discover_attendees(
    engine: &dyn BaseAttendeeEngine,
    event_name: &str,
    event_date: Option<&str>,
    max_results: i64,
) -> Result<AttendeeDiscovery> {
    let requested_limit = clamp_max_results(max_results);

    info!(
        event_name,
        event_date,
        requested = max_results,
        limit = requested_limit,
        "Attendee discovery requested"
    );

    let attendees = engine
        .discover_attendees(event_name, event_date, requested_limit)
        .await?;

    info!(count = attendees.len(), "Attendee discovery complete");

    Ok(AttendeeDiscovery {
        attendees,
        requested_limit,
    })
}
