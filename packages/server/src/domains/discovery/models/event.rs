use serde::{Deserialize, Serialize};

/// Filters for an event search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub categories: Vec<String>,
}

/// An event surfaced by an event engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub description: String,
    pub location: String,
    /// Calendar date (YYYY-MM-DD) when known, otherwise empty
    pub date: String,
    pub url: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default)]
    pub engagement: u64,
}

/// Result of an event discovery request, after clamping
#[derive(Debug, Clone)]
pub struct EventDiscovery {
    pub events: Vec<EventRecord>,
    pub requested_limit: u32,
}
