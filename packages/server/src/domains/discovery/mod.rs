//! Discovery domain - event and attendee lookup through pluggable engines

pub mod activities;
pub mod models;

// Re-export activities
pub use activities::{clamp_max_results, discover_attendees, discover_events, MAX_RESULTS_CAP};

// Re-export models
pub use models::{AttendeeDiscovery, AttendeeRecord, EventDiscovery, EventQuery, EventRecord};
