use serde::{Deserialize, Serialize};

/// A person who posted about an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendeeRecord {
    /// Handle including the leading `@`
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub post_link: String,
    pub post_text: String,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub engagement: u64,
}

/// Result of an attendee discovery request, after clamping
#[derive(Debug, Clone)]
pub struct AttendeeDiscovery {
    pub attendees: Vec<AttendeeRecord>,
    pub requested_limit: u32,
}
