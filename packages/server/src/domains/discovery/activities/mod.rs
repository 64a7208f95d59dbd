pub mod discover_attendees;
pub mod discover_events;

pub use discover_attendees::discover_attendees;
pub use discover_events::discover_events;

/// Upper bound on results any discovery request may ask for.
pub const MAX_RESULTS_CAP: u32 = 100;

/// Clamp a requested result count into `1..=MAX_RESULTS_CAP`.
///
/// Out-of-range values are corrected silently, they are not an error.
pub fn clamp_max_results(requested: i64) -> u32 {
    requested.clamp(1, MAX_RESULTS_CAP as i64) as u32
}
