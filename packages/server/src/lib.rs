// Event Intelligence Platform - API Core
//
// Serves the frontend bundle and a small REST surface for discovering events
// and attendees, and for running paced bulk actions (retweet, like, comment,
// quote) against attendee posts on Twitter/X.
//
// External services sit behind the capability traits in kernel/traits.rs.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
