//! Engagement domain - paced bulk actions against attendee posts
//!
//! Every bulk action runs through `activities::run_batch`: targets are
//! processed strictly in order, one external call per target, with a fixed
//! pause after each completed call. Per-target problems become failed
//! outcomes and never abort the rest of the batch.

pub mod activities;
pub mod models;

// Re-export activities
pub use activities::{
    compose_comment, compose_quote, like_posts, post_comments, post_quote_tweets, retweet_posts,
    run_batch,
};

// Re-export models
pub use models::{
    ActionKind, ActionOutcome, AttendeeTarget, BatchActionReport, BatchRejection, OutcomeStatus,
    Pacing,
};
