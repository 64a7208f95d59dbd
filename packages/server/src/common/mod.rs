// Common utilities shared across the application

pub mod tweet_id;

pub use tweet_id::extract_tweet_id;
