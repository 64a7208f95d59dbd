pub mod like_posts;
pub mod post_comments;
pub mod post_quote_tweets;
pub mod retweet_posts;
pub mod run_batch;

pub use like_posts::like_posts;
pub use post_comments::{compose_comment, post_comments, DEFAULT_COMMENT};
pub use post_quote_tweets::{compose_quote, post_quote_tweets, DEFAULT_QUOTE};
pub use retweet_posts::retweet_posts;
pub use run_batch::{run_batch, Dispatch};

/// Treat an empty override the same as no override.
fn message_or<'a>(message: Option<&'a str>, default: &'a str) -> &'a str {
    message.filter(|m| !m.is_empty()).unwrap_or(default)
}
