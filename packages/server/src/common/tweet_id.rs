use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Tried in order, first capture wins. The bare `status/<digits>` form
    // subsumes the host-qualified ones, so a link resolves to its first
    // `status/` segment regardless of host.
    static ref TWEET_ID_PATTERNS: Vec<Regex> = [
        r"status/(\d+)",
        r"twitter\.com/\w+/status/(\d+)",
        r"twitter\.com/status/(\d+)",
        r"x\.com/\w+/status/(\d+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

/// Extract the numeric post id from a Twitter/X post link.
///
/// Returns `None` for links without a `status/<digits>` segment.
pub fn extract_tweet_id(post_link: &str) -> Option<String> {
    TWEET_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(post_link)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}
