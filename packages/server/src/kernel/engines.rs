// Discovery engines backed by Twitter recent search
//
// Both engines are thin mappers: they build a search query, call the
// API once and turn tweets into records. Which engine is used is decided
// at startup from the configured credentials.

use anyhow::Result;
use async_trait::async_trait;
use chrono::DateTime;
use std::collections::HashSet;
use std::sync::Arc;
use twitter::{SearchResponse, Tweet, TwitterService};

use crate::domains::discovery::{AttendeeRecord, EventQuery, EventRecord};
use crate::kernel::traits::{BaseAttendeeEngine, BaseEventEngine};

const EVENT_KEYWORDS: &str = "(event OR conference OR meetup OR festival OR summit)";
const EVENT_NAME_MAX_CHARS: usize = 80;

// =============================================================================
// Search-backed engines
// =============================================================================

/// Finds events by searching recent posts around a location
pub struct SearchEventEngine {
    service: Arc<TwitterService>,
}

impl SearchEventEngine {
    pub fn new(service: Arc<TwitterService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl BaseEventEngine for SearchEventEngine {
    async fn discover_events(&self, query: &EventQuery, limit: u32) -> Result<Vec<EventRecord>> {
        let search = event_search_query(query);
        tracing::debug!(query = %search, limit, "Searching for events");

        let resp = self.service.search_recent(&search, limit).await?;
        Ok(events_from_search(&resp, &query.location, limit))
    }
}

/// Finds people who recently posted about an event
pub struct SearchAttendeeEngine {
    service: Arc<TwitterService>,
}

impl SearchAttendeeEngine {
    pub fn new(service: Arc<TwitterService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl BaseAttendeeEngine for SearchAttendeeEngine {
    async fn discover_attendees(
        &self,
        event_name: &str,
        _event_date: Option<&str>,
        limit: u32,
    ) -> Result<Vec<AttendeeRecord>> {
        let search = attendee_search_query(event_name);
        tracing::debug!(query = %search, limit, "Searching for attendees");

        let resp = self.service.search_recent(&search, limit).await?;
        Ok(attendees_from_search(&resp, limit))
    }
}

fn event_search_query(query: &EventQuery) -> String {
    let mut parts = Vec::new();
    if !query.location.trim().is_empty() {
        parts.push(query.location.trim().to_string());
    }
    parts.push(EVENT_KEYWORDS.to_string());
    let categories: Vec<&str> = query
        .categories
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();
    if !categories.is_empty() {
        parts.push(format!("({})", categories.join(" OR ")));
    }
    parts.push("-is:retweet".to_string());
    parts.join(" ")
}

fn attendee_search_query(event_name: &str) -> String {
    format!("\"{}\" -is:retweet", event_name.trim())
}

fn post_link(username: Option<&str>, tweet_id: &str) -> String {
    match username {
        Some(username) => format!("https://twitter.com/{}/status/{}", username, tweet_id),
        None => format!("https://twitter.com/i/web/status/{}", tweet_id),
    }
}

fn engagement(tweet: &Tweet) -> u64 {
    tweet
        .public_metrics
        .as_ref()
        .map(|m| m.engagement())
        .unwrap_or(0)
}

fn calendar_date(created_at: Option<&str>) -> String {
    created_at
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn event_name(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    first_line.chars().take(EVENT_NAME_MAX_CHARS).collect()
}

fn events_from_search(resp: &SearchResponse, location: &str, limit: u32) -> Vec<EventRecord> {
    resp.data
        .iter()
        .take(limit as usize)
        .map(|tweet| {
            let author = resp.author_of(tweet);
            EventRecord {
                name: event_name(&tweet.text),
                description: tweet.text.clone(),
                location: location.to_string(),
                date: calendar_date(tweet.created_at.as_deref()),
                url: post_link(author.map(|u| u.username.as_str()), &tweet.id),
                source: "twitter".to_string(),
                organizer: author.map(|u| format!("@{}", u.username)),
                engagement: engagement(tweet),
            }
        })
        .collect()
}

/// One record per author, first post wins.
fn attendees_from_search(resp: &SearchResponse, limit: u32) -> Vec<AttendeeRecord> {
    let mut seen = HashSet::new();

    resp.data
        .iter()
        .filter_map(|tweet| {
            let author = resp.author_of(tweet)?;
            if !seen.insert(author.id.clone()) {
                return None;
            }
            let metrics = author.public_metrics.clone().unwrap_or_default();
            Some(AttendeeRecord {
                username: format!("@{}", author.username),
                display_name: author.name.clone(),
                bio: author.description.clone().unwrap_or_default(),
                post_link: post_link(Some(&author.username), &tweet.id),
                post_text: tweet.text.clone(),
                followers_count: metrics.followers_count,
                verified: author.verified.unwrap_or(false),
                engagement: engagement(tweet),
            })
        })
        .take(limit as usize)
        .collect()
}

// =============================================================================
// No-op engines (when no bearer token is configured)
// =============================================================================

pub struct NoopEventEngine;

#[async_trait]
impl BaseEventEngine for NoopEventEngine {
    async fn discover_events(&self, query: &EventQuery, _limit: u32) -> Result<Vec<EventRecord>> {
        tracing::warn!(
            location = %query.location,
            "No event engine configured, returning no events"
        );
        Ok(Vec::new())
    }
}

pub struct NoopAttendeeEngine;

#[async_trait]
impl BaseAttendeeEngine for NoopAttendeeEngine {
    async fn discover_attendees(
        &self,
        event_name: &str,
        _event_date: Option<&str>,
        _limit: u32,
    ) -> Result<Vec<AttendeeRecord>> {
        tracing::warn!(event_name, "No attendee engine configured, returning no attendees");
        Ok(Vec::new())
    }
}

// =============================================================================
// Factory function
// =============================================================================

/// Create both discovery engines. Search needs an app-only bearer token.
pub fn create_discovery_engines(
    service: Arc<TwitterService>,
) -> (Arc<dyn BaseEventEngine>, Arc<dyn BaseAttendeeEngine>) {
    if service.has_bearer_token() {
        tracing::info!("Discovery engines using Twitter recent search");
        (
            Arc::new(SearchEventEngine::new(service.clone())),
            Arc::new(SearchAttendeeEngine::new(service)),
        )
    } else {
        tracing::warn!("TWITTER_BEARER_TOKEN not set, discovery will return empty results");
        (Arc::new(NoopEventEngine), Arc::new(NoopAttendeeEngine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use twitter::TwitterOptions;

    fn search_fixture() -> SearchResponse {
        serde_json::from_value(json!({
            "data": [
                {
                    "id": "100",
                    "text": "Heading to RustConf tomorrow!\nWho else is going?",
                    "author_id": "1",
                    "created_at": "2026-09-10T17:30:00.000Z",
                    "public_metrics": {"retweet_count": 2, "reply_count": 1, "like_count": 10, "quote_count": 0}
                },
                {
                    "id": "101",
                    "text": "RustConf talks are up",
                    "author_id": "2"
                },
                {
                    "id": "102",
                    "text": "Second post from alice about RustConf",
                    "author_id": "1"
                },
                {
                    "id": "103",
                    "text": "Author missing from includes",
                    "author_id": "9"
                }
            ],
            "includes": {
                "users": [
                    {
                        "id": "1",
                        "name": "Alice",
                        "username": "alice",
                        "description": "Rustacean",
                        "verified": true,
                        "public_metrics": {"followers_count": 1200}
                    },
                    {"id": "2", "name": "Bob", "username": "bob"}
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_attendee_query_quotes_event_name() {
        assert_eq!(attendee_search_query(" RustConf "), "\"RustConf\" -is:retweet");
    }

    #[test]
    fn test_event_query_includes_categories() {
        let query = EventQuery {
            location: "Minneapolis".into(),
            categories: vec!["tech".into(), " ".into(), "music".into()],
            ..EventQuery::default()
        };
        assert_eq!(
            event_search_query(&query),
            "Minneapolis (event OR conference OR meetup OR festival OR summit) (tech OR music) -is:retweet"
        );
    }

    #[test]
    fn test_attendees_deduplicated_by_author() {
        let attendees = attendees_from_search(&search_fixture(), 10);

        assert_eq!(attendees.len(), 2);
        assert_eq!(attendees[0].username, "@alice");
        assert_eq!(attendees[0].post_link, "https://twitter.com/alice/status/100");
        assert_eq!(attendees[0].followers_count, 1200);
        assert!(attendees[0].verified);
        assert_eq!(attendees[0].engagement, 13);
        assert_eq!(attendees[1].username, "@bob");
        assert_eq!(attendees[1].bio, "");
    }

    #[test]
    fn test_attendees_truncated_to_limit() {
        let attendees = attendees_from_search(&search_fixture(), 1);
        assert_eq!(attendees.len(), 1);
    }

    #[test]
    fn test_events_mapped_from_posts() {
        let events = events_from_search(&search_fixture(), "Portland", 10);

        assert_eq!(events.len(), 4);
        assert_eq!(events[0].name, "Heading to RustConf tomorrow!");
        assert_eq!(events[0].date, "2026-09-10");
        assert_eq!(events[0].location, "Portland");
        assert_eq!(events[0].source, "twitter");
        assert_eq!(events[0].organizer.as_deref(), Some("@alice"));
        assert_eq!(events[1].date, "");
        assert_eq!(events[3].organizer, None);
        assert_eq!(events[3].url, "https://twitter.com/i/web/status/103");
    }

    #[test]
    fn test_event_name_is_truncated() {
        let long = "x".repeat(200);
        assert_eq!(event_name(&long).chars().count(), EVENT_NAME_MAX_CHARS);
    }

    #[tokio::test]
    async fn test_noop_engines_return_empty() {
        let events = NoopEventEngine
            .discover_events(&EventQuery::default(), 10)
            .await
            .unwrap();
        let attendees = NoopAttendeeEngine
            .discover_attendees("RustConf", None, 10)
            .await
            .unwrap();

        assert!(events.is_empty());
        assert!(attendees.is_empty());
    }

    #[tokio::test]
    async fn test_factory_without_bearer_uses_noop() {
        let service = Arc::new(TwitterService::new(TwitterOptions::default()).unwrap());
        let (events, attendees) = create_discovery_engines(service);

        assert!(events
            .discover_events(&EventQuery::default(), 5)
            .await
            .unwrap()
            .is_empty());
        assert!(attendees
            .discover_attendees("RustConf", None, 5)
            .await
            .unwrap()
            .is_empty());
    }
}
