// TestDependencies - mock implementations for testing
//
// Provides mock collaborators that can be injected into ServerDeps for tests.
// Every mock records its calls so tests can assert on what was sent.

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::{BaseAttendeeEngine, BaseEventEngine, BaseSocialClient, PostResult, ServerDeps};
use crate::domains::discovery::{AttendeeRecord, EventQuery, EventRecord};

// =============================================================================
// Mock Social Client
// =============================================================================

/// A call made against the mock social client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialCall {
    Retweet(String),
    Like(String),
    Post {
        text: String,
        reply_to: Option<String>,
    },
    LegacyPost(String),
}

pub struct MockSocialClient {
    operational: bool,
    legacy_auth: bool,
    /// Tweet ids the API answers with a refusal
    refused: HashSet<String>,
    /// Tweet ids whose calls fail outright
    faulted_ids: HashSet<String>,
    /// Post texts whose calls fail outright
    faulted_texts: HashSet<String>,
    calls: Arc<Mutex<Vec<SocialCall>>>,
}

impl MockSocialClient {
    pub fn new() -> Self {
        Self {
            operational: true,
            legacy_auth: true,
            refused: HashSet::new(),
            faulted_ids: HashSet::new(),
            faulted_texts: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn not_operational(mut self) -> Self {
        self.operational = false;
        self
    }

    pub fn without_legacy_auth(mut self) -> Self {
        self.legacy_auth = false;
        self
    }

    /// Refuse actions targeting this tweet id
    pub fn refusing(mut self, tweet_id: &str) -> Self {
        self.refused.insert(tweet_id.to_string());
        self
    }

    /// Fail actions targeting this tweet id with an error
    pub fn faulting(mut self, tweet_id: &str) -> Self {
        self.faulted_ids.insert(tweet_id.to_string());
        self
    }

    /// Fail posts with exactly this text with an error
    pub fn faulting_text(mut self, text: &str) -> Self {
        self.faulted_texts.insert(text.to_string());
        self
    }

    /// Get all calls in the order they were made
    pub fn calls(&self) -> Vec<SocialCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: SocialCall) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.len()
    }

    fn check_fault(&self, tweet_id: Option<&str>, text: Option<&str>) -> Result<()> {
        if let Some(id) = tweet_id.filter(|id| self.faulted_ids.contains(*id)) {
            bail!("mock fault for tweet {}", id);
        }
        if text.is_some_and(|t| self.faulted_texts.contains(t)) {
            bail!("mock fault for post text");
        }
        Ok(())
    }
}

impl Default for MockSocialClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseSocialClient for MockSocialClient {
    fn is_operational(&self) -> bool {
        self.operational
    }

    fn has_legacy_auth(&self) -> bool {
        self.legacy_auth
    }

    async fn retweet(&self, tweet_id: &str) -> Result<bool> {
        self.record(SocialCall::Retweet(tweet_id.to_string()));
        self.check_fault(Some(tweet_id), None)?;
        Ok(!self.refused.contains(tweet_id))
    }

    async fn like(&self, tweet_id: &str) -> Result<bool> {
        self.record(SocialCall::Like(tweet_id.to_string()));
        self.check_fault(Some(tweet_id), None)?;
        Ok(!self.refused.contains(tweet_id))
    }

    async fn post(&self, text: &str, reply_to: Option<&str>) -> Result<PostResult> {
        let count = self.record(SocialCall::Post {
            text: text.to_string(),
            reply_to: reply_to.map(str::to_string),
        });
        self.check_fault(reply_to, Some(text))?;

        if reply_to.is_some_and(|id| self.refused.contains(id)) {
            return Ok(PostResult::rejected("refused by mock"));
        }
        Ok(PostResult::posted(format!("posted-{}", count)))
    }

    async fn legacy_post(&self, text: &str) -> Result<String> {
        let count = self.record(SocialCall::LegacyPost(text.to_string()));
        self.check_fault(None, Some(text))?;
        Ok(format!("quote-{}", count))
    }

    async fn verify_credentials(&self) -> Result<String> {
        if !self.legacy_auth {
            bail!("Twitter OAuth 1.1 not configured");
        }
        Ok("eventbot".to_string())
    }
}

// =============================================================================
// Mock Discovery Engines
// =============================================================================

pub struct MockEventEngine {
    events: Vec<EventRecord>,
    failure: Option<String>,
    calls: Arc<Mutex<Vec<(EventQuery, u32)>>>,
}

impl MockEventEngine {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An engine whose every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Populate `count` generated events
    pub fn with_events(mut self, count: usize) -> Self {
        self.events = (1..=count).map(sample_event).collect();
        self
    }

    pub fn with_event(mut self, event: EventRecord) -> Self {
        self.events.push(event);
        self
    }

    pub fn calls(&self) -> Vec<(EventQuery, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockEventEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseEventEngine for MockEventEngine {
    async fn discover_events(&self, query: &EventQuery, limit: u32) -> Result<Vec<EventRecord>> {
        self.calls.lock().unwrap().push((query.clone(), limit));

        if let Some(message) = &self.failure {
            return Err(anyhow!("{}", message));
        }
        Ok(self.events.iter().take(limit as usize).cloned().collect())
    }
}

pub struct MockAttendeeEngine {
    attendees: Vec<AttendeeRecord>,
    failure: Option<String>,
    calls: Arc<Mutex<Vec<(String, Option<String>, u32)>>>,
}

impl MockAttendeeEngine {
    pub fn new() -> Self {
        Self {
            attendees: Vec::new(),
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An engine whose every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Populate `count` generated attendees
    pub fn with_attendees(mut self, count: usize) -> Self {
        self.attendees = (1..=count).map(sample_attendee).collect();
        self
    }

    pub fn calls(&self) -> Vec<(String, Option<String>, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAttendeeEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAttendeeEngine for MockAttendeeEngine {
    async fn discover_attendees(
        &self,
        event_name: &str,
        event_date: Option<&str>,
        limit: u32,
    ) -> Result<Vec<AttendeeRecord>> {
        self.calls.lock().unwrap().push((
            event_name.to_string(),
            event_date.map(str::to_string),
            limit,
        ));

        if let Some(message) = &self.failure {
            return Err(anyhow!("{}", message));
        }
        Ok(self.attendees.iter().take(limit as usize).cloned().collect())
    }
}

fn sample_event(n: usize) -> EventRecord {
    EventRecord {
        name: format!("Event {}", n),
        description: format!("Description for event {}", n),
        location: "Minneapolis".to_string(),
        date: "2026-11-15".to_string(),
        url: format!("https://twitter.com/organizer/status/{}", 1000 + n),
        source: "mock".to_string(),
        organizer: Some("@organizer".to_string()),
        engagement: n as u64,
    }
}

fn sample_attendee(n: usize) -> AttendeeRecord {
    AttendeeRecord {
        username: format!("@user{}", n),
        display_name: format!("User {}", n),
        bio: String::new(),
        post_link: format!("https://twitter.com/user{}/status/{}", n, 2000 + n),
        post_text: format!("Going to the event! #{}", n),
        followers_count: 100 * n as u64,
        verified: false,
        engagement: n as u64,
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mocks. Keep this around in tests to inspect recorded calls.
pub struct TestDependencies {
    pub social: Arc<MockSocialClient>,
    pub event_engine: Arc<MockEventEngine>,
    pub attendee_engine: Arc<MockAttendeeEngine>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            social: Arc::new(MockSocialClient::new()),
            event_engine: Arc::new(MockEventEngine::new()),
            attendee_engine: Arc::new(MockAttendeeEngine::new()),
        }
    }

    /// Set a mock social client
    pub fn mock_social(mut self, client: MockSocialClient) -> Self {
        self.social = Arc::new(client);
        self
    }

    /// Set a mock event engine
    pub fn mock_events(mut self, engine: MockEventEngine) -> Self {
        self.event_engine = Arc::new(engine);
        self
    }

    /// Set a mock attendee engine
    pub fn mock_attendees(mut self, engine: MockAttendeeEngine) -> Self {
        self.attendee_engine = Arc::new(engine);
        self
    }

    /// Build ServerDeps sharing these mocks
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.social.clone(),
            self.event_engine.clone(),
            self.attendee_engine.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
