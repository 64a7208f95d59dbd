//! Integration tests for the bulk action endpoints.
//!
//! - POST /api/retweet-posts
//! - POST /api/like-posts
//! - POST /api/post-comments
//! - POST /api/post-quote-tweets

mod common;

use crate::common::TestHarness;
use event_intel::kernel::test_dependencies::{MockSocialClient, SocialCall};
use event_intel::kernel::TestDependencies;
use serde_json::json;
use test_context::test_context;

fn harness_with(client: MockSocialClient) -> TestHarness {
    TestHarness::new(TestDependencies::new().mock_social(client))
}

// =============================================================================
// Retweet / Like
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn retweet_reports_one_outcome_per_attendee(ctx: &TestHarness) {
    let resp = ctx
        .post_json(
            "/api/retweet-posts",
            json!({
                "attendees": [
                    {"username": "@alice", "post_link": "https://twitter.com/alice/status/111", "bio": "ignored"},
                    {"username": "@bob", "post_link": ""},
                    {"username": "@carol", "post_link": "https://example.com/carol"},
                    {"post_link": "https://x.com/dave/status/444"}
                ]
            }),
        )
        .await;

    assert_eq!(resp.status, 200);
    let body = resp.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["retweeted_count"], 2);
    assert_eq!(body["failed_count"], 2);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(
        results[0],
        json!({
            "username": "@alice",
            "status": "retweeted",
            "tweet_id": "111",
            "message": "Successfully retweeted post from @alice"
        })
    );
    assert_eq!(results[1]["error"], "No post link available");
    assert_eq!(results[2]["error"], "Could not extract tweet ID from link");
    assert_eq!(results[3]["username"], "");
    assert_eq!(results[3]["tweet_id"], "444");

    assert_eq!(
        ctx.deps.social.calls(),
        vec![
            SocialCall::Retweet("111".into()),
            SocialCall::Retweet("444".into())
        ]
    );
}

#[tokio::test]
async fn like_refusal_and_fault_do_not_abort_batch() {
    let ctx = harness_with(MockSocialClient::new().refusing("2").faulting("3"));

    let resp = ctx
        .post_json(
            "/api/like-posts",
            json!({
                "attendees": [
                    {"username": "a", "post_link": "https://x.com/a/status/1"},
                    {"username": "b", "post_link": "https://x.com/b/status/2"},
                    {"username": "c", "post_link": "https://x.com/c/status/3"},
                    {"username": "d", "post_link": "https://x.com/d/status/4"}
                ]
            }),
        )
        .await;

    let body = resp.json();
    assert_eq!(body["liked_count"], 2);
    assert_eq!(body["failed_count"], 2);
    assert_eq!(body["results"][1]["error"], "Like failed");
    assert!(body["results"][2]["error"]
        .as_str()
        .unwrap()
        .contains("mock fault"));
    assert_eq!(body["results"][3]["status"], "liked");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn non_string_attendee_fields_fail_per_item(ctx: &TestHarness) {
    let resp = ctx
        .post_json(
            "/api/like-posts",
            json!({
                "attendees": [
                    {"username": "@a", "post_link": "https://x.com/a/status/1"},
                    {"username": "@b", "post_link": 12345},
                    {"username": 7, "post_link": "https://x.com/c/status/3"}
                ]
            }),
        )
        .await;

    assert_eq!(resp.status, 200);
    let body = resp.json();
    assert_eq!(body["liked_count"], 2);
    assert_eq!(body["failed_count"], 1);
    assert_eq!(body["results"][1]["username"], "@b");
    assert_eq!(body["results"][1]["error"], "Could not extract tweet ID from link");
    assert_eq!(body["results"][2]["username"], "7");
    assert_eq!(body["results"][2]["tweet_id"], "3");

    assert_eq!(
        ctx.deps.social.calls(),
        vec![SocialCall::Like("1".into()), SocialCall::Like("3".into())]
    );
}

#[tokio::test]
async fn non_operational_client_rejects_whole_batch() {
    let ctx = harness_with(MockSocialClient::new().not_operational());
    let attendees = json!({
        "attendees": [{"username": "@a", "post_link": "https://x.com/a/status/1"}]
    });

    for path in ["/api/retweet-posts", "/api/like-posts", "/api/post-comments"] {
        let resp = ctx.post_json(path, attendees.clone()).await;

        assert_eq!(resp.status, 200);
        assert_eq!(
            resp.json(),
            json!({"success": false, "error": "Twitter client not operational"})
        );
    }
    assert!(ctx.deps.social.calls().is_empty());
}

// =============================================================================
// Comments
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn comments_reply_with_custom_message(ctx: &TestHarness) {
    let resp = ctx
        .post_json(
            "/api/post-comments",
            json!({
                "attendees": [{"username": "@alice", "post_link": "https://twitter.com/alice/status/555"}],
                "message": "See you there!"
            }),
        )
        .await;

    let body = resp.json();
    assert_eq!(body["commented_count"], 1);
    assert_eq!(body["results"][0]["comment_text"], "@alice See you there!");
    assert_eq!(body["results"][0]["comment_id"], "posted-1");
    assert_eq!(
        ctx.deps.social.calls(),
        vec![SocialCall::Post {
            text: "@alice See you there!".into(),
            reply_to: Some("555".into()),
        }]
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn empty_comment_message_uses_default(ctx: &TestHarness) {
    let resp = ctx
        .post_json(
            "/api/post-comments",
            json!({
                "attendees": [{"username": "bob", "post_link": "https://x.com/bob/status/7"}],
                "message": ""
            }),
        )
        .await;

    assert_eq!(
        resp.json()["results"][0]["comment_text"],
        "@bob Great post! 👍"
    );
}

// =============================================================================
// Quotes
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn quotes_report_total_attempted(ctx: &TestHarness) {
    let resp = ctx
        .post_json(
            "/api/post-quote-tweets",
            json!({
                "attendees": [
                    {"username": "@bob", "post_link": "https://x.com/bob/status/9"},
                    {"username": "@eve", "post_link": ""}
                ]
            }),
        )
        .await;

    let body = resp.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["quoted_count"], 1);
    assert_eq!(body["failed_count"], 1);
    assert_eq!(body["total_attempted"], 2);
    assert_eq!(body["results"][0]["original_tweet_id"], "9");
    assert_eq!(body["results"][0]["quote_tweet_id"], "quote-1");
    assert_eq!(
        body["results"][0]["quote_text"],
        "Check this out! 👀\n\n🔁 Via @bob"
    );
}

#[tokio::test]
async fn quotes_require_legacy_auth() {
    let ctx = harness_with(MockSocialClient::new().without_legacy_auth());

    let resp = ctx
        .post_json(
            "/api/post-quote-tweets",
            json!({
                "attendees": [{"username": "@bob", "post_link": "https://x.com/bob/status/9"}],
                "message": "Nice"
            }),
        )
        .await;

    assert_eq!(
        resp.json(),
        json!({"success": false, "error": "Twitter OAuth 1.1 not configured for quote tweets"})
    );
}

// =============================================================================
// Request validation
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_bodies_are_client_errors(ctx: &TestHarness) {
    let not_json = ctx.post_raw("/api/like-posts", "{not json").await;
    assert!(not_json.status.is_client_error());
    assert!(not_json.json()["detail"].is_string());

    let missing_attendees = ctx.post_json("/api/like-posts", json!({"message": "hi"})).await;
    assert_eq!(missing_attendees.status, 422);
    assert!(missing_attendees.json()["detail"]
        .as_str()
        .unwrap()
        .contains("attendees"));

    assert!(ctx.deps.social.calls().is_empty());
}
