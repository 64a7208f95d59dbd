//! Minimal Twitter/X REST API client.
//!
//! Covers what the event backend needs and nothing more:
//! v2 user-context writes (retweet, like, create tweet), v1.1
//! `statuses/update` and `account/verify_credentials`, and v2 app-only
//! recent search.
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter::{OAuthCredentials, TwitterOptions, TwitterService};
//!
//! let service = TwitterService::new(TwitterOptions {
//!     credentials: Some(OAuthCredentials { /* ... */ }),
//!     ..TwitterOptions::default()
//! })?;
//!
//! service.like("1460323737035677698").await?;
//! ```

pub mod error;
pub mod models;
pub mod oauth;

pub use error::{Result, TwitterError};
pub use models::{CreatedTweet, LegacyStatus, LegacyUser, SearchResponse, Tweet, User};
pub use oauth::OAuthSigner;

use std::time::Duration;

use reqwest::{header, Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::models::{
    CreateTweetRequest, DataResponse, LikeStatus, ReplySettings, RetweetStatus, TweetIdRequest,
};
use crate::oauth::escape;

pub const DEFAULT_API_URL: &str = "https://api.twitter.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OAuth 1.0a user-context credentials. All four values are required.
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

#[derive(Debug, Clone)]
pub struct TwitterOptions {
    pub api_base_url: String,
    /// App-only token, used for search.
    pub bearer_token: Option<String>,
    /// User-context credentials, used for every write and for v1.1.
    pub credentials: Option<OAuthCredentials>,
}

impl Default for TwitterOptions {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            bearer_token: None,
            credentials: None,
        }
    }
}

pub struct TwitterService {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
    signer: Option<OAuthSigner>,
    /// Authenticated user id, resolved lazily through `GET /2/users/me`.
    user_id: OnceCell<String>,
}

impl TwitterService {
    pub fn new(options: TwitterOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("event-intel/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: options.api_base_url.trim_end_matches('/').to_string(),
            bearer_token: options.bearer_token,
            signer: options.credentials.map(OAuthSigner::new),
            user_id: OnceCell::new(),
        })
    }

    pub fn has_user_context(&self) -> bool {
        self.signer.is_some()
    }

    pub fn has_bearer_token(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// `GET /2/users/me`
    pub async fn me(&self) -> Result<User> {
        let resp: DataResponse<User> = self
            .signed_json(Method::GET, "/2/users/me", None::<&()>)
            .await?;
        Ok(resp.data)
    }

    /// `GET /1.1/account/verify_credentials.json`
    pub async fn verify_credentials(&self) -> Result<LegacyUser> {
        self.signed_json(
            Method::GET,
            "/1.1/account/verify_credentials.json",
            None::<&()>,
        )
        .await
    }

    /// `POST /2/users/:id/retweets`. Returns the `retweeted` flag reported by the API.
    pub async fn retweet(&self, tweet_id: &str) -> Result<bool> {
        let user_id = self.authenticated_user_id().await?;
        let body = TweetIdRequest {
            tweet_id: tweet_id.to_string(),
        };
        let resp: DataResponse<RetweetStatus> = self
            .signed_json(
                Method::POST,
                &format!("/2/users/{}/retweets", user_id),
                Some(&body),
            )
            .await?;

        tracing::debug!(tweet_id, retweeted = resp.data.retweeted, "Retweet request completed");
        Ok(resp.data.retweeted)
    }

    /// `POST /2/users/:id/likes`. Returns the `liked` flag reported by the API.
    pub async fn like(&self, tweet_id: &str) -> Result<bool> {
        let user_id = self.authenticated_user_id().await?;
        let body = TweetIdRequest {
            tweet_id: tweet_id.to_string(),
        };
        let resp: DataResponse<LikeStatus> = self
            .signed_json(
                Method::POST,
                &format!("/2/users/{}/likes", user_id),
                Some(&body),
            )
            .await?;

        tracing::debug!(tweet_id, liked = resp.data.liked, "Like request completed");
        Ok(resp.data.liked)
    }

    /// `POST /2/tweets`, optionally as a reply.
    pub async fn create_tweet(&self, text: &str, reply_to: Option<&str>) -> Result<CreatedTweet> {
        let body = CreateTweetRequest {
            text: text.to_string(),
            reply: reply_to.map(|id| ReplySettings {
                in_reply_to_tweet_id: id.to_string(),
            }),
        };
        let resp: DataResponse<CreatedTweet> = self
            .signed_json(Method::POST, "/2/tweets", Some(&body))
            .await?;
        Ok(resp.data)
    }

    /// `POST /1.1/statuses/update.json`
    pub async fn update_status(&self, status: &str) -> Result<LegacyStatus> {
        let params = vec![("status".to_string(), status.to_string())];
        self.signed_form("/1.1/statuses/update.json", &params).await
    }

    /// `GET /2/tweets/search/recent` with author expansion (app-only auth).
    ///
    /// The API accepts `max_results` in `10..=100`; the value is clamped into
    /// that window, so callers may receive more tweets than they asked for.
    pub async fn search_recent(&self, query: &str, max_results: u32) -> Result<SearchResponse> {
        let bearer = self
            .bearer_token
            .as_deref()
            .ok_or(TwitterError::NotConfigured("bearer token"))?;

        let max_results = max_results.clamp(10, 100).to_string();
        let url = format!("{}/2/tweets/search/recent", self.base_url);

        tracing::debug!(query, "Searching recent tweets");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(bearer)
            .query(&[
                ("query", query),
                ("max_results", max_results.as_str()),
                ("expansions", "author_id"),
                ("tweet.fields", "created_at,public_metrics,author_id"),
                ("user.fields", "name,username,description,verified,public_metrics"),
            ])
            .send()
            .await?;

        parse_response(resp).await
    }

    async fn authenticated_user_id(&self) -> Result<&str> {
        let id = self
            .user_id
            .get_or_try_init(|| async { self.me().await.map(|user| user.id) })
            .await?;
        Ok(id.as_str())
    }

    fn signer(&self) -> Result<&OAuthSigner> {
        self.signer
            .as_ref()
            .ok_or(TwitterError::NotConfigured("OAuth 1.0a user credentials"))
    }

    async fn signed_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let auth = self.signer()?.sign(method.as_str(), &url, &[])?;

        let mut req = self
            .client
            .request(method, &url)
            .header(header::AUTHORIZATION, auth);
        if let Some(body) = body {
            req = req.json(body);
        }

        parse_response(req.send().await?).await
    }

    async fn signed_form<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let auth = self.signer()?.sign("POST", &url, params)?;

        // Encoded by hand so the body matches the signature base string byte for byte
        let body = params
            .iter()
            .map(|(k, v)| format!("{}={}", escape(k), escape(v)))
            .collect::<Vec<_>>()
            .join("&");

        let resp = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, auth)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        parse_response(resp).await
    }
}

async fn parse_response<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %message, "Twitter API returned an error");
        return Err(TwitterError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
