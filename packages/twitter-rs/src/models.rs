use serde::{Deserialize, Serialize};

/// v2 envelope: `{"data": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub public_metrics: Option<UserMetrics>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserMetrics {
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub tweet_count: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub public_metrics: Option<TweetMetrics>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TweetMetrics {
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub quote_count: u64,
}

impl TweetMetrics {
    pub fn engagement(&self) -> u64 {
        self.retweet_count + self.reply_count + self.like_count + self.quote_count
    }
}

/// Body of `POST /2/tweets`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTweetRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplySettings>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplySettings {
    pub in_reply_to_tweet_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTweet {
    pub id: String,
    pub text: String,
}

/// Body of `POST /2/users/:id/retweets` and `POST /2/users/:id/likes`.
#[derive(Debug, Clone, Serialize)]
pub struct TweetIdRequest {
    pub tweet_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetweetStatus {
    pub retweeted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LikeStatus {
    pub liked: bool,
}

/// v1.1 user object, trimmed to the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyUser {
    pub id_str: String,
    pub screen_name: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// v1.1 status object returned by `statuses/update`.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyStatus {
    pub id_str: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// `GET /2/tweets/search/recent` with `expansions=author_id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<Tweet>,
    #[serde(default)]
    pub includes: Option<SearchIncludes>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchIncludes {
    #[serde(default)]
    pub users: Vec<User>,
}

impl SearchResponse {
    /// Look up the expanded author of a tweet.
    pub fn author_of(&self, tweet: &Tweet) -> Option<&User> {
        let author_id = tweet.author_id.as_deref()?;
        self.includes
            .as_ref()?
            .users
            .iter()
            .find(|u| u.id == author_id)
    }
}
