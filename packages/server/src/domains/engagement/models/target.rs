use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One attendee row submitted for a bulk action.
///
/// The frontend posts whole attendee records; only the username and post
/// link are read, everything else is ignored. Missing or null fields
/// behave as empty strings. Rows are never rejected for field types: a
/// scalar username is kept as its text, and a post link that is not a
/// string is carried as malformed so the row fails on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttendeeTarget {
    #[serde(default, deserialize_with = "scalar_text")]
    username: Option<String>,
    #[serde(default)]
    post_link: PostLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum PostLink {
    #[default]
    Missing,
    Url(String),
    /// A present, non-empty value that is not a string.
    Malformed,
}

impl<'de> Deserialize<'de> for PostLink {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(url) => PostLink::Url(url),
            value if is_blank(&value) => PostLink::Missing,
            _ => PostLink::Malformed,
        })
    }
}

/// Null, false, zero and empty containers count as an absent value.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(s) => s.is_empty(),
    }
}

fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl AttendeeTarget {
    pub fn new(username: impl Into<String>, post_link: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            post_link: PostLink::Url(post_link.into()),
        }
    }

    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    /// The link text; empty when missing or malformed.
    pub fn post_link(&self) -> &str {
        match &self.post_link {
            PostLink::Url(url) => url,
            PostLink::Missing | PostLink::Malformed => "",
        }
    }

    /// Whether a post link was supplied at all, even one of the wrong type.
    pub fn has_post_link(&self) -> bool {
        match &self.post_link {
            PostLink::Url(url) => !url.is_empty(),
            PostLink::Malformed => true,
            PostLink::Missing => false,
        }
    }

    /// Username with every `@` removed, for composing mentions.
    pub fn handle(&self) -> String {
        self.username().replace('@', "")
    }
}
