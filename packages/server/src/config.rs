use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use twitter::{OAuthCredentials, TwitterOptions, DEFAULT_API_URL};

use crate::domains::engagement::Pacing;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub twitter: TwitterOptions,
    /// Whether v1.1 endpoints (used by quote posts) may be called
    pub legacy_api_enabled: bool,
    pub pacing: Pacing,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = oauth_credentials(&var)?;

        Ok(Self {
            port: var("PORT")
                .unwrap_or_else(|| "10000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            frontend_dir: var("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("../frontend")),
            twitter: TwitterOptions {
                api_base_url: var("TWITTER_API_URL")
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                bearer_token: non_empty(var("TWITTER_BEARER_TOKEN")),
                credentials,
            },
            legacy_api_enabled: var("TWITTER_LEGACY_API_ENABLED")
                .map(|v| v.parse::<bool>())
                .transpose()
                .context("TWITTER_LEGACY_API_ENABLED must be true or false")?
                .unwrap_or(true),
            pacing: Pacing {
                retweet: delay_secs(&var, "RETWEET_DELAY_SECS", 2)?,
                like: delay_secs(&var, "LIKE_DELAY_SECS", 2)?,
                comment: delay_secs(&var, "COMMENT_DELAY_SECS", 3)?,
                quote: delay_secs(&var, "QUOTE_DELAY_SECS", 3)?,
            },
        })
    }
}

const OAUTH_VARS: [&str; 4] = [
    "TWITTER_CONSUMER_KEY",
    "TWITTER_CONSUMER_SECRET",
    "TWITTER_ACCESS_TOKEN",
    "TWITTER_ACCESS_TOKEN_SECRET",
];

fn oauth_credentials<F>(var: &F) -> Result<Option<OAuthCredentials>>
where
    F: Fn(&str) -> Option<String>,
{
    let values: Vec<Option<String>> = OAUTH_VARS.iter().map(|k| non_empty(var(k))).collect();

    match values.as_slice() {
        [Some(consumer_key), Some(consumer_secret), Some(access_token), Some(access_token_secret)] => {
            Ok(Some(OAuthCredentials {
                consumer_key: consumer_key.clone(),
                consumer_secret: consumer_secret.clone(),
                access_token: access_token.clone(),
                access_token_secret: access_token_secret.clone(),
            }))
        }
        _ if values.iter().all(Option::is_none) => Ok(None),
        _ => bail!("{} must all be set together", OAUTH_VARS.join(", ")),
    }
}

fn delay_secs<F>(var: &F, key: &str, default: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = match var(key) {
        Some(v) => v
            .parse::<u64>()
            .with_context(|| format!("{} must be a whole number of seconds", key))?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(lookup(&[])).unwrap();

        assert_eq!(config.port, 10000);
        assert_eq!(config.frontend_dir, PathBuf::from("../frontend"));
        assert_eq!(config.twitter.api_base_url, DEFAULT_API_URL);
        assert!(config.twitter.bearer_token.is_none());
        assert!(config.twitter.credentials.is_none());
        assert!(config.legacy_api_enabled);
        assert_eq!(config.pacing, Pacing::default());
    }

    #[test]
    fn test_full_oauth_credentials() {
        let config = Config::from_vars(lookup(&[
            ("TWITTER_CONSUMER_KEY", "ck"),
            ("TWITTER_CONSUMER_SECRET", "cs"),
            ("TWITTER_ACCESS_TOKEN", "at"),
            ("TWITTER_ACCESS_TOKEN_SECRET", "ats"),
            ("TWITTER_BEARER_TOKEN", "bearer"),
            ("TWITTER_LEGACY_API_ENABLED", "false"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        let credentials = config.twitter.credentials.unwrap();
        assert_eq!(credentials.consumer_key, "ck");
        assert_eq!(credentials.access_token_secret, "ats");
        assert_eq!(config.twitter.bearer_token.as_deref(), Some("bearer"));
        assert!(!config.legacy_api_enabled);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_partial_oauth_credentials_rejected() {
        let result = Config::from_vars(lookup(&[
            ("TWITTER_CONSUMER_KEY", "ck"),
            ("TWITTER_ACCESS_TOKEN", "at"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = Config::from_vars(lookup(&[
            ("TWITTER_CONSUMER_KEY", " "),
            ("TWITTER_BEARER_TOKEN", ""),
        ]))
        .unwrap();
        assert!(config.twitter.credentials.is_none());
        assert!(config.twitter.bearer_token.is_none());
    }

    #[test]
    fn test_pacing_overrides() {
        let config = Config::from_vars(lookup(&[
            ("RETWEET_DELAY_SECS", "0"),
            ("QUOTE_DELAY_SECS", "10"),
        ]))
        .unwrap();
        assert_eq!(config.pacing.retweet, Duration::ZERO);
        assert_eq!(config.pacing.like, Duration::from_secs(2));
        assert_eq!(config.pacing.quote, Duration::from_secs(10));

        assert!(Config::from_vars(lookup(&[("LIKE_DELAY_SECS", "soon")])).is_err());
    }
}
