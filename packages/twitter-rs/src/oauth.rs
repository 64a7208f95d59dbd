//! OAuth 1.0a request signing.
//!
//! Every user-context call (v2 writes and all of v1.1) carries an
//! `Authorization: OAuth ...` header signed with HMAC-SHA1 over the method,
//! the bare URL and the sorted query/form parameters. JSON bodies are not
//! part of the signature.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode, NON_ALPHANUMERIC};
use sha1::Sha1;

use crate::error::{Result, TwitterError};
use crate::OAuthCredentials;

/// Everything except the RFC 3986 unreserved marks is escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escape for signatures and form bodies. A space becomes `%20`.
pub(crate) fn escape(s: &str) -> PercentEncode<'_> {
    utf8_percent_encode(s, UNRESERVED)
}

#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: OAuthCredentials,
}

impl OAuthSigner {
    pub fn new(credentials: OAuthCredentials) -> Self {
        Self { credentials }
    }

    /// Build the `Authorization` header value for a request.
    ///
    /// `url` must not contain a query string; query and form parameters go
    /// in `params` instead.
    pub fn sign(&self, method: &str, url: &str, params: &[(String, String)]) -> Result<String> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TwitterError::OAuth(format!("clock before unix epoch: {e}")))?
            .as_secs();
        let nonce = format!("{:032x}", rand::random::<u128>());

        self.sign_with(method, url, params, &nonce, &timestamp.to_string())
    }

    fn sign_with(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
        nonce: &str,
        timestamp: &str,
    ) -> Result<String> {
        let protocol = [
            ("oauth_consumer_key", self.credentials.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp),
            ("oauth_token", self.credentials.access_token.as_str()),
            ("oauth_version", "1.0"),
        ];

        // Sorted on escaped (key, value), not on the joined `k=v` text
        let mut pairs: Vec<(String, String)> = protocol
            .iter()
            .copied()
            .chain(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map(|(k, v)| (escape(k).to_string(), escape(v).to_string()))
            .collect();
        pairs.sort_unstable();
        let normalized = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            escape(url),
            escape(&normalized)
        );
        let signature = self.digest(&base_string)?;

        let fields = protocol
            .iter()
            .copied()
            .chain(std::iter::once(("oauth_signature", signature.as_str())))
            .map(|(k, v)| format!("{k}=\"{}\"", escape(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {fields}"))
    }

    /// Base64 HMAC-SHA1 of `base_string`, keyed by both secrets.
    fn digest(&self, base_string: &str) -> Result<String> {
        let key = format!(
            "{}&{}",
            escape(&self.credentials.consumer_secret),
            escape(&self.credentials.access_token_secret)
        );

        let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
            .map_err(|e| TwitterError::OAuth(e.to_string()))?;
        mac.update(base_string.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}
