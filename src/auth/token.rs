use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Bearer token scraped from an authorization response, with its expiry.
///
/// # Example
/// ```
/// use chrono::{Duration, Utc};
/// use ecobee_auth::auth::AccessToken;
///
/// let token = AccessToken::new("eyJ...", 3600, Utc::now());
/// assert!(!token.is_expired());
/// assert!(token.expires_within(Duration::hours(2)));
/// ```
#[derive(Clone, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: u64,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Build a token whose lifetime of `expires_in` seconds starts at `issued_at`.
    pub fn new(access_token: impl Into<String>, expires_in: u64, issued_at: DateTime<Utc>) -> Self {
        let expires_at = i64::try_from(expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            access_token: access_token.into(),
            expires_in,
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// True when the token expires before `now + margin`.
    pub fn expires_within(&self, margin: Duration) -> bool {
        self.expires_at - Utc::now() < margin
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"..")
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
