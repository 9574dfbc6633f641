use thiserror::Error;

/// Failures raised while refreshing an access token.
///
/// Every variant is terminal for the call that produced it; flows never retry.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout after {0}ms")]
    Timeout(u64),
    #[error("Failed to refresh access token: {status} {body}")]
    AuthorizationRejected { status: u16, body: String },
    #[error("Failed to refresh bearer token: no auth0 cookie in response")]
    MissingSessionCookie,
    #[error("Failed to refresh bearer token: no access token in response")]
    TokenNotFound,
    #[error("Failed to refresh bearer token: no expiration in response")]
    ExpiryNotFound,
    #[error("Failed to refresh bearer token: invalid expiration {0:?}")]
    InvalidExpiry(String),
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl AuthError {
    /// Whether a caller could reasonably try the same request again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}
