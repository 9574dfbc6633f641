use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;

use super::error::AuthError;
use super::flow::{AuthorizationFlow, FlowConfig};
use super::form::hidden_input_value;
use super::token::AccessToken;
use crate::util::timeout::with_timeout;

pub const AUTH_ENDPOINT: &str = "https://auth.ecobee.com/authorize";
pub const WEB_CLIENT_ID: &str = "183eORFPlXyz9BbDZwqexHPBQoVjgadh";
pub const REDIRECT_URI: &str = "https://www.ecobee.com/home/authCallback";
pub const AUDIENCE: &str = "https://prod.ecobee.com/api/v1";
pub const SESSION_COOKIE: &str = "auth0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authorization flow backed by the `auth0` session cookie of an ecobee.com login.
///
/// Each refresh asks the authorize endpoint for a token in `form_post` mode and
/// scrapes the hidden fields of the returned page. The endpoint rotates the
/// session cookie on every successful call; the flow keeps the latest value.
///
/// # Example
/// ```no_run
/// use ecobee_auth::auth::{AuthorizationFlow, LocalWebFlow};
///
/// # async fn example() -> Result<(), ecobee_auth::auth::AuthError> {
/// let mut flow = LocalWebFlow::new("session-cookie", ["smartWrite"]);
/// let bearer = flow.refresh_access_token().await?;
/// let next_session = flow.auth0().to_string();
/// # Ok(())
/// # }
/// ```
pub struct LocalWebFlow {
    client: reqwest::Client,
    config: FlowConfig,
    auth0: String,
    endpoint: String,
    timeout: Duration,
}

impl LocalWebFlow {
    pub fn new<I, S>(auth0: impl Into<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client: reqwest::Client::new(),
            config: FlowConfig::new(WEB_CLIENT_ID, scopes),
            auth0: auth0.into(),
            endpoint: AUTH_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Current session cookie value. Changes after every successful refresh.
    pub fn auth0(&self) -> &str {
        &self.auth0
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Refresh and return the bearer token together with its expiry.
    ///
    /// The session cookie is replaced as soon as the response carries a new one,
    /// before the page is searched for the token fields.
    pub async fn refresh(&mut self) -> Result<AccessToken, AuthError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            scope = %self.config.scope(),
            "requesting ecobee access token"
        );
        let response = with_timeout(self.timeout, self.authorize()).await?;
        tracing::debug!(status = response.status.as_u16(), "ecobee authorize response");

        if response.status != StatusCode::OK {
            return Err(AuthError::AuthorizationRejected {
                status: response.status.as_u16(),
                body: response.body,
            });
        }

        let auth0 = response.session.ok_or(AuthError::MissingSessionCookie)?;
        self.auth0 = auth0;
        tracing::debug!("rotated auth0 session cookie");

        let access_token = hidden_input_value(&response.body, "access_token")
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::TokenNotFound)?;
        let expires_in = hidden_input_value(&response.body, "expires_in")
            .ok_or(AuthError::ExpiryNotFound)?;
        let expires_in: u64 = expires_in
            .trim()
            .parse()
            .map_err(|_| AuthError::InvalidExpiry(expires_in.to_string()))?;

        let token = AccessToken::new(access_token, expires_in, Utc::now());
        tracing::debug!(expires_at = %token.expires_at, "access token expires");
        Ok(token)
    }

    async fn authorize(&self) -> Result<AuthorizeResponse, AuthError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .header(
                reqwest::header::COOKIE,
                format!("{SESSION_COOKIE}={}", self.auth0),
            )
            .query(&[
                ("client_id", self.config.client_id()),
                ("scope", self.config.scope()),
                ("response_type", "token"),
                ("response_mode", "form_post"),
                ("redirect_uri", REDIRECT_URI),
                ("audience", AUDIENCE),
            ])
            .send()
            .await?;
        let status = resp.status();
        // Later headers override earlier ones; an expired or empty cookie clears the session.
        let session = resp
            .cookies()
            .filter(|cookie| cookie.name() == SESSION_COOKIE)
            .fold(None, |_, cookie| {
                (is_live(&cookie) && !cookie.value().is_empty())
                    .then(|| cookie.value().to_string())
            });
        let body = resp.text().await?;
        Ok(AuthorizeResponse {
            status,
            session,
            body,
        })
    }
}

#[async_trait]
impl AuthorizationFlow for LocalWebFlow {
    fn config(&self) -> &FlowConfig {
        &self.config
    }

    async fn refresh_access_token(&mut self) -> Result<String, AuthError> {
        Ok(self.refresh().await?.access_token)
    }
}

fn is_live(cookie: &reqwest::cookie::Cookie<'_>) -> bool {
    match cookie.max_age() {
        Some(age) => !age.is_zero(),
        None => cookie
            .expires()
            .map_or(true, |expires| expires > SystemTime::now()),
    }
}

struct AuthorizeResponse {
    status: StatusCode,
    session: Option<String>,
    body: String,
}
