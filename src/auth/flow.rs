use async_trait::async_trait;

use super::error::AuthError;

/// Client identity and requested scope shared by every authorization flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    client_id: String,
    scope: String,
}

impl FlowConfig {
    /// Scopes are joined with a single space, in the order given.
    pub fn new<I, S>(client_id: impl Into<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scopes: Vec<String> = scopes.into_iter().map(Into::into).collect();
        Self {
            client_id: client_id.into(),
            scope: scopes.join(" "),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

/// A strategy for obtaining a bearer token for ecobee API calls.
///
/// Refreshing takes `&mut self`: flows may rotate internal credentials on every
/// call, so one instance serves one refresh at a time.
#[async_trait]
pub trait AuthorizationFlow: Send {
    fn config(&self) -> &FlowConfig;

    /// Return a fresh, non-empty bearer token, doing whatever refresh the flow needs.
    async fn refresh_access_token(&mut self) -> Result<String, AuthError>;
}
