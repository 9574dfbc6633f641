use async_trait::async_trait;

use super::error::AuthError;
use super::flow::{AuthorizationFlow, FlowConfig};

pub const AUTH_ENDPOINT: &str = "https://api.ecobee.com/authorize";

/// Developer API key + PIN pairing flow.
///
/// ecobee no longer issues developer keys, so this flow only exists to give the
/// old mechanism a name. Refreshing always fails with [`AuthError::NotImplemented`].
#[derive(Debug, Clone)]
pub struct DeveloperFlow {
    config: FlowConfig,
}

impl DeveloperFlow {
    pub fn new<I, S>(client_id: impl Into<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config: FlowConfig::new(client_id, scopes),
        }
    }

    pub fn endpoint(&self) -> &str {
        AUTH_ENDPOINT
    }
}

#[async_trait]
impl AuthorizationFlow for DeveloperFlow {
    fn config(&self) -> &FlowConfig {
        &self.config
    }

    async fn refresh_access_token(&mut self) -> Result<String, AuthError> {
        Err(AuthError::NotImplemented(
            "developer key PIN pairing flow".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refresh_is_not_implemented() {
        let mut flow = DeveloperFlow::new("dev-key", ["smartWrite"]);
        for _ in 0..2 {
            let err = flow.refresh_access_token().await.unwrap_err();
            assert!(matches!(err, AuthError::NotImplemented(_)));
        }
        assert_eq!(flow.endpoint(), "https://api.ecobee.com/authorize");
        assert_eq!(flow.config().client_id(), "dev-key");
    }
}
