//! Flow settings (layered: code > env > config file).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::LocalWebFlow;
use crate::error::{EcobeeError, Result};

const DEFAULT_SCOPE: &str = "smartWrite";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings used to build a [`LocalWebFlow`] outside of code.
///
/// ```toml
/// auth0 = "session-cookie"
/// scopes = ["smartRead", "smartWrite"]
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowSettings {
    pub auth0: Option<String>,
    pub scopes: Vec<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            auth0: None,
            scopes: vec![DEFAULT_SCOPE.to_string()],
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FlowSettings {
    /// Default settings file path (`<config dir>/ecobee-auth/config.toml`).
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ecobee", "ecobee-auth")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("ecobee-auth.toml"))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load settings from `path`; a missing file yields the defaults.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(raw) => Self::from_toml_str(&raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Apply `ECOBEE_*` overrides from the environment (and `.env`, if present).
    pub fn apply_env(mut self) -> Result<Self> {
        let _ = dotenvy::dotenv();
        if let Ok(auth0) = std::env::var("ECOBEE_AUTH0") {
            self.auth0 = Some(auth0);
        }
        if let Ok(scopes) = std::env::var("ECOBEE_SCOPES") {
            self.scopes = split_scopes(&scopes);
        }
        if let Ok(endpoint) = std::env::var("ECOBEE_AUTH_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }
        if let Ok(raw) = std::env::var("ECOBEE_TIMEOUT_SECS") {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                EcobeeError::Configuration(format!("ECOBEE_TIMEOUT_SECS is not a number: {raw}"))
            })?;
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a session-cookie flow; requires an `auth0` value.
    pub fn build_local_web_flow(&self) -> Result<LocalWebFlow> {
        let auth0 = self
            .auth0
            .as_deref()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                EcobeeError::Configuration("No auth0 session cookie configured".to_string())
            })?;
        let flow =
            LocalWebFlow::new(auth0, self.scopes.iter().cloned()).with_timeout(self.timeout());
        Ok(match &self.endpoint {
            Some(endpoint) => flow.with_endpoint(endpoint.clone()),
            None => flow,
        })
    }
}

/// Split a scope list written with spaces and/or commas.
pub fn split_scopes(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|scope| !scope.is_empty())
        .map(str::to_string)
        .collect()
}
