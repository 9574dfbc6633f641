//! Crate-level error type.

use thiserror::Error;

use crate::auth::AuthError;

/// Primary error type for everything outside a single refresh call.
#[derive(Error, Debug)]
pub enum EcobeeError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EcobeeError {
    /// Whether this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Auth(err) => err.is_retryable(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for EcobeeError {
    fn from(error: toml::de::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<serde_json::Error> for EcobeeError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, EcobeeError>;
