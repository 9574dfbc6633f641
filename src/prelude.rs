//! Convenience re-exports.

pub use crate::auth::{
    AccessToken, AuthError, AuthorizationFlow, DeveloperFlow, FlowConfig, LocalWebFlow,
};
pub use crate::config::FlowSettings;
pub use crate::error::{EcobeeError, Result};
