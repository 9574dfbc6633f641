//! Authorization flows that produce bearer tokens for the ecobee API.

pub mod developer;
pub mod error;
pub mod flow;
pub mod form;
pub mod local_web;
pub mod token;

pub use developer::DeveloperFlow;
pub use error::AuthError;
pub use flow::{AuthorizationFlow, FlowConfig};
pub use local_web::LocalWebFlow;
pub use token::AccessToken;
