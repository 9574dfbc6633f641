//! ecobee-auth — access-token refresh for the ecobee thermostat API.
//!
//! Provides an [`AuthorizationFlow`](auth::AuthorizationFlow) capability and the
//! flows behind it. The session-cookie flow replays an ecobee.com web login to
//! obtain bearer tokens; the developer-key flow is kept as a named stub.
//!
//! # Quick Start
//!
//! ```no_run
//! use ecobee_auth::prelude::*;
//!
//! # async fn example() -> ecobee_auth::error::Result<()> {
//! let mut flow = LocalWebFlow::new("session-cookie", ["smartWrite"]);
//! let bearer = flow.refresh_access_token().await?;
//! println!("{bearer}");
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod prelude;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
