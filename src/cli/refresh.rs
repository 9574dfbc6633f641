//! CLI handlers for the refresh commands.

use serde::Serialize;

use super::{DeveloperArgs, RefreshArgs};
use crate::auth::{AuthorizationFlow, DeveloperFlow};
use crate::config::FlowSettings;
use crate::error::Result;

#[derive(Serialize)]
struct RefreshOutput<'a> {
    access_token: &'a str,
    expires_in: u64,
    expires_at: String,
    auth0: &'a str,
}

/// Merge settings for `refresh`: config file, then `ECOBEE_*` env, then flags.
pub fn resolve_settings(args: &RefreshArgs) -> Result<FlowSettings> {
    let path = args.config.clone().unwrap_or_else(FlowSettings::default_path);
    let mut settings = FlowSettings::load_from_path(&path)?.apply_env()?;
    if let Some(auth0) = &args.auth0 {
        settings.auth0 = Some(auth0.clone());
    }
    if !args.scopes.is_empty() {
        settings.scopes = args.scopes.clone();
    }
    tracing::debug!(config = %path.display(), scopes = ?settings.scopes, "resolved settings");
    Ok(settings)
}

/// Run one refresh and render what `refresh` writes to stdout.
pub async fn refresh_output(settings: &FlowSettings, json: bool) -> Result<String> {
    let mut flow = settings.build_local_web_flow()?;
    let token = flow.refresh().await?;

    if json {
        let output = RefreshOutput {
            access_token: &token.access_token,
            expires_in: token.expires_in,
            expires_at: token.expires_at.to_rfc3339(),
            auth0: flow.auth0(),
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }
    eprintln!("expires at {}", token.expires_at.to_rfc3339());
    eprintln!("new auth0 cookie: {}", flow.auth0());
    Ok(token.access_token)
}

/// Handle `ecobee-auth refresh`.
pub async fn handle_refresh(args: &RefreshArgs) -> Result<()> {
    let settings = resolve_settings(args)?;
    println!("{}", refresh_output(&settings, args.json).await?);
    Ok(())
}

/// Handle `ecobee-auth developer`.
pub async fn handle_developer(args: &DeveloperArgs) -> Result<()> {
    let mut flow = DeveloperFlow::new(args.api_key.clone(), args.scopes.iter().cloned());
    tracing::debug!(endpoint = flow.endpoint(), "developer flow");
    let token = flow.refresh_access_token().await?;
    println!("{token}");
    Ok(())
}
