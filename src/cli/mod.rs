//! CLI entry point for ecobee-auth.

pub mod refresh;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ecobee access-token CLI
#[derive(Parser, Debug)]
#[command(name = "ecobee-auth", version, about = "Refresh ecobee API access tokens")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Refresh a token from an ecobee.com auth0 session cookie
    Refresh(RefreshArgs),
    /// Try the retired developer-key PIN flow
    Developer(DeveloperArgs),
}

/// Arguments for `ecobee-auth refresh`.
#[derive(Parser, Debug)]
pub struct RefreshArgs {
    /// auth0 session cookie (overrides config and ECOBEE_AUTH0)
    #[arg(long)]
    pub auth0: Option<String>,
    /// Scope to request; repeat for several
    #[arg(short, long = "scope")]
    pub scopes: Vec<String>,
    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Print token, expiry and rotated cookie as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `ecobee-auth developer`.
#[derive(Parser, Debug)]
pub struct DeveloperArgs {
    /// Developer API key
    #[arg(long, default_value = "")]
    pub api_key: String,
    /// Scope to request; repeat for several
    #[arg(short, long = "scope", default_value = "smartWrite")]
    pub scopes: Vec<String>,
}
