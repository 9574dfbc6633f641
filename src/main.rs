//! ecobee-auth CLI binary entry point.

use clap::Parser;
use ecobee_auth::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Refresh(args) => ecobee_auth::cli::refresh::handle_refresh(args).await,
        Commands::Developer(args) => ecobee_auth::cli::refresh::handle_developer(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
