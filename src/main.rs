use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod gateway;
mod model;
mod tui;
mod wizard;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("yatra=debug")
    } else {
        EnvFilter::new("yatra=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Plan(args) => cli::plan::execute(args).await,
        Commands::Schema => cli::schema::execute(),
    }
}
