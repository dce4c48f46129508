pub mod plan;
pub mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yatra")]
#[command(
    author,
    version,
    about = "Terminal trip planner for India powered by Gemini structured output"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive planning wizard
    Plan(PlanArgs),

    /// Print the JSON Schema declared to the model for itinerary output
    Schema,
}

#[derive(Parser, Clone)]
pub struct PlanArgs {
    /// Path to config file
    #[arg(short, long, default_value = "yatra.yaml")]
    pub config: PathBuf,

    /// Override the Gemini model id
    #[arg(long)]
    pub model: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long)]
    pub timeout_sec: Option<u64>,
}
