//! Plan command - launches the interactive planning wizard

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use super::PlanArgs;
use crate::config::Config;
use crate::gateway::GeminiClient;
use crate::tui::{run_tui, TuiConfig};

pub async fn execute(args: PlanArgs) -> Result<()> {
    info!("Loading config from {:?}", args.config);
    let mut config = Config::load(&args.config)?;

    // Apply CLI overrides
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(timeout_sec) = args.timeout_sec {
        config.timeout_sec = timeout_sec;
    }

    // The key is resolved once here and handed to the gateway; nothing
    // downstream consults the environment.
    let api_key = config.resolve_api_key()?;
    let generator = Arc::new(GeminiClient::new(api_key, &config));

    info!(model = %config.model, "Starting planning wizard");
    run_tui(TuiConfig { generator })
}
