use std::path::PathBuf;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum YatraError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),
}

/// Any failure originating in or after the generation call. Sub-causes
/// are kept for diagnostics but all collapse to one user-facing failure.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Model returned no usable text")]
    EmptyResponse,

    #[error("Failed to parse itinerary from model output: {0}")]
    Parse(String),
}
