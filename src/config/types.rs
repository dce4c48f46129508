use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// Gemini model used for itinerary generation. Must support
    /// structured (JSON schema) output.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generative language API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Transport-level timeout for the generation request, in seconds.
    /// There is no retry on top of this.
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,

    /// Name of the environment variable holding the API key. The key is
    /// read once at startup and handed to the gateway.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}
