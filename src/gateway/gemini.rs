use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

use super::parse::parse_itinerary;
use super::prompt::{build_prompt, SYSTEM_INSTRUCTION};
use super::schema::itinerary_response_schema;
use super::Generator;
use crate::config::Config;
use crate::error::GatewayError;
use crate::model::{TripItinerary, TripRequest};

/// Gemini-backed generator. One generateContent call per request,
/// fully awaited; no retries, no streaming.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
    timeout: Duration,
}

impl GeminiClient {
    /// The API key is passed in explicitly at construction; the gateway
    /// never consults the environment at call time.
    pub fn new(api_key: String, config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_sec),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, request: &TripRequest) -> Result<TripItinerary, GatewayError> {
        let prompt = build_prompt(request);

        let body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ],
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": itinerary_response_schema()
            }
        });

        debug!(model = %self.model, destination = %request.destination, "Dispatching generation request");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Gemini API returned an error");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let payload = candidate_text(&text)?;
        parse_itinerary(&payload)
    }
}

/// Pull the first candidate's text out of the generateContent envelope.
fn candidate_text(raw: &str) -> Result<String, GatewayError> {
    #[derive(Deserialize)]
    struct GenerateResponse {
        #[serde(default)]
        candidates: Vec<Candidate>,
    }
    #[derive(Deserialize)]
    struct Candidate {
        #[serde(default)]
        content: Option<Content>,
    }
    #[derive(Deserialize)]
    struct Content {
        #[serde(default)]
        parts: Vec<Part>,
    }
    #[derive(Deserialize)]
    struct Part {
        #[serde(default)]
        text: Option<String>,
    }

    let parsed: GenerateResponse =
        serde_json::from_str(raw).map_err(|e| GatewayError::Parse(e.to_string()))?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }
    Ok(text)
}
