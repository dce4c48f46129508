//! Itinerary generation gateway: turns a `TripRequest` into one call to
//! the generative service and parses the structured result.

mod gemini;
mod parse;
mod prompt;
mod schema;

pub use gemini::GeminiClient;
pub use schema::itinerary_response_schema;

use crate::error::GatewayError;
use crate::model::{TripItinerary, TripRequest};
use async_trait::async_trait;

#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate an itinerary for the given request. Exactly one outbound
    /// call; the returned plan is used verbatim, with no post-validation
    /// of day numbering or costs.
    async fn generate(&self, request: &TripRequest) -> Result<TripItinerary, GatewayError>;
}
