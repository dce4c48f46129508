//! Parse the model's text payload into a `TripItinerary`.
//!
//! With responseMimeType set to application/json the payload is usually
//! clean JSON, but models occasionally wrap output in markdown fences,
//! so parsing is strict-first with an extraction fallback.

use crate::error::GatewayError;
use crate::model::TripItinerary;

pub fn parse_itinerary(raw: &str) -> Result<TripItinerary, GatewayError> {
    match serde_json::from_str::<TripItinerary>(raw.trim()) {
        Ok(itinerary) => Ok(itinerary),
        Err(strict_err) => {
            if let Some(json_str) = extract_json(raw) {
                if let Ok(itinerary) = serde_json::from_str::<TripItinerary>(&json_str) {
                    return Ok(itinerary);
                }
            }
            Err(GatewayError::Parse(strict_err.to_string()))
        }
    }
}

/// Extract a JSON object from a string that might contain markdown code blocks
fn extract_json(s: &str) -> Option<String> {
    // First try: extract from markdown code block
    let re = regex::Regex::new(r"```(?:json)?\s*\n?([\s\S]*?)\n?```").ok()?;
    for cap in re.captures_iter(s) {
        let potential_json = cap.get(1)?.as_str().trim();
        if serde_json::from_str::<serde_json::Value>(potential_json).is_ok() {
            return Some(potential_json.to_string());
        }
    }

    // Second try: find JSON object pattern
    let brace_start = s.find('{')?;
    let mut depth = 0;
    let mut end = brace_start;

    for (i, c) in s[brace_start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    end = brace_start + i + 1;
                    break;
                }
            }
            _ => {}
        }
    }

    if depth == 0 && end > brace_start {
        let potential_json = &s[brace_start..end];
        if serde_json::from_str::<serde_json::Value>(potential_json).is_ok() {
            return Some(potential_json.to_string());
        }
    }

    None
}
