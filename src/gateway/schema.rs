//! Response-shape constraint declared to the Gemini API.
//!
//! This mirrors `model::TripItinerary` in the restricted OpenAPI-style
//! schema dialect the generateContent endpoint accepts. The constraint
//! asks the model for machine-parseable structured output; adherence
//! beyond parseability is trusted, not verified.

use serde_json::{json, Value};

pub fn itinerary_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tripTitle": { "type": "STRING", "description": "A catchy title for the trip" },
            "summary": { "type": "STRING", "description": "A brief summary of what to expect" },
            "days": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "dayNumber": { "type": "INTEGER" },
                        "theme": { "type": "STRING", "description": "Theme for the day, e.g., 'Historical Walk'" },
                        "activities": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "time": { "type": "STRING", "description": "e.g., '09:00 AM' or 'Morning'" },
                                    "activityName": { "type": "STRING" },
                                    "description": { "type": "STRING" },
                                    "location": { "type": "STRING" },
                                    "estimatedCost": { "type": "STRING", "description": "Cost estimate in INR" },
                                    "type": {
                                        "type": "STRING",
                                        "enum": ["Food", "Sightseeing", "Travel", "Activity", "Relaxation"]
                                    }
                                },
                                "required": ["time", "activityName", "description", "location", "type", "estimatedCost"]
                            }
                        }
                    },
                    "required": ["dayNumber", "theme", "activities"]
                }
            },
            "packingList": { "type": "ARRAY", "items": { "type": "STRING" } },
            "culturalTips": { "type": "ARRAY", "items": { "type": "STRING" } },
            "localFoodMustTry": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["tripTitle", "summary", "days", "packingList", "culturalTips", "localFoodMustTry"]
    })
}
