//! Prompt construction for the generation call.

use crate::model::TripRequest;

/// Fixed persona instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert travel guide for India known for \
creating deeply culturally immersive and practical itineraries. You know hidden gems and \
logistic realities.";

/// Build the user prompt embedding all five request fields.
pub fn build_prompt(request: &TripRequest) -> String {
    format!(
        "Plan a detailed {duration}-day trip to {destination}, India.\n\
         Budget Level: {budget}.\n\
         Traveler Group: {travelers}.\n\
         Primary Interest: {interest}.\n\
         \n\
         Provide a day-by-day itinerary. Be specific about locations in {destination}.\n\
         Include a packing list relevant to the weather and culture.\n\
         Include specific cultural tips for this region of India.\n\
         Include must-try local food items.",
        duration = request.duration,
        destination = request.destination,
        budget = request.budget.label(),
        travelers = request.travelers,
        interest = request.interest.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Budget, Interest};

    #[test]
    fn test_prompt_contains_all_request_fields() {
        let request = TripRequest {
            destination: "Goa".to_string(),
            duration: 5,
            budget: Budget::Luxury,
            interest: Interest::Relaxing,
            travelers: "Couple".to_string(),
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("5-day trip to Goa"));
        assert!(prompt.contains("Budget Level: Luxury"));
        assert!(prompt.contains("Traveler Group: Couple"));
        assert!(prompt.contains("Primary Interest: Relaxing"));
        // Destination repeats in the location-specificity line
        assert!(prompt.contains("locations in Goa"));
    }
}
