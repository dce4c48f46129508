//! Core data model: the trip request assembled by the wizard and the
//! itinerary returned by the generator.
//!
//! Field names on the wire are camelCase to match the response schema
//! declared to the model (see `gateway::schema`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Budget tier for the trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Budget {
    Budget,
    #[default]
    #[serde(rename = "Mid-range")]
    MidRange,
    Luxury,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Budget, Budget::MidRange, Budget::Luxury];

    /// Canonical label used in prompts and serialization.
    pub fn label(&self) -> &'static str {
        match self {
            Budget::Budget => "Budget",
            Budget::MidRange => "Mid-range",
            Budget::Luxury => "Luxury",
        }
    }

    /// Short display label for the picker.
    pub fn display(&self) -> &'static str {
        match self {
            Budget::Budget => "₹ Economy",
            Budget::MidRange => "₹₹ Comfort",
            Budget::Luxury => "₹₹₹ Lavish",
        }
    }
}

/// Primary interest tag steering the itinerary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Interest {
    Adventure,
    Spiritual,
    Relaxing,
    #[default]
    Heritage,
    Foodie,
    Nature,
}

impl Interest {
    pub const ALL: [Interest; 6] = [
        Interest::Adventure,
        Interest::Spiritual,
        Interest::Relaxing,
        Interest::Heritage,
        Interest::Foodie,
        Interest::Nature,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interest::Adventure => "Adventure",
            Interest::Spiritual => "Spiritual",
            Interest::Relaxing => "Relaxing",
            Interest::Heritage => "Heritage",
            Interest::Foodie => "Foodie",
            Interest::Nature => "Nature",
        }
    }
}

/// Duration bounds for a trip, in days.
pub const MIN_DURATION: u8 = 1;
pub const MAX_DURATION: u8 = 15;

/// Traveler-group presets offered by the form. The field itself is
/// free-form text; these are only the quick choices.
pub const TRAVELER_GROUPS: [&str; 4] = ["Solo", "Couple", "Family", "Friends"];

/// Destination quick-picks shown under the destination input.
pub const QUICK_PICKS: [&str; 4] = ["Ladakh", "Varanasi", "Udaipur", "Goa"];

/// User-supplied preferences driving itinerary generation.
/// Immutable once submitted; the wizard owns it for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TripRequest {
    /// Region, city, or state within India. Must be non-empty before
    /// the form may advance past step 1.
    pub destination: String,
    /// Trip length in days, within [1, 15].
    pub duration: u8,
    pub budget: Budget,
    pub interest: Interest,
    /// Traveler-group label. The form restricts this to presets but the
    /// type accepts any text.
    pub travelers: String,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            destination: String::new(),
            duration: 3,
            budget: Budget::MidRange,
            interest: Interest::Heritage,
            travelers: "Couple".to_string(),
        }
    }
}

/// Kind tag on an activity. Wire field name is `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ActivityKind {
    Food,
    Sightseeing,
    Travel,
    Activity,
    Relaxation,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Food => "Food",
            ActivityKind::Sightseeing => "Sightseeing",
            ActivityKind::Travel => "Travel",
            ActivityKind::Activity => "Activity",
            ActivityKind::Relaxation => "Relaxation",
        }
    }

    /// Single-character marker used by the timeline view.
    pub fn marker(&self) -> &'static str {
        match self {
            ActivityKind::Food => "◆",
            ActivityKind::Sightseeing => "◉",
            ActivityKind::Travel => "➤",
            ActivityKind::Activity => "●",
            ActivityKind::Relaxation => "~",
        }
    }
}

/// One scheduled item within a day, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Time label such as "09:00 AM" or "Morning".
    pub time: String,
    pub activity_name: String,
    pub description: String,
    pub location: String,
    /// Currency-labeled text (e.g. "₹500 per person"), not a parsed amount.
    pub estimated_cost: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

/// One day of the itinerary. `day_number` is 1-based; the generator is
/// trusted to number days densely but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day_number: u32,
    pub theme: String,
    pub activities: Vec<Activity>,
}

/// The structured plan returned by the generator. Produced atomically;
/// never partially rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripItinerary {
    pub trip_title: String,
    pub summary: String,
    /// Chronological day order.
    pub days: Vec<DayPlan>,
    pub packing_list: Vec<String>,
    pub cultural_tips: Vec<String>,
    pub local_food_must_try: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req = TripRequest::default();
        assert_eq!(req.destination, "");
        assert_eq!(req.duration, 3);
        assert_eq!(req.budget, Budget::MidRange);
        assert_eq!(req.interest, Interest::Heritage);
        assert_eq!(req.travelers, "Couple");
    }

    #[test]
    fn test_budget_wire_labels() {
        assert_eq!(
            serde_json::to_string(&Budget::MidRange).unwrap(),
            "\"Mid-range\""
        );
        let parsed: Budget = serde_json::from_str("\"Luxury\"").unwrap();
        assert_eq!(parsed, Budget::Luxury);
    }

    #[test]
    fn test_activity_wire_field_names() {
        let json = r#"{
            "time": "Morning",
            "activityName": "Old City Walk",
            "description": "Guided walk through the lanes",
            "location": "Pink City",
            "estimatedCost": "₹300 per person",
            "type": "Sightseeing"
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.activity_name, "Old City Walk");
        assert_eq!(activity.kind, ActivityKind::Sightseeing);

        let back = serde_json::to_value(&activity).unwrap();
        assert!(back.get("activityName").is_some());
        assert!(back.get("estimatedCost").is_some());
        assert_eq!(back.get("type").unwrap(), "Sightseeing");
    }

    #[test]
    fn test_itinerary_wire_field_names() {
        let itinerary = TripItinerary {
            trip_title: "Goa Unwound".to_string(),
            summary: "Five slow days by the sea".to_string(),
            days: vec![],
            packing_list: vec!["Sunscreen".to_string()],
            cultural_tips: vec![],
            local_food_must_try: vec!["Fish thali".to_string()],
        };
        let value = serde_json::to_value(&itinerary).unwrap();
        assert!(value.get("tripTitle").is_some());
        assert!(value.get("packingList").is_some());
        assert!(value.get("localFoodMustTry").is_some());
    }
}
