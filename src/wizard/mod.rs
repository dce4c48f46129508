//! Wizard controller: the linear state machine driving which view is
//! shown and owning the in-memory request and itinerary.
//!
//! Pure state — no rendering, no IO. The TUI feeds it events and acts
//! on the returned effect; failure surfaces as a one-shot notice the
//! presentation layer drains.

mod form;

pub use form::{FieldUpdate, FormState, StepOutcome, STEP_COUNT};

use crate::model::{TripItinerary, TripRequest};
use tracing::{debug, error};

/// Which view is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardState {
    #[default]
    Hero,
    Form,
    Loading,
    Result,
}

#[derive(Debug, Clone)]
pub enum WizardEvent {
    /// Hero → Form, with a fresh sub-wizard.
    Start,
    /// Form → Hero, discarding the in-progress request.
    Back,
    /// Final form step confirmed; Form → Loading.
    Submit(TripRequest),
    /// Generation succeeded; Loading → Result.
    Generated(TripItinerary),
    /// Generation failed; Loading → Form, request preserved.
    Failed(String),
    /// Result → Hero, discarding itinerary and request.
    Reset,
}

/// Side effect the caller must perform after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue exactly one generation call for this request.
    Generate(TripRequest),
}

pub struct Wizard {
    state: WizardState,
    form: FormState,
    itinerary: Option<TripItinerary>,
    notice: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::Hero,
            form: FormState::new(),
            itinerary: None,
            notice: None,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn itinerary(&self) -> Option<&TripItinerary> {
        self.itinerary.as_ref()
    }

    /// Drain the pending failure notice, if any. One notice per failed
    /// submission; draining clears it.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Apply an event. Events that are invalid in the current state are
    /// ignored; in particular a submit while loading is dropped, so a
    /// second generation can never start mid-flight.
    pub fn handle(&mut self, event: WizardEvent) -> Option<Effect> {
        match (self.state, event) {
            (WizardState::Hero, WizardEvent::Start) => {
                self.form = FormState::new();
                self.state = WizardState::Form;
                None
            }
            (WizardState::Form, WizardEvent::Back) => {
                self.form = FormState::new();
                self.state = WizardState::Hero;
                None
            }
            (WizardState::Form, WizardEvent::Submit(request)) => {
                debug!(destination = %request.destination, days = request.duration, "Submitting trip request");
                self.state = WizardState::Loading;
                Some(Effect::Generate(request))
            }
            (WizardState::Loading, WizardEvent::Generated(itinerary)) => {
                self.itinerary = Some(itinerary);
                self.state = WizardState::Result;
                None
            }
            (WizardState::Loading, WizardEvent::Failed(message)) => {
                error!(%message, "Itinerary generation failed");
                self.notice = Some(message);
                self.state = WizardState::Form;
                None
            }
            (WizardState::Result, WizardEvent::Reset) => {
                self.itinerary = None;
                self.form = FormState::new();
                self.state = WizardState::Hero;
                None
            }
            (state, event) => {
                debug!(?state, ?event, "Ignoring event in current state");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Activity, ActivityKind, Budget, DayPlan, Interest};

    fn goa_request() -> TripRequest {
        TripRequest {
            destination: "Goa".to_string(),
            duration: 5,
            budget: Budget::Luxury,
            interest: Interest::Relaxing,
            travelers: "Couple".to_string(),
        }
    }

    fn sample_itinerary(day_count: u32) -> TripItinerary {
        TripItinerary {
            trip_title: "Goa Unwound".to_string(),
            summary: "Slow days by the sea".to_string(),
            days: (1..=day_count)
                .map(|n| DayPlan {
                    day_number: n,
                    theme: format!("Day {n}"),
                    activities: vec![Activity {
                        time: "Morning".to_string(),
                        activity_name: "Beach walk".to_string(),
                        description: "Walk along Palolem".to_string(),
                        location: "Palolem".to_string(),
                        estimated_cost: "Free".to_string(),
                        kind: ActivityKind::Relaxation,
                    }],
                })
                .collect(),
            packing_list: vec!["Sunscreen".to_string()],
            cultural_tips: vec![],
            local_food_must_try: vec!["Fish curry rice".to_string()],
        }
    }

    #[test]
    fn test_submit_yields_one_generate_effect() {
        let mut wizard = Wizard::new();
        wizard.handle(WizardEvent::Start);
        assert_eq!(wizard.state(), WizardState::Form);

        let effect = wizard.handle(WizardEvent::Submit(goa_request()));
        assert_eq!(effect, Some(Effect::Generate(goa_request())));
        assert_eq!(wizard.state(), WizardState::Loading);
    }

    #[test]
    fn test_loading_is_not_reentrant() {
        let mut wizard = Wizard::new();
        wizard.handle(WizardEvent::Start);
        wizard.handle(WizardEvent::Submit(goa_request()));
        assert_eq!(wizard.state(), WizardState::Loading);

        // A second submit while loading produces no effect
        let effect = wizard.handle(WizardEvent::Submit(goa_request()));
        assert_eq!(effect, None);
        assert_eq!(wizard.state(), WizardState::Loading);
    }

    #[test]
    fn test_success_reaches_result_with_generated_day_count() {
        let mut wizard = Wizard::new();
        wizard.handle(WizardEvent::Start);
        wizard.handle(WizardEvent::Submit(goa_request()));

        // Generator decides the day count; 7 days for a 5-day ask is
        // rendered as-is.
        wizard.handle(WizardEvent::Generated(sample_itinerary(7)));
        assert_eq!(wizard.state(), WizardState::Result);
        assert_eq!(wizard.itinerary().unwrap().days.len(), 7);
    }

    #[test]
    fn test_failure_returns_to_form_with_request_intact() {
        let mut wizard = Wizard::new();
        wizard.handle(WizardEvent::Start);
        wizard.form_mut().apply(FieldUpdate::Destination("Goa".to_string()));
        wizard.form_mut().apply(FieldUpdate::Duration(5));

        wizard.handle(WizardEvent::Submit(goa_request()));
        wizard.handle(WizardEvent::Failed("Model returned no usable text".to_string()));

        assert_eq!(wizard.state(), WizardState::Form);
        assert_eq!(wizard.form().request.destination, "Goa");
        assert_eq!(wizard.form().request.duration, 5);

        // Exactly one notice per failed submission
        assert_eq!(
            wizard.take_notice().as_deref(),
            Some("Model returned no usable text")
        );
        assert_eq!(wizard.take_notice(), None);
    }

    #[test]
    fn test_reset_discards_session_and_restart_uses_defaults() {
        let mut wizard = Wizard::new();
        wizard.handle(WizardEvent::Start);
        wizard.form_mut().apply(FieldUpdate::Destination("Goa".to_string()));
        wizard.handle(WizardEvent::Submit(goa_request()));
        wizard.handle(WizardEvent::Generated(sample_itinerary(5)));

        wizard.handle(WizardEvent::Reset);
        assert_eq!(wizard.state(), WizardState::Hero);
        assert!(wizard.itinerary().is_none());

        wizard.handle(WizardEvent::Start);
        assert_eq!(wizard.form().request, TripRequest::default());
        assert_eq!(wizard.form().step, 1);
    }

    #[test]
    fn test_back_from_form_discards_progress() {
        let mut wizard = Wizard::new();
        wizard.handle(WizardEvent::Start);
        wizard.form_mut().apply(FieldUpdate::Destination("Ladakh".to_string()));
        wizard.handle(WizardEvent::Back);
        assert_eq!(wizard.state(), WizardState::Hero);

        wizard.handle(WizardEvent::Start);
        assert_eq!(wizard.form().request.destination, "");
    }

    #[test]
    fn test_invalid_events_are_ignored() {
        let mut wizard = Wizard::new();
        assert!(wizard.handle(WizardEvent::Reset).is_none());
        assert_eq!(wizard.state(), WizardState::Hero);
        assert!(wizard
            .handle(WizardEvent::Generated(sample_itinerary(1)))
            .is_none());
        assert_eq!(wizard.state(), WizardState::Hero);
    }
}
