//! Three-step form sub-wizard accumulating the trip request.

use crate::model::{Budget, Interest, TripRequest, MAX_DURATION, MIN_DURATION};

pub const STEP_COUNT: u8 = 3;

/// Typed field-update message. Each form edit is one of these applied
/// through `FormState::apply`; there is no keyed generic update.
#[derive(Debug, Clone)]
pub enum FieldUpdate {
    Destination(String),
    Duration(u8),
    Budget(Budget),
    Interest(Interest),
    Travelers(String),
}

/// Outcome of pressing Next on the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Required input missing; the step did not change.
    Blocked,
    /// Moved to the following step.
    Advanced,
    /// Final step confirmed; carries the completed request.
    Submitted(TripRequest),
}

/// Current step index (1-based) plus the accumulating request.
#[derive(Debug, Clone)]
pub struct FormState {
    pub step: u8,
    pub request: TripRequest,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            step: 1,
            request: TripRequest::default(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Destination(value) => self.request.destination = value,
            FieldUpdate::Duration(days) => {
                self.request.duration = days.clamp(MIN_DURATION, MAX_DURATION)
            }
            FieldUpdate::Budget(budget) => self.request.budget = budget,
            FieldUpdate::Interest(interest) => self.request.interest = interest,
            FieldUpdate::Travelers(group) => self.request.travelers = group,
        }
    }

    /// Whether Next is currently enabled. Only step 1 has a required
    /// field; later steps always carry defaults.
    pub fn can_advance(&self) -> bool {
        self.step != 1 || !self.request.destination.is_empty()
    }

    /// Advance a step, or submit from the final step.
    pub fn next(&mut self) -> StepOutcome {
        if !self.can_advance() {
            return StepOutcome::Blocked;
        }
        if self.step < STEP_COUNT {
            self.step += 1;
            StepOutcome::Advanced
        } else {
            StepOutcome::Submitted(self.request.clone())
        }
    }
}
