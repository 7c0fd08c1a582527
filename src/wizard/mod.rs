//! Linear five-step wizard over a [`TripPlan`]: forward motion is gated on
//! the current step's inputs, backward motion never is.

use crate::plan::TripPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Destination,
    Dates,
    Style,
    Budget,
    Itinerary,
}

impl WizardStep {
    pub const COUNT: usize = 5;

    pub const ALL: [WizardStep; Self::COUNT] = [
        WizardStep::Destination,
        WizardStep::Dates,
        WizardStep::Style,
        WizardStep::Budget,
        WizardStep::Itinerary,
    ];

    pub fn index(self) -> usize {
        match self {
            WizardStep::Destination => 0,
            WizardStep::Dates => 1,
            WizardStep::Style => 2,
            WizardStep::Budget => 3,
            WizardStep::Itinerary => 4,
        }
    }

    pub fn from_index(index: usize) -> WizardStep {
        // Clamp above the terminal step rather than panic
        *Self::ALL.get(index).unwrap_or(&WizardStep::Itinerary)
    }

    pub fn is_terminal(self) -> bool {
        self == WizardStep::Itinerary
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Destination => "Destination",
            WizardStep::Dates => "Dates",
            WizardStep::Style => "Trip Style",
            WizardStep::Budget => "Budget",
            WizardStep::Itinerary => "Itinerary",
        }
    }
}

/// Whether the wizard may advance past `step` given the plan's state.
/// Destination counts as filled for any non-empty string, whitespace
/// included; trimming is the collaborator's business, not the gate's.
pub fn can_advance(plan: &TripPlan, step: WizardStep) -> bool {
    match step {
        WizardStep::Destination => !plan.destination.is_empty(),
        WizardStep::Dates => plan.has_dates(),
        WizardStep::Style => !plan.trip_styles.is_empty(),
        WizardStep::Budget => true,
        WizardStep::Itinerary => true,
    }
}

#[derive(Debug, Default)]
pub struct Wizard {
    step: usize,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        WizardStep::from_index(self.step)
    }

    /// Advance one step. No-op when the current step's gate fails or the
    /// wizard is already at the terminal step. Returns the step in effect
    /// afterwards.
    pub fn next(&mut self, plan: &TripPlan) -> WizardStep {
        if can_advance(plan, self.step()) {
            self.step = (self.step + 1).min(WizardStep::COUNT - 1);
        }
        self.step()
    }

    /// Step back, clamped at the first step. Never gated.
    pub fn prev(&mut self) -> WizardStep {
        self.step = self.step.saturating_sub(1);
        self.step()
    }

    /// Jump via a step indicator. Only already-completed steps (at or
    /// before the current one) are reachable; forward skips are refused.
    pub fn jump(&mut self, target: WizardStep) -> bool {
        if target.index() <= self.step {
            self.step = target.index();
            true
        } else {
            false
        }
    }
}
