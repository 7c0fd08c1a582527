//! Drives one generation attempt at a time against the configured
//! provider and owns the idle/generating/success/failed lifecycle.

use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::parser::{parse_itinerary, ItineraryParseError};
use super::request::ItineraryRequest;
use crate::plan::{PlanAction, TripPlan};
use crate::provider::Generator;

/// Shape violations and transport failures read the same to the user;
/// the split only matters for logs.
pub const SHAPE_ERROR_MESSAGE: &str = "failed to generate itinerary";
pub const TRANSPORT_ERROR_MESSAGE: &str = "an error occurred while generating the itinerary";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Generating,
    Success,
    Failed,
}

#[derive(Debug)]
pub struct GenerationOrchestrator {
    phase: GenerationPhase,
    error: Option<String>,
}

impl Default for GenerationOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationOrchestrator {
    pub fn new() -> Self {
        Self {
            phase: GenerationPhase::Idle,
            error: None,
        }
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Run one generation attempt: exactly one provider call, ending in
    /// `Success` or `Failed`. A plan without dates is a no-op. The `&mut`
    /// receivers make a second in-flight call unrepresentable, and the
    /// plan is only touched after the provider call resolves, so dropping
    /// the future mid-flight leaves it untouched.
    pub async fn generate(
        &mut self,
        plan: &mut TripPlan,
        generator: &dyn Generator,
        timeout: Duration,
    ) -> GenerationPhase {
        if !plan.has_dates() {
            debug!("Skipping generation: trip dates are not set");
            return self.phase;
        }

        let request = match ItineraryRequest::from_plan(plan) {
            Ok(request) => request,
            Err(e) => {
                // Unreachable while has_dates() guards above, but never
                // leave a started attempt without a terminal state
                self.fail(TRANSPORT_ERROR_MESSAGE, &e.to_string());
                return self.phase;
            }
        };

        self.error = None;
        self.phase = GenerationPhase::Generating;

        let attempt = Uuid::new_v4();
        info!(
            "Generation attempt {} for {} ({} days, {} budget)",
            attempt, request.destination, request.number_of_days, request.budget_level
        );

        let output = match generator.generate(&request.prompt(), timeout).await {
            Ok(output) => output,
            Err(e) => {
                warn!("Attempt {} provider call failed: {}", attempt, e);
                self.fail(TRANSPORT_ERROR_MESSAGE, &e.to_string());
                return self.phase;
            }
        };

        debug!(
            "Attempt {} returned {} bytes in {:?}",
            attempt,
            output.stdout.len(),
            output.duration
        );

        match parse_itinerary(&output.stdout) {
            Ok(days) => {
                info!("Attempt {} produced a {}-day itinerary", attempt, days.len());
                // Infallible action; replaces wholesale
                let _ = plan.apply(PlanAction::ReplaceItinerary(days));
                self.phase = GenerationPhase::Success;
            }
            Err(ItineraryParseError::UnexpectedShape) => {
                warn!("Attempt {} response did not match the contract", attempt);
                self.fail(SHAPE_ERROR_MESSAGE, "unexpected shape");
            }
            Err(ItineraryParseError::NoJsonPayload) => {
                warn!("Attempt {} response contained no JSON payload", attempt);
                self.fail(TRANSPORT_ERROR_MESSAGE, "no JSON payload");
            }
        }

        self.phase
    }

    fn fail(&mut self, message: &str, detail: &str) {
        debug!("Generation failed ({}): {}", message, detail);
        self.error = Some(message.to_string());
        self.phase = GenerationPhase::Failed;
    }
}
