//! Pure transform from a [`TripPlan`] into the generation request and its
//! prompt text. Nothing here talks to a provider.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::RequestError;
use crate::plan::dates::trip_dates;
use crate::plan::{BudgetLevel, TripPlan, TripStyle};

/// Everything the generation collaborator is told about the trip
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryRequest {
    pub destination: String,
    pub number_of_days: u32,
    pub trip_styles: Vec<TripStyle>,
    pub budget_level: BudgetLevel,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,

    pub interests: Vec<String>,
}

/// Fixed framing: the exact response schema, and nothing but JSON.
/// Parsing still tolerates fenced output from generators that ignore the
/// last instruction.
const SYSTEM_FRAMING: &str = r#"You are a knowledgeable travel assistant that creates detailed travel itineraries. Make recommendations based on the location, duration, trip styles, and budget level. Structure your response as a JSON object that follows this exact format:
{
  "itinerary": [
    {
      "day": 1,
      "date": "YYYY-MM-DD",
      "activities": [
        {
          "time": "08:00 AM",
          "title": "Activity title",
          "description": "Detailed description",
          "location": "Location name",
          "cost": "$25 USD",
          "category": "food"
        }
      ]
    }
  ]
}
"location" and "cost" are optional. "category", when present, must be one of: food, activity, accommodation, free-time, transportation, transportation-flight, transportation-train, transportation-bus, transportation-car, transportation-ferry, transportation-walk. Respond with the JSON object only: no prose before or after it, and no markdown code fences."#;

impl ItineraryRequest {
    /// Fails only when the plan has no date range; every other field has a
    /// usable zero value.
    pub fn from_plan(plan: &TripPlan) -> Result<Self, RequestError> {
        let (start_date, end_date) = match (plan.start_date, plan.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(RequestError::DatesMissing),
        };

        Ok(Self {
            destination: plan.destination.clone(),
            number_of_days: plan.number_of_days,
            trip_styles: plan.trip_styles.clone(),
            budget_level: plan.budget_level,
            start_date,
            end_date,
            arrival_time: plan.arrival_time.clone(),
            departure_time: plan.departure_time.clone(),
            interests: plan.interests.clone(),
        })
    }

    /// Full prompt for single-turn CLI providers: framing plus user turn
    pub fn prompt(&self) -> String {
        format!("{}\n\n{}", SYSTEM_FRAMING, self.user_turn())
    }

    /// The user-facing half of the prompt
    pub fn user_turn(&self) -> String {
        let styles = self
            .trip_styles
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let mut turn = format!(
            "Create a detailed {}-day itinerary for a {} trip to {} with a {} budget. The trip starts on {} and ends on {}.",
            self.number_of_days,
            styles,
            self.destination,
            self.budget_level,
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d"),
        );

        // Spell the calendar out so day dates in the response line up
        let day_dates = trip_dates(self.start_date, self.number_of_days)
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect::<Vec<_>>()
            .join(", ");
        turn.push_str(&format!(" The day dates, in order, are: {}.", day_dates));

        if let Some(arrival) = &self.arrival_time {
            turn.push_str(&format!(
                " The traveler arrives at {} on the first day; schedule that day around the arrival.",
                arrival
            ));
        }

        if let Some(departure) = &self.departure_time {
            turn.push_str(&format!(
                " The traveler departs at {} on the last day; wind the last day down before departure.",
                departure
            ));
        }

        if !self.interests.is_empty() {
            turn.push_str(&format!(
                " The traveler is interested in: {}.",
                self.interests.join(", ")
            ));
        }

        match self.budget_level {
            BudgetLevel::UltraBudget => {
                turn.push_str(
                    " Keep costs to an absolute minimum: always prefer the cheapest viable option, even when it takes more time.",
                );
            }
            BudgetLevel::SmartBudget => {
                turn.push_str(
                    " Balance cost against time: pick budget-friendly options unless they waste a significant part of the day.",
                );
            }
            BudgetLevel::Moderate | BudgetLevel::Luxury => {}
        }

        turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanAction;

    fn paris_plan() -> TripPlan {
        let mut plan = TripPlan::default();
        plan.apply(PlanAction::SetDestination("Paris, France".to_string()))
            .unwrap();
        plan.apply(PlanAction::SetDates {
            start: NaiveDate::from_ymd_opt(2025, 6, 1),
            end: NaiveDate::from_ymd_opt(2025, 6, 3),
            arrival_time: None,
            departure_time: None,
        })
        .unwrap();
        plan.apply(PlanAction::ToggleStyle(TripStyle::Culture)).unwrap();
        plan.apply(PlanAction::SetBudget(BudgetLevel::Moderate)).unwrap();
        plan
    }

    #[test]
    fn test_request_requires_dates() {
        let plan = TripPlan::default();
        assert_eq!(
            ItineraryRequest::from_plan(&plan).unwrap_err(),
            RequestError::DatesMissing
        );
    }

    #[test]
    fn test_user_turn_mentions_trip_parameters() {
        let request = ItineraryRequest::from_plan(&paris_plan()).unwrap();
        let turn = request.user_turn();

        assert!(turn.contains("3-day"));
        assert!(turn.contains("Paris, France"));
        assert!(turn.contains("culture"));
        assert!(turn.contains("moderate"));
        assert!(turn.contains("2025-06-01"));
        assert!(turn.contains("2025-06-03"));
        assert!(turn.contains("2025-06-01, 2025-06-02, 2025-06-03"));
        // No interests sentence when none given
        assert!(!turn.contains("interested in"));
    }

    #[test]
    fn test_arrival_and_departure_hints() {
        let mut plan = paris_plan();
        plan.apply(PlanAction::SetDates {
            start: NaiveDate::from_ymd_opt(2025, 6, 1),
            end: NaiveDate::from_ymd_opt(2025, 6, 3),
            arrival_time: Some("14:30".to_string()),
            departure_time: Some("11:00".to_string()),
        })
        .unwrap();

        let turn = ItineraryRequest::from_plan(&plan).unwrap().user_turn();
        assert!(turn.contains("arrives at 14:30"));
        assert!(turn.contains("departs at 11:00"));
    }

    #[test]
    fn test_ultra_budget_guidance() {
        let mut plan = paris_plan();
        plan.apply(PlanAction::SetBudget(BudgetLevel::UltraBudget)).unwrap();

        let turn = ItineraryRequest::from_plan(&plan).unwrap().user_turn();
        assert!(turn.contains("cheapest viable option"));
    }

    #[test]
    fn test_smart_budget_guidance() {
        let mut plan = paris_plan();
        plan.apply(PlanAction::SetBudget(BudgetLevel::SmartBudget)).unwrap();

        let turn = ItineraryRequest::from_plan(&plan).unwrap().user_turn();
        assert!(turn.contains("Balance cost against time"));
    }

    #[test]
    fn test_prompt_carries_schema_framing() {
        let prompt = ItineraryRequest::from_plan(&paris_plan()).unwrap().prompt();
        assert!(prompt.contains("\"itinerary\""));
        assert!(prompt.contains("transportation-train"));
        assert!(prompt.contains("no markdown code fences"));
    }

    #[test]
    fn test_multiple_styles_listed() {
        let mut plan = paris_plan();
        plan.apply(PlanAction::ToggleStyle(TripStyle::Family)).unwrap();

        let turn = ItineraryRequest::from_plan(&plan).unwrap().user_turn();
        assert!(turn.contains("culture, family"));
    }
}
