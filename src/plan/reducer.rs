//! Plan mutation as a reducer: every state change is one `PlanAction`
//! applied atomically, so invariants like "both dates or neither" and the
//! style cardinality cap live in a single place.

use chrono::NaiveDate;

use super::dates::inclusive_day_count;
use super::types::{BudgetLevel, ItineraryDay, TripPlan, TripStyle};
use crate::error::PlanError;

#[derive(Debug, Clone)]
pub enum PlanAction {
    /// Stored verbatim; empty means "incomplete", not invalid
    SetDestination(String),

    /// Both dates present: store all four fields and recompute the day
    /// count. Either absent: clear dates, times, and day count together.
    SetDates {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        arrival_time: Option<String>,
        departure_time: Option<String>,
    },

    SetStyles(Vec<TripStyle>),

    /// Add or remove a single style (wizard multi-select)
    ToggleStyle(TripStyle),

    SetBudget(BudgetLevel),

    SetInterests(Vec<String>),

    /// Wholesale replacement; the orchestrator never patches days in place
    ReplaceItinerary(Vec<ItineraryDay>),

    ClearItinerary,
}

impl TripPlan {
    /// Apply one action. On error the plan is left exactly as it was.
    pub fn apply(&mut self, action: PlanAction) -> Result<(), PlanError> {
        match action {
            PlanAction::SetDestination(destination) => {
                self.destination = destination;
            }

            PlanAction::SetDates {
                start,
                end,
                arrival_time,
                departure_time,
            } => match (start, end) {
                (Some(start), Some(end)) => {
                    self.start_date = Some(start);
                    self.end_date = Some(end);
                    self.arrival_time = arrival_time;
                    self.departure_time = departure_time;
                    self.number_of_days = inclusive_day_count(start, end);
                }
                _ => {
                    self.start_date = None;
                    self.end_date = None;
                    self.arrival_time = None;
                    self.departure_time = None;
                    self.number_of_days = 0;
                }
            },

            PlanAction::SetStyles(styles) => {
                let styles = dedup_styles(styles);
                if styles.len() > self.limits.max_styles {
                    return Err(PlanError::StyleLimit {
                        max: self.limits.max_styles,
                    });
                }
                self.trip_styles = styles;
            }

            PlanAction::ToggleStyle(style) => {
                if let Some(pos) = self.trip_styles.iter().position(|s| *s == style) {
                    self.trip_styles.remove(pos);
                } else {
                    if self.trip_styles.len() >= self.limits.max_styles {
                        return Err(PlanError::StyleLimit {
                            max: self.limits.max_styles,
                        });
                    }
                    self.trip_styles.push(style);
                }
            }

            PlanAction::SetBudget(level) => {
                self.budget_level = level;
            }

            PlanAction::SetInterests(interests) => {
                self.interests = interests;
            }

            PlanAction::ReplaceItinerary(days) => {
                self.itinerary = days;
            }

            PlanAction::ClearItinerary => {
                self.itinerary.clear();
            }
        }

        Ok(())
    }
}

fn dedup_styles(styles: Vec<TripStyle>) -> Vec<TripStyle> {
    let mut seen = Vec::with_capacity(styles.len());
    for style in styles {
        if !seen.contains(&style) {
            seen.push(style);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_destination_stored_verbatim() {
        let mut plan = TripPlan::default();
        plan.apply(PlanAction::SetDestination("  Paris ".to_string()))
            .unwrap();
        assert_eq!(plan.destination, "  Paris ");
    }

    #[test]
    fn test_set_dates_recomputes_day_count() {
        let mut plan = TripPlan::default();
        plan.apply(PlanAction::SetDates {
            start: Some(d(2025, 6, 1)),
            end: Some(d(2025, 6, 3)),
            arrival_time: Some("14:00".to_string()),
            departure_time: Some("10:00".to_string()),
        })
        .unwrap();

        assert_eq!(plan.number_of_days, 3);
        assert_eq!(plan.arrival_time.as_deref(), Some("14:00"));
    }

    #[test]
    fn test_clearing_either_date_clears_everything() {
        let mut plan = TripPlan::default();
        plan.apply(PlanAction::SetDates {
            start: Some(d(2025, 6, 1)),
            end: Some(d(2025, 6, 3)),
            arrival_time: Some("14:00".to_string()),
            departure_time: None,
        })
        .unwrap();

        plan.apply(PlanAction::SetDates {
            start: Some(d(2025, 6, 1)),
            end: None,
            arrival_time: Some("09:00".to_string()),
            departure_time: None,
        })
        .unwrap();

        assert_eq!(plan.start_date, None);
        assert_eq!(plan.end_date, None);
        assert_eq!(plan.arrival_time, None);
        assert_eq!(plan.departure_time, None);
        assert_eq!(plan.number_of_days, 0);
    }

    #[test]
    fn test_style_limit_rejects_and_leaves_set_unchanged() {
        let mut plan = TripPlan::default();
        plan.apply(PlanAction::SetStyles(vec![
            TripStyle::Culture,
            TripStyle::Family,
            TripStyle::Romance,
        ]))
        .unwrap();

        let err = plan
            .apply(PlanAction::ToggleStyle(TripStyle::Adventure))
            .unwrap_err();
        assert_eq!(err, PlanError::StyleLimit { max: 3 });
        assert_eq!(
            plan.trip_styles,
            vec![TripStyle::Culture, TripStyle::Family, TripStyle::Romance]
        );
    }

    #[test]
    fn test_toggle_removes_selected_style() {
        let mut plan = TripPlan::default();
        plan.apply(PlanAction::ToggleStyle(TripStyle::Culture)).unwrap();
        plan.apply(PlanAction::ToggleStyle(TripStyle::Culture)).unwrap();
        assert!(plan.trip_styles.is_empty());
    }

    #[test]
    fn test_set_styles_over_limit_rejected() {
        let mut plan = TripPlan::default();
        let err = plan
            .apply(PlanAction::SetStyles(vec![
                TripStyle::Culture,
                TripStyle::Family,
                TripStyle::Romance,
                TripStyle::Nightlife,
            ]))
            .unwrap_err();
        assert_eq!(err, PlanError::StyleLimit { max: 3 });
        assert!(plan.trip_styles.is_empty());
    }

    #[test]
    fn test_configured_limit_respected() {
        use super::super::types::PlanLimits;

        let mut plan = TripPlan::new(PlanLimits { max_styles: 1 });
        plan.apply(PlanAction::ToggleStyle(TripStyle::Culture)).unwrap();
        let err = plan
            .apply(PlanAction::ToggleStyle(TripStyle::Family))
            .unwrap_err();
        assert_eq!(err, PlanError::StyleLimit { max: 1 });
    }

    #[test]
    fn test_set_styles_dedups() {
        let mut plan = TripPlan::default();
        plan.apply(PlanAction::SetStyles(vec![
            TripStyle::Culture,
            TripStyle::Culture,
            TripStyle::Family,
        ]))
        .unwrap();
        assert_eq!(plan.trip_styles, vec![TripStyle::Culture, TripStyle::Family]);
    }

    #[test]
    fn test_itinerary_wholesale_replacement() {
        let mut plan = TripPlan::default();
        let day = ItineraryDay {
            day: 1,
            date: d(2025, 6, 1),
            activities: Vec::new(),
        };
        plan.apply(PlanAction::ReplaceItinerary(vec![day.clone()]))
            .unwrap();
        assert_eq!(plan.itinerary.len(), 1);

        plan.apply(PlanAction::ClearItinerary).unwrap();
        assert!(plan.itinerary.is_empty());
    }
}
