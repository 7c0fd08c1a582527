pub mod dates;
mod reducer;
mod types;

pub use reducer::PlanAction;
pub use types::{
    Activity, BudgetLevel, Category, ItineraryDay, PlanLimits, TransportMode, TripPlan, TripStyle,
};
