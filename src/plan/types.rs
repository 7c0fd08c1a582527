use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Session-level caps, sourced from config at session creation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanLimits {
    pub max_styles: usize,
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self { max_styles: 3 }
    }
}

/// All user selections plus the generated itinerary. One wizard session
/// owns exactly one plan; mutation goes through [`TripPlan::apply`] so the
/// both-dates-or-neither rule holds in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripPlan {
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub number_of_days: u32,
    pub trip_styles: Vec<TripStyle>,
    pub budget_level: BudgetLevel,
    pub interests: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,

    #[serde(skip)]
    pub limits: PlanLimits,
}

impl TripPlan {
    pub fn new(limits: PlanLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn has_dates(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    /// Comma-joined style labels for prompts and rendering
    pub fn styles_label(&self) -> String {
        self.trip_styles
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryDay {
    pub day: u32,
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub time: String,

    pub title: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_category"
    )]
    pub category: Option<Category>,
}

/// Generators occasionally invent category labels; a tag outside the fixed
/// set degrades to no category instead of failing the whole response.
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStyle {
    Adventure,
    Leisure,
    Romance,
    Culture,
    Family,
    Nightlife,
}

impl TripStyle {
    pub const ALL: [TripStyle; 6] = [
        TripStyle::Adventure,
        TripStyle::Leisure,
        TripStyle::Romance,
        TripStyle::Culture,
        TripStyle::Family,
        TripStyle::Nightlife,
    ];
}

impl std::fmt::Display for TripStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TripStyle::Adventure => "adventure",
            TripStyle::Leisure => "leisure",
            TripStyle::Romance => "romance",
            TripStyle::Culture => "culture",
            TripStyle::Family => "family",
            TripStyle::Nightlife => "nightlife",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for TripStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "adventure" => Ok(TripStyle::Adventure),
            "leisure" => Ok(TripStyle::Leisure),
            "romance" => Ok(TripStyle::Romance),
            "culture" => Ok(TripStyle::Culture),
            "family" => Ok(TripStyle::Family),
            "nightlife" => Ok(TripStyle::Nightlife),
            _ => Err(format!("Unknown trip style: {}", s)),
        }
    }
}

/// Ordered cheapest-first; the ordering feeds cost guidance in the
/// generation prompt, not step gating.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetLevel {
    UltraBudget,
    SmartBudget,
    #[default]
    Moderate,
    Luxury,
}

impl BudgetLevel {
    pub const ALL: [BudgetLevel; 4] = [
        BudgetLevel::UltraBudget,
        BudgetLevel::SmartBudget,
        BudgetLevel::Moderate,
        BudgetLevel::Luxury,
    ];
}

impl std::fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BudgetLevel::UltraBudget => "ultra-budget",
            BudgetLevel::SmartBudget => "smart-budget",
            BudgetLevel::Moderate => "moderate",
            BudgetLevel::Luxury => "luxury",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for BudgetLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ultra-budget" | "ultra" => Ok(BudgetLevel::UltraBudget),
            "smart-budget" | "smart" | "budget" => Ok(BudgetLevel::SmartBudget),
            "moderate" => Ok(BudgetLevel::Moderate),
            "luxury" => Ok(BudgetLevel::Luxury),
            _ => Err(format!("Unknown budget level: {}", s)),
        }
    }
}

/// Activity tag set. Transportation carries an optional sub-mode and
/// serializes as `transportation-<mode>` (bare `transportation` on input
/// means mode unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Activity,
    Transportation(Option<TransportMode>),
    Accommodation,
    FreeTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
    Car,
    Ferry,
    Walk,
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TransportMode::Flight => "flight",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Car => "car",
            TransportMode::Ferry => "ferry",
            TransportMode::Walk => "walk",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flight" => Ok(TransportMode::Flight),
            "train" => Ok(TransportMode::Train),
            "bus" => Ok(TransportMode::Bus),
            "car" => Ok(TransportMode::Car),
            "ferry" => Ok(TransportMode::Ferry),
            "walk" => Ok(TransportMode::Walk),
            _ => Err(format!("Unknown transport mode: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Food => write!(f, "food"),
            Category::Activity => write!(f, "activity"),
            Category::Transportation(None) => write!(f, "transportation"),
            Category::Transportation(Some(mode)) => write!(f, "transportation-{}", mode),
            Category::Accommodation => write!(f, "accommodation"),
            Category::FreeTime => write!(f, "free-time"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "activity" => Ok(Category::Activity),
            "accommodation" => Ok(Category::Accommodation),
            "free-time" => Ok(Category::FreeTime),
            "transportation" => Ok(Category::Transportation(None)),
            other => match other.strip_prefix("transportation-") {
                Some(mode) => Ok(Category::Transportation(Some(mode.parse()?))),
                None => Err(format!("Unknown category: {}", s)),
            },
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
