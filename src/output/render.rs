use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OutputError;
use crate::plan::dates::format_date_range;
use crate::plan::TripPlan;

/// Render the generated itinerary as markdown
pub fn render_markdown(plan: &TripPlan) -> String {
    let mut content = String::new();

    content.push_str(&format!(
        "# {}-Day {} Trip to {}\n\n",
        plan.number_of_days,
        plan.styles_label(),
        plan.destination
    ));

    // Trip summary table
    content.push_str("| Detail | Value |\n");
    content.push_str("|--------|-------|\n");
    if let (Some(start), Some(end)) = (plan.start_date, plan.end_date) {
        content.push_str(&format!("| Dates | {} |\n", format_date_range(start, end)));
    }
    content.push_str(&format!("| Days | {} |\n", plan.number_of_days));
    content.push_str(&format!("| Budget | {} |\n", plan.budget_level));
    if let Some(arrival) = &plan.arrival_time {
        content.push_str(&format!("| Arrival | {} |\n", arrival));
    }
    if let Some(departure) = &plan.departure_time {
        content.push_str(&format!("| Departure | {} |\n", departure));
    }
    if !plan.interests.is_empty() {
        content.push_str(&format!("| Interests | {} |\n", plan.interests.join(", ")));
    }
    content.push_str("\n---\n\n");

    if plan.itinerary.is_empty() {
        content.push_str("*No itinerary generated yet*\n");
        return content;
    }

    for day in &plan.itinerary {
        content.push_str(&format!(
            "## Day {}: {}\n\n",
            day.day,
            day.date.format("%A, %B %-d, %Y")
        ));

        for activity in &day.activities {
            content.push_str(&format!("### [{}] {}\n\n", activity.time, activity.title));

            if let Some(category) = &activity.category {
                content.push_str(&format!("- **Category:** {}\n", category));
            }
            if let Some(location) = &activity.location {
                content.push_str(&format!("- **Location:** {}\n", location));
            }
            if let Some(cost) = &activity.cost {
                content.push_str(&format!("- **Cost:** {}\n", cost));
            }

            content.push_str(&format!("\n{}\n\n", activity.description));
        }

        content.push_str("---\n\n");
    }

    content
}

/// Write the rendered itinerary plus a JSON dump for machine consumers.
/// Returns the directory everything landed in.
pub fn write_itinerary(output_dir: &Path, plan: &TripPlan) -> Result<PathBuf, OutputError> {
    let trip_dir = output_dir.join(trip_dir_name(plan));
    fs::create_dir_all(&trip_dir).map_err(OutputError::CreateDir)?;

    let markdown = render_markdown(plan);
    fs::write(trip_dir.join("itinerary.md"), markdown).map_err(OutputError::WriteItinerary)?;

    let json = serde_json::to_string_pretty(&plan.itinerary)?;
    fs::write(trip_dir.join("itinerary.json"), json).map_err(OutputError::WriteItinerary)?;

    Ok(trip_dir)
}

/// `2025-06-01-paris-france` for a June 2025 Paris trip; deterministic so
/// regenerating overwrites rather than scattering directories
fn trip_dir_name(plan: &TripPlan) -> String {
    let slug: String = plan
        .destination
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-').replace("--", "-");

    match plan.start_date {
        Some(start) => format!("{}-{}", start.format("%Y-%m-%d"), slug),
        None => slug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{Activity, Category, ItineraryDay, PlanAction};
    use chrono::NaiveDate;

    fn rendered_plan() -> TripPlan {
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
        plan.apply(PlanAction::SetStyles(vec!["culture".parse().unwrap()]))
            .unwrap();
        plan.apply(PlanAction::ReplaceItinerary(vec![ItineraryDay {
            day: 1,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            activities: vec![Activity {
                time: "09:00 AM".to_string(),
                title: "Louvre".to_string(),
                description: "Museum visit".to_string(),
                location: Some("Rue de Rivoli".to_string()),
                cost: Some("$20 USD".to_string()),
                category: Some(Category::Activity),
            }],
        }]))
        .unwrap();
        plan
    }

    #[test]
    fn test_render_includes_summary_and_days() {
        let markdown = render_markdown(&rendered_plan());
        assert!(markdown.contains("# 3-Day culture Trip to Paris, France"));
        assert!(markdown.contains("| Dates | June 1 - 3, 2025 |"));
        assert!(markdown.contains("## Day 1: Sunday, June 1, 2025"));
        assert!(markdown.contains("### [09:00 AM] Louvre"));
        assert!(markdown.contains("- **Location:** Rue de Rivoli"));
    }

    #[test]
    fn test_render_placeholder_without_itinerary() {
        let markdown = render_markdown(&TripPlan::default());
        assert!(markdown.contains("*No itinerary generated yet*"));
    }

    #[test]
    fn test_write_creates_md_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let trip_dir = write_itinerary(dir.path(), &rendered_plan()).unwrap();

        assert!(trip_dir.ends_with("2025-06-01-paris-france"));
        assert!(trip_dir.join("itinerary.md").exists());

        let json = std::fs::read_to_string(trip_dir.join("itinerary.json")).unwrap();
        let days: Vec<ItineraryDay> = serde_json::from_str(&json).unwrap();
        assert_eq!(days.len(), 1);
    }
}
