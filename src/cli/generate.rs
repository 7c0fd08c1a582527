use std::time::Duration;

use tracing::{error, info};

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::PlanError;
use crate::generate::{GenerationOrchestrator, GenerationPhase, ItineraryRequest};
use crate::output::write_itinerary;
use crate::plan::{PlanAction, PlanLimits, TripPlan, TripStyle};
use crate::provider::create_runner;

pub async fn execute(args: GenerateArgs) -> anyhow::Result<()> {
    info!("Loading config from {:?}", args.config);
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(provider) = &args.provider {
        config.provider = provider.parse().map_err(anyhow::Error::msg)?;
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    config.validate()?;

    let plan = build_plan(&args, &config)?;
    let request = ItineraryRequest::from_plan(&plan)?;

    if args.dry_run {
        println!("{}", request.prompt());
        return Ok(());
    }

    let runner = create_runner(&config);
    let mut plan = plan;
    let mut orchestrator = GenerationOrchestrator::new();

    let phase = orchestrator
        .generate(
            &mut plan,
            runner.as_ref(),
            Duration::from_secs(config.timeout_sec),
        )
        .await;

    match phase {
        GenerationPhase::Success => {
            let trip_dir = write_itinerary(&config.output_dir, &plan)?;
            info!(
                "Generated a {}-day itinerary for {}",
                plan.itinerary.len(),
                plan.destination
            );
            println!("Itinerary written to {}", trip_dir.display());
            Ok(())
        }
        _ => {
            let message = orchestrator.error().unwrap_or("generation did not run");
            error!("{}", message);
            anyhow::bail!("{}", message)
        }
    }
}

/// Assemble the plan from flags. The CLI plays the date-selection
/// collaborator here, so the end >= start check lives at this boundary
/// rather than in the reducer.
fn build_plan(args: &GenerateArgs, config: &Config) -> anyhow::Result<TripPlan> {
    if args.end < args.start {
        return Err(PlanError::EndBeforeStart {
            start: args.start,
            end: args.end,
        }
        .into());
    }

    let styles = args
        .styles
        .iter()
        .map(|s| s.parse::<TripStyle>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(anyhow::Error::msg)?;
    if styles.is_empty() {
        anyhow::bail!("at least one --styles value is required");
    }

    let mut plan = TripPlan::new(PlanLimits {
        max_styles: config.max_trip_styles,
    });

    plan.apply(PlanAction::SetDestination(args.destination.clone()))?;
    plan.apply(PlanAction::SetDates {
        start: Some(args.start),
        end: Some(args.end),
        arrival_time: args.arrival.clone(),
        departure_time: args.departure.clone(),
    })?;
    plan.apply(PlanAction::SetStyles(styles))?;
    if let Some(budget) = &args.budget {
        plan.apply(PlanAction::SetBudget(
            budget.parse().map_err(anyhow::Error::msg)?,
        ))?;
    }
    plan.apply(PlanAction::SetInterests(args.interests.clone()))?;

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GenerateArgs {
        GenerateArgs {
            config: "tripsmith.yaml".into(),
            destination: "Paris, France".to_string(),
            start: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end: chrono::NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            arrival: None,
            departure: None,
            styles: vec!["culture".to_string()],
            budget: Some("moderate".to_string()),
            interests: vec![],
            provider: None,
            output_dir: None,
            dry_run: true,
        }
    }

    #[test]
    fn test_build_plan_from_flags() {
        let plan = build_plan(&args(), &Config::default()).unwrap();
        assert_eq!(plan.number_of_days, 3);
        assert_eq!(plan.trip_styles.len(), 1);
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let mut reversed = args();
        reversed.start = chrono::NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert!(build_plan(&reversed, &Config::default()).is_err());
    }

    #[test]
    fn test_unknown_style_rejected() {
        let mut bad = args();
        bad.styles = vec!["speedrunning".to_string()];
        assert!(build_plan(&bad, &Config::default()).is_err());
    }

    #[test]
    fn test_over_limit_styles_rejected() {
        let mut over = args();
        over.styles = vec![
            "culture".to_string(),
            "family".to_string(),
            "romance".to_string(),
            "nightlife".to_string(),
        ];
        assert!(build_plan(&over, &Config::default()).is_err());
    }
}
