//! Interactive wizard: plain line-oriented prompts over stdin. The flow
//! and gating live in `wizard`; this file is just the I/O shell around it.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cli::PlanArgs;
use crate::config::Config;
use crate::error::PlanError;
use crate::generate::{GenerationOrchestrator, GenerationPhase};
use crate::output::{render_markdown, write_itinerary};
use crate::plan::{BudgetLevel, PlanAction, PlanLimits, TripPlan, TripStyle};
use crate::provider::{create_runner, Generator};
use crate::search::{drive_debounced, CatalogSource, SearchSession};
use crate::wizard::{Wizard, WizardStep};

pub async fn execute(args: PlanArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    config.validate()?;

    let runner = create_runner(&config);
    let search = SearchSession::new(Arc::new(CatalogSource), &config.search);
    let timeout = Duration::from_secs(config.timeout_sec);

    let mut plan = TripPlan::new(PlanLimits {
        max_styles: config.max_trip_styles,
    });
    let mut wizard = Wizard::new();
    let mut orchestrator = GenerationOrchestrator::new();

    println!("Plan a trip in {} steps. Commands: next, back, quit.", WizardStep::COUNT);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let step = wizard.step();
        print_step(step, &plan);

        // Mirror the wizard UI: reaching the last step kicks off a first
        // generation without being asked
        if step.is_terminal()
            && plan.itinerary.is_empty()
            && orchestrator.phase() == GenerationPhase::Idle
        {
            run_generation(&mut orchestrator, &mut plan, runner.as_ref(), timeout).await;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let input = line?.trim().to_string();

        match input.as_str() {
            "quit" | "exit" => break,
            "back" => {
                wizard.prev();
            }
            "next" => {
                if step.is_terminal() {
                    break;
                }
                if wizard.next(&plan) == step {
                    println!("This step is not complete yet.");
                }
            }
            _ => {
                handle_step_input(
                    step,
                    &input,
                    &mut plan,
                    &mut orchestrator,
                    &search,
                    runner.as_ref(),
                    &config,
                    timeout,
                )
                .await;
            }
        }
    }

    Ok(())
}

fn print_step(step: WizardStep, plan: &TripPlan) {
    println!();
    println!(
        "[Step {}/{}] {}",
        step.index() + 1,
        WizardStep::COUNT,
        step.title()
    );

    match step {
        WizardStep::Destination => {
            if plan.destination.is_empty() {
                println!("Type a destination, or ?<text> to search the catalog.");
            } else {
                println!("Destination: {}", plan.destination);
            }
        }
        WizardStep::Dates => {
            println!("Enter: <start> <end> [arrival] [departure] (dates as YYYY-MM-DD), or 'clear'.");
            if let (Some(start), Some(end)) = (plan.start_date, plan.end_date) {
                println!("Current: {} to {} ({} days)", start, end, plan.number_of_days);
            }
        }
        WizardStep::Style => {
            let available = TripStyle::ALL
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!("Toggle up to {} styles: {}", plan.limits.max_styles, available);
            if !plan.trip_styles.is_empty() {
                println!("Selected: {}", plan.styles_label());
            }
        }
        WizardStep::Budget => {
            let tiers = BudgetLevel::ALL
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!("Pick a tier: {} (current: {})", tiers, plan.budget_level);
        }
        WizardStep::Itinerary => {
            println!("Commands: regenerate, save, next (finish).");
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn handle_step_input(
    step: WizardStep,
    input: &str,
    plan: &mut TripPlan,
    orchestrator: &mut GenerationOrchestrator,
    search: &SearchSession,
    runner: &dyn Generator,
    config: &Config,
    timeout: Duration,
) {
    match step {
        WizardStep::Destination => {
            if let Some(query) = input.strip_prefix('?') {
                // Every autocomplete query goes through the debounced
                // driver; line input just produces one-query bursts
                let queries = futures::stream::iter([query.to_string()]);
                drive_debounced(search, queries, |_, results| {
                    if results.is_empty() {
                        println!("No matches.");
                    }
                    for dest in results {
                        println!("  {}", dest.full);
                    }
                })
                .await;
            } else if let Err(e) = plan.apply(PlanAction::SetDestination(input.to_string())) {
                println!("{}", e);
            }
        }

        WizardStep::Dates => match parse_dates_input(input) {
            Ok(action) => {
                if let Err(e) = plan.apply(action) {
                    println!("{}", e);
                }
            }
            Err(message) => println!("{}", message),
        },

        WizardStep::Style => match input.parse::<TripStyle>() {
            Ok(style) => {
                if let Err(e) = plan.apply(PlanAction::ToggleStyle(style)) {
                    println!("{}", e);
                }
            }
            Err(message) => println!("{}", message),
        },

        WizardStep::Budget => match input.parse::<BudgetLevel>() {
            Ok(level) => {
                debug!("Budget set to {}", level);
                let _ = plan.apply(PlanAction::SetBudget(level));
            }
            Err(message) => println!("{}", message),
        },

        WizardStep::Itinerary => match input {
            "regenerate" => {
                run_generation(orchestrator, plan, runner, timeout).await;
            }
            "save" => match write_itinerary(&config.output_dir, plan) {
                Ok(trip_dir) => println!("Itinerary written to {}", trip_dir.display()),
                Err(e) => println!("{}", e),
            },
            other => println!("Unknown command: {}", other),
        },
    }
}

/// `<start> <end> [arrival] [departure]` or `clear`
fn parse_dates_input(input: &str) -> Result<PlanAction, String> {
    if input == "clear" {
        return Ok(PlanAction::SetDates {
            start: None,
            end: None,
            arrival_time: None,
            departure_time: None,
        });
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() < 2 {
        return Err("Expected: <start> <end> [arrival] [departure]".to_string());
    }

    let start: chrono::NaiveDate = parts[0]
        .parse()
        .map_err(|_| format!("Not a date: {}", parts[0]))?;
    let end: chrono::NaiveDate = parts[1]
        .parse()
        .map_err(|_| format!("Not a date: {}", parts[1]))?;

    // This prompt is the date-selection collaborator, so the ordering
    // check belongs here rather than in the reducer
    if end < start {
        return Err(PlanError::EndBeforeStart { start, end }.to_string());
    }

    Ok(PlanAction::SetDates {
        start: Some(start),
        end: Some(end),
        arrival_time: parts.get(2).map(|s| s.to_string()),
        departure_time: parts.get(3).map(|s| s.to_string()),
    })
}

async fn run_generation(
    orchestrator: &mut GenerationOrchestrator,
    plan: &mut TripPlan,
    runner: &dyn Generator,
    timeout: Duration,
) {
    println!("Generating your itinerary...");
    let phase = orchestrator.generate(plan, runner, timeout).await;

    match phase {
        GenerationPhase::Success => {
            println!();
            println!("{}", render_markdown(plan));
        }
        GenerationPhase::Failed => {
            println!(
                "{} (type 'regenerate' to retry)",
                orchestrator.error().unwrap_or("generation failed")
            );
        }
        GenerationPhase::Idle | GenerationPhase::Generating => {}
    }
}
