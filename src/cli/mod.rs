pub mod generate;
pub mod init;
pub mod plan;
pub mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tripsmith")]
#[command(
    author,
    version,
    about = "Trip itinerary wizard backed by Claude Code and Codex CLI"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the trip-planning wizard interactively
    Plan(PlanArgs),

    /// Build one itinerary straight from flags
    Generate(GenerateArgs),

    /// Write a default tripsmith.yaml
    Init(InitArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct PlanArgs {
    /// Path to config file
    #[arg(short, long, default_value = "tripsmith.yaml")]
    pub config: PathBuf,

    /// Override where itineraries are written
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct GenerateArgs {
    /// Path to config file
    #[arg(short, long, default_value = "tripsmith.yaml")]
    pub config: PathBuf,

    /// Where the trip goes, e.g. "Paris, France"
    #[arg(long)]
    pub destination: String,

    /// First trip day (YYYY-MM-DD)
    #[arg(long)]
    pub start: chrono::NaiveDate,

    /// Last trip day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: chrono::NaiveDate,

    /// Arrival time on the first day, e.g. 14:30
    #[arg(long)]
    pub arrival: Option<String>,

    /// Departure time on the last day
    #[arg(long)]
    pub departure: Option<String>,

    /// Trip styles (comma-separated): adventure, leisure, romance, culture, family, nightlife
    #[arg(long, value_delimiter = ',')]
    pub styles: Vec<String>,

    /// Budget tier: ultra-budget, smart-budget, moderate, luxury
    #[arg(long)]
    pub budget: Option<String>,

    /// Interest tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub interests: Vec<String>,

    /// Override the configured provider (claude_cli or codex_cli)
    #[arg(long)]
    pub provider: Option<String>,

    /// Override where itineraries are written
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the generation prompt without calling the provider
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    /// Where to write the config
    #[arg(short, long, default_value = "tripsmith.yaml")]
    pub config: PathBuf,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}
