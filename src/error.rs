use std::path::PathBuf;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum TripsmithError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("max_trip_styles must be at least 1")]
    ZeroStyleLimit,

    #[error("timeout_sec must be greater than 0")]
    ZeroTimeout,

    #[error("search.max_results must be at least 1")]
    ZeroSearchResults,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlanError {
    #[error("At most {max} trip styles may be selected")]
    StyleLimit { max: usize },

    #[error("End date {end} is before start date {start}")]
    EndBeforeStart {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Both start and end dates are required to build a generation request")]
    DatesMissing,
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Generation timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Process failed with exit code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Destination source failed: {0}")]
    Source(String),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write itinerary: {0}")]
    WriteItinerary(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
