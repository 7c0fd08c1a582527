mod orchestrator;
mod parser;
mod request;

pub use orchestrator::{GenerationOrchestrator, GenerationPhase};
pub use request::ItineraryRequest;
