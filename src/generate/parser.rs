//! Lenient extraction of the itinerary payload from raw provider output.
//!
//! Generators are told to answer with bare JSON, but in practice they wrap
//! it in markdown fences, prose, or the Claude CLI result envelope. The
//! ladder here: direct parse, fenced block, balanced-brace scan.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use crate::plan::{Activity, ItineraryDay};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ItineraryParseError {
    /// No JSON payload could be located in the output at all
    #[error("no JSON payload found in generator output")]
    NoJsonPayload,

    /// JSON was found but does not match the itinerary contract
    #[error("generator output does not match the itinerary shape")]
    UnexpectedShape,
}

/// Day as the generator sends it: day number optional, date either
/// `YYYY-MM-DD` or a full ISO datetime
#[derive(Deserialize)]
struct RawDay {
    #[serde(default)]
    day: Option<u32>,

    date: String,

    #[serde(default)]
    activities: Vec<Activity>,
}

#[derive(Deserialize)]
struct ItineraryWrapper {
    itinerary: Vec<RawDay>,
}

/// Parse and normalize an itinerary from raw provider output
pub fn parse_itinerary(raw: &str) -> Result<Vec<ItineraryDay>, ItineraryParseError> {
    // Claude wraps the payload in {"result": "...", ...} JSON
    #[derive(Deserialize)]
    struct ClaudeOutput {
        result: String,
    }

    if let Ok(claude_out) = serde_json::from_str::<ClaudeOutput>(raw) {
        return parse_days(&claude_out.result);
    }

    parse_days(raw)
}

fn parse_days(s: &str) -> Result<Vec<ItineraryDay>, ItineraryParseError> {
    let json_str = extract_json(s).ok_or(ItineraryParseError::NoJsonPayload)?;

    let wrapper: ItineraryWrapper = match serde_json::from_str(&json_str) {
        Ok(w) => w,
        Err(e) => {
            tracing::debug!("Itinerary shape mismatch: {}", e);
            return Err(ItineraryParseError::UnexpectedShape);
        }
    };

    normalize_days(wrapper.itinerary)
}

/// Sort by the generator's day numbers (stable for ties/absent), then
/// reassign 1..n so the sequence has no gaps, and turn every date string
/// into a real calendar date.
fn normalize_days(raw: Vec<RawDay>) -> Result<Vec<ItineraryDay>, ItineraryParseError> {
    if raw.is_empty() {
        return Err(ItineraryParseError::UnexpectedShape);
    }

    let mut raw = raw;
    raw.sort_by_key(|d| d.day.unwrap_or(0));

    raw.into_iter()
        .enumerate()
        .map(|(idx, day)| {
            let date = parse_day_date(&day.date).ok_or_else(|| {
                tracing::debug!("Unparseable day date: {}", day.date);
                ItineraryParseError::UnexpectedShape
            })?;
            Ok(ItineraryDay {
                day: idx as u32 + 1,
                date,
                activities: day.activities,
            })
        })
        .collect()
}

fn parse_day_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    // Full ISO datetime, e.g. 2025-06-01T00:00:00Z
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }

    None
}

/// Extract a JSON object from a string that might contain markdown code
/// blocks or surrounding prose
fn extract_json(s: &str) -> Option<String> {
    let trimmed = s.trim();

    // First try: the whole string is valid JSON
    if trimmed.starts_with('{') && serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return Some(trimmed.to_string());
    }

    // Second try: extract from markdown code block
    let re = regex::Regex::new(r"```(?:json)?\s*\n?([\s\S]*?)\n?```").ok()?;
    for cap in re.captures_iter(s) {
        let potential_json = cap.get(1)?.as_str().trim();
        if serde_json::from_str::<serde_json::Value>(potential_json).is_ok() {
            return Some(potential_json.to_string());
        }
    }

    // Third try: find JSON object pattern
    let brace_start = s.find('{')?;
    let mut depth = 0;
    let mut end = brace_start;

    for (i, c) in s[brace_start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    end = brace_start + i + 1;
                    break;
                }
            }
            _ => {}
        }
    }

    if depth == 0 && end > brace_start {
        let potential_json = &s[brace_start..end];
        if serde_json::from_str::<serde_json::Value>(potential_json).is_ok() {
            return Some(potential_json.to_string());
        }
    }

    None
}
