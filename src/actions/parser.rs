// ABOUTME: Parses free-form generator output into validated health action records
// ABOUTME: Strips code fences, isolates the JSON array, and normalizes every entry onto the enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

use health_copilot_core::models::{
    ActionCategory, ActionPriority, HealthAction, TimeHorizon,
};
use serde_json::Value;
use thiserror::Error;

/// Title used when the generator omits one
pub const DEFAULT_TITLE: &str = "Health Recommendation";

/// Why generator output could not be turned into actions
#[derive(Debug, Error)]
pub enum ActionParseError {
    /// Output is not valid JSON
    #[error("Generator output is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Output decoded, but not to an array
    #[error("Generator output is a JSON {0}, expected an array")]
    NotArray(&'static str),
}

/// Parse generator output into actions
///
/// `id_seed` is combined with each entry's index to form ids that are unique
/// within one call.
///
/// # Errors
///
/// Returns an error if the isolated text is not a JSON array.
pub fn parse_actions(text: &str, id_seed: i64) -> Result<Vec<HealthAction>, ActionParseError> {
    let candidate = isolate_array(strip_code_fence(text.trim()));

    match serde_json::from_str::<Value>(candidate)? {
        Value::Array(entries) => Ok(entries
            .iter()
            .enumerate()
            .map(|(index, entry)| normalize_action(entry, id_seed, index))
            .collect()),
        other => Err(ActionParseError::NotArray(json_kind(&other))),
    }
}

/// The single recommendation returned when generation or parsing fails
#[must_use]
pub fn fallback_actions(id_seed: i64) -> Vec<HealthAction> {
    vec![HealthAction {
        id: action_id(id_seed, 0),
        category: ActionCategory::General,
        title: "Review your health metrics".to_owned(),
        description: "Take time to understand your current health status".to_owned(),
        evidence_summary: "Regular health monitoring is associated with better health outcomes"
            .to_owned(),
        evidence_sources: vec!["General health guidelines".to_owned()],
        priority: ActionPriority::Medium,
        time_horizon: TimeHorizon::Today,
    }]
}

fn action_id(id_seed: i64, index: usize) -> String {
    format!("action-{id_seed}-{index}")
}

/// Body of the first fenced block (```json or bare ```), or the input unchanged
///
/// Later fences are ignored, so a fenced note ahead of the array fails to decode.
fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let after_open = &text[open + 3..];
    // Skip the info string ("json") up to the end of the fence line
    let body_start = after_open.find('\n').map_or(0, |newline| newline + 1);
    let body = &after_open[body_start..];
    body.find("```").map_or(body, |close| &body[..close]).trim()
}

/// Substring from the first `[` to the last `]`, or the input when there is none
fn isolate_array(text: &str) -> &str {
    match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

fn normalize_action(entry: &Value, id_seed: i64, index: usize) -> HealthAction {
    HealthAction {
        id: action_id(id_seed, index),
        category: string_field(entry, "category")
            .map(ActionCategory::from_str_or_default)
            .unwrap_or_default(),
        title: string_field(entry, "title")
            .unwrap_or(DEFAULT_TITLE)
            .to_owned(),
        description: string_field(entry, "description")
            .unwrap_or_default()
            .to_owned(),
        evidence_summary: string_field(entry, "evidenceSummary")
            .unwrap_or_default()
            .to_owned(),
        evidence_sources: entry
            .get("evidenceSources")
            .and_then(Value::as_array)
            .map(|sources| {
                sources
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default(),
        priority: string_field(entry, "priority")
            .map(ActionPriority::from_str_or_default)
            .unwrap_or_default(),
        time_horizon: string_field(entry, "timeHorizon")
            .map(TimeHorizon::from_str_or_default)
            .unwrap_or_default(),
    }
}

/// Non-empty string value of `key`
fn string_field<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
