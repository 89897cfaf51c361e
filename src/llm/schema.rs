//! Output schema — the structural contract for explanation replies.
//!
//! Used twice: sent to Gemini as `generationConfig.responseSchema` so the
//! model is asked for machine-parseable output, and enforced locally by
//! `validate_explanation` on whatever comes back. A reply either satisfies
//! all five fields or is rejected whole — a partial explanation never
//! reaches the UI.

use super::error::ExplainError;
use super::types::CodeExplanation;
use serde_json::Value;

/// Field names required of every explanation reply, in schema order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "purpose",
    "lineByLine",
    "complexity",
    "inputOutput",
    "improvements",
];

/// The responseSchema value sent with every generateContent request.
pub fn response_schema() -> Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "purpose": { "type": "STRING" },
            "lineByLine": { "type": "ARRAY", "items": { "type": "STRING" } },
            "complexity": { "type": "STRING" },
            "inputOutput": { "type": "STRING" },
            "improvements": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": REQUIRED_FIELDS
    })
}

/// Validate a parsed reply against the contract.
///
/// Presence and shape are checked explicitly for every field — the model is
/// instructed to comply but never trusted to.
pub fn validate_explanation(value: &Value) -> Result<CodeExplanation, ExplainError> {
    Ok(CodeExplanation {
        purpose: require_string(value, "purpose")?,
        line_by_line: require_string_array(value, "lineByLine")?,
        complexity: require_string(value, "complexity")?,
        input_output: require_string(value, "inputOutput")?,
        improvements: require_string_array(value, "improvements")?,
    })
}

fn require_string(value: &Value, field: &'static str) -> Result<String, ExplainError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ExplainError::SchemaMismatch { field })
}

fn require_string_array(
    value: &Value,
    field: &'static str,
) -> Result<Vec<String>, ExplainError> {
    let items = value
        .get(field)
        .and_then(Value::as_array)
        .ok_or(ExplainError::SchemaMismatch { field })?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or(ExplainError::SchemaMismatch { field })
        })
        .collect()
}
