//! Contract with an external LLM extraction service.
//!
//! The engine never talks to a model. It only builds the instruction text a
//! caller can send and interprets whatever comes back into a fixed shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

pub const DEFAULT_CONFIDENCE: f64 = 0.8;
pub const PARSE_FAILURE_CONFIDENCE: f64 = 0.5;
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse LLM response as JSON";
pub const MAX_LLM_FLAVORS: usize = 5;

/// Structured guess returned by the LLM service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmExtraction {
    pub cafe: String,
    pub bean: String,
    pub processing: String,
    pub flavor: Vec<String>,
    pub confidence: f64,
    pub raw_text: String,
    pub llm_response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Instruction text asking a model to extract coffee metadata as JSON.
pub fn build_llm_prompt(raw_text: &str) -> String {
    format!(
        r#"The following text was recovered from a coffee bag or a cafe menu. Extract the coffee information and answer with JSON only.

Recovered text:
{raw_text}

Answer with JSON of exactly this shape:
{{
  "cafe": "cafe name (the actual coffee shop, not an origin or farm)",
  "bean": "bean name (origin plus region or farm)",
  "processing": "processing method (Natural, Washed, Honey, Anaerobic, ...)",
  "flavor": ["flavor1", "flavor2", "flavor3"]
}}

Rules:
- The cafe must be a real coffee shop name. Origins and farm names are not cafes.
- Include both the origin and the region or farm in the bean name.
- Return at most {MAX_LLM_FLAVORS} flavors.
- Use an empty string or an empty array for anything you are not sure about.
- The answer must be valid JSON.
"#
    )
}

/// Interpret a model response for `raw_text`.
///
/// Missing or mistyped fields become empty values, and a zero or NaN
/// confidence falls back to [`DEFAULT_CONFIDENCE`]. A response that is not a
/// JSON object yields an all-empty extraction with reduced confidence and an
/// error message rather than an `Err`.
pub fn parse_llm_response(raw_text: &str, response: &str, confidence: Option<f64>) -> LlmExtraction {
    match serde_json::from_str::<Value>(strip_code_fence(response)) {
        Ok(Value::Object(fields)) => LlmExtraction {
            cafe: string_field(&fields, "cafe"),
            bean: string_field(&fields, "bean"),
            processing: string_field(&fields, "processing"),
            flavor: match fields.get("flavor") {
                Some(Value::Array(items)) => items
                    .iter()
                    .filter_map(|v| v.as_str())
                    .map(|s| s.to_string())
                    .collect(),
                _ => Vec::new(),
            },
            confidence: confidence
                .filter(|c| *c != 0.0 && !c.is_nan())
                .unwrap_or(DEFAULT_CONFIDENCE),
            raw_text: raw_text.to_string(),
            llm_response: response.to_string(),
            error: None,
        },
        Ok(_) | Err(_) => {
            warn!(response_len = response.len(), "unparseable LLM response");
            LlmExtraction {
                cafe: String::new(),
                bean: String::new(),
                processing: String::new(),
                flavor: Vec::new(),
                confidence: PARSE_FAILURE_CONFIDENCE,
                raw_text: raw_text.to_string(),
                llm_response: response.to_string(),
                error: Some(PARSE_FAILURE_MESSAGE.to_string()),
            }
        }
    }
}

fn string_field(fields: &serde_json::Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Models like to wrap JSON in ```json fences.
fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
