use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Mappings reported with less confidence than this are not learned.
pub const MIN_LEARNING_CONFIDENCE: f64 = 0.7;

static SHORT_CAPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,2}$").expect("valid short caps pattern"));
static NAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z가-힣\s]+[A-Za-z가-힣]$").expect("valid name line pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingKind {
    Flavor,
    Bean,
    Cafe,
}

/// A corrected value: a single name, or a flavor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappedValue {
    Single(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LearningRejection {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid mapping '{0}'")]
    InvalidMapping(String),

    #[error("confidence {0} is below {MIN_LEARNING_CONFIDENCE}")]
    LowConfidence(f64),
}

/// A user-accepted mapping from OCR text to a corrected value, screened and
/// ready for a caller-side store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningCandidate {
    pub kind: MappingKind,
    /// Lowercased, trimmed original text; the lookup key.
    pub key: String,
    pub mapped: MappedValue,
    pub confidence: f64,
}

impl LearningCandidate {
    /// Screen a mapping before it is learned.
    ///
    /// Single-value mappings that are too short or look like stray OCR
    /// fragments are rejected; multi-line values are reduced to the line
    /// that looks most like a name.
    pub fn new(
        kind: MappingKind,
        original: &str,
        mapped: MappedValue,
        confidence: f64,
    ) -> Result<Self, LearningRejection> {
        let key = original.trim().to_lowercase();
        if key.is_empty() {
            return Err(LearningRejection::MissingField("original"));
        }

        let mapped = match mapped {
            MappedValue::Single(value) => MappedValue::Single(screen_single(&value)?),
            MappedValue::List(values) => {
                if values.is_empty() {
                    return Err(LearningRejection::MissingField("mapped"));
                }
                MappedValue::List(values)
            }
        };

        if confidence < MIN_LEARNING_CONFIDENCE {
            return Err(LearningRejection::LowConfidence(confidence));
        }

        Ok(LearningCandidate {
            kind,
            key,
            mapped,
            confidence,
        })
    }
}

fn screen_single(value: &str) -> Result<String, LearningRejection> {
    if value.is_empty() {
        return Err(LearningRejection::MissingField("mapped"));
    }

    let first_line_short = value.contains('\n')
        && value
            .split('\n')
            .next()
            .is_some_and(|l| l.chars().count() <= 3);
    if value.chars().count() <= 2 || SHORT_CAPS.is_match(value) || first_line_short {
        return Err(LearningRejection::InvalidMapping(value.to_string()));
    }

    let lines: Vec<&str> = value
        .split('\n')
        .map(str::trim)
        .filter(|l| l.chars().count() > 3)
        .collect();

    match lines.as_slice() {
        [] => Ok(value.trim().to_string()),
        [only] => Ok(only.to_string()),
        many => Ok(many
            .iter()
            .find(|l| NAME_LINE.is_match(l))
            .unwrap_or(&many[0])
            .to_string()),
    }
}
