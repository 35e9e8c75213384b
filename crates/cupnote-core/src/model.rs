use serde::{Deserialize, Serialize};
use std::fmt;

pub const PLACEHOLDER_BEAN: &str = "Unknown bean";
pub const PLACEHOLDER_CAFE: &str = "Unknown cafe";
pub const PLACEHOLDER_FLAVOR: &str = "Sour";
pub const PLACEHOLDER_PROCESSING: &str = "Natural";

/// A known product from the catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub flavors: Vec<String>,
}

/// Which path produced an extraction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Catalog,
    Heuristic,
    Fallback,
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSource::Catalog => write!(f, "catalog"),
            MatchSource::Heuristic => write!(f, "heuristic"),
            MatchSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Stable error codes attached to degraded results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    OcrProviderUnavailable,
    OcrProviderFailed,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OcrProviderUnavailable => "OCR_PROVIDER_UNAVAILABLE",
            ErrorCode::OcrProviderFailed => "OCR_PROVIDER_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured product metadata recovered from one piece of OCR text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub bean: Option<String>,
    pub cafe: Option<String>,
    pub processing: Option<String>,
    pub flavor: Vec<String>,
    pub raw_text: String,
    pub match_source: MatchSource,
    /// Winning catalog score, present only for catalog matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl ExtractionResult {
    /// Placeholder result returned when no text could be obtained.
    ///
    /// Keeps the normal shape so callers never have to special-case a
    /// transport failure: every field is populated and `raw_text` carries
    /// the diagnostic together with the error code.
    pub fn degraded(code: ErrorCode, detail: &str) -> Self {
        ExtractionResult {
            bean: Some(PLACEHOLDER_BEAN.to_string()),
            cafe: Some(PLACEHOLDER_CAFE.to_string()),
            processing: Some(PLACEHOLDER_PROCESSING.to_string()),
            flavor: vec![PLACEHOLDER_FLAVOR.to_string()],
            raw_text: format!("OCR analysis failed: {detail} [{code}]"),
            match_source: MatchSource::Fallback,
            score: None,
            error: Some(code),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}
