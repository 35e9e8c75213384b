pub mod builtin;
pub mod matcher;

use crate::error::CupnoteError;
use crate::model::CatalogEntry;
use std::path::Path;

pub use builtin::builtin_catalog;
pub use matcher::{find_best_match, rank_entries, score_entry, MatchScore, MIN_MATCH_SCORE};

/// Load a catalog snapshot from a JSON file (an array of entries).
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, CupnoteError> {
    let content = std::fs::read_to_string(path).map_err(|e| CupnoteError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<Vec<CatalogEntry>, CupnoteError> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(json).map_err(|e| CupnoteError::CatalogLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_catalog(&entries)?;
    Ok(entries)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Vec<CatalogEntry>, CupnoteError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json).map_err(CupnoteError::Json)?;
    validate_catalog(&entries)?;
    Ok(entries)
}

/// Validate that every entry has a usable name.
pub fn validate_catalog(entries: &[CatalogEntry]) -> Result<(), CupnoteError> {
    for (i, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(CupnoteError::CatalogInvalid(format!(
                "entry {} has an empty name",
                i
            )));
        }
    }
    Ok(())
}
