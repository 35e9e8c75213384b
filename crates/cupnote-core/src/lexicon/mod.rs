pub mod builtin;
pub mod schema;

use crate::error::CupnoteError;
use schema::Lexicon;
use std::path::Path;

pub use builtin::builtin_lexicon;

/// Load a lexicon from a JSON file.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, CupnoteError> {
    let content = std::fs::read_to_string(path).map_err(|e| CupnoteError::LexiconLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_lexicon(&content, path)
}

/// Parse a lexicon from a JSON string.
pub fn parse_lexicon(json: &str, source: &Path) -> Result<Lexicon, CupnoteError> {
    let lexicon: Lexicon = serde_json::from_str(json).map_err(|e| CupnoteError::LexiconLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_lexicon(&lexicon)?;
    Ok(lexicon)
}

/// Parse a lexicon from a JSON string (no file path context).
pub fn parse_lexicon_str(json: &str) -> Result<Lexicon, CupnoteError> {
    let lexicon: Lexicon = serde_json::from_str(json).map_err(CupnoteError::Json)?;
    validate_lexicon(&lexicon)?;
    Ok(lexicon)
}

/// Validate that a lexicon is well-formed.
///
/// Empty strings are rejected everywhere: an empty alias or keyword is a
/// substring of every input and would hit unconditionally.
pub fn validate_lexicon(lexicon: &Lexicon) -> Result<(), CupnoteError> {
    if lexicon.processing.is_empty() {
        return Err(CupnoteError::LexiconInvalid(
            "processing categories must not be empty".into(),
        ));
    }

    for category in &lexicon.processing {
        if category.name.trim().is_empty() {
            return Err(CupnoteError::LexiconInvalid(
                "processing category name must not be empty".into(),
            ));
        }
        if category.aliases.is_empty() {
            return Err(CupnoteError::LexiconInvalid(format!(
                "processing category '{}' has no aliases",
                category.name
            )));
        }
        if category.aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(CupnoteError::LexiconInvalid(format!(
                "processing category '{}' has an empty alias",
                category.name
            )));
        }
    }

    let lists: [(&str, &Vec<String>); 6] = [
        ("flavor_keywords", &lexicon.flavor_keywords),
        ("known_cafes", &lexicon.known_cafes),
        ("cafe_excluded_words", &lexicon.cafe_excluded_words),
        ("specific_beans", &lexicon.specific_beans),
        ("origins", &lexicon.origins),
        ("bean_keywords", &lexicon.bean_keywords),
    ];
    for (field, values) in lists {
        if values.iter().any(|v| v.trim().is_empty()) {
            return Err(CupnoteError::LexiconInvalid(format!(
                "'{}' contains an empty entry",
                field
            )));
        }
    }

    Ok(())
}
