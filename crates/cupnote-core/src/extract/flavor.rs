use crate::lexicon::schema::Lexicon;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static ENGLISH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[Nn]otes?[:：]?\s*([^.]+)",
        r"[Ff]lavou?rs?[:：]?\s*([^.]+)",
        r"[Tt]asting [Nn]otes?[:：]?\s*([^.]+)",
        r"[Bb]ergamot,([^.]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid flavor label pattern"))
    .collect()
});

static KOREAN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"향미[:：]?\s*([가-힣\s,.·]+)",
        r"풍미[:：]?\s*([가-힣\s,.·]+)",
        r"노트[:：]?\s*([가-힣\s,.·]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid flavor label pattern"))
    .collect()
});

static ENGLISH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(",|and|·").expect("valid separator pattern"));
static KOREAN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(",|·").expect("valid separator pattern"));

/// Extract flavor descriptors from raw OCR text.
///
/// Labeled lines contribute first (at most one English and one Korean
/// label, first pattern wins in each), then every lexicon keyword present
/// in the text is appended unless already listed. Entries of one character
/// or less are dropped at the end.
pub fn extract_flavors(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let mut flavors: Vec<String> = Vec::new();

    if let Some(fragment) = first_capture(&ENGLISH_PATTERNS, text) {
        debug!(fragment, "english flavor label");
        split_into(&mut flavors, fragment, &ENGLISH_SEPARATOR);
    }

    if let Some(fragment) = first_capture(&KOREAN_PATTERNS, text) {
        debug!(fragment, "korean flavor label");
        split_into(&mut flavors, fragment, &KOREAN_SEPARATOR);
    }

    for keyword in &lexicon.flavor_keywords {
        if text.contains(keyword.as_str()) && !flavors.contains(keyword) {
            flavors.push(keyword.clone());
        }
    }

    flavors.retain(|f| f.chars().count() > 1);
    flavors
}

fn first_capture<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|p| p.captures(text).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

fn split_into(out: &mut Vec<String>, fragment: &str, separator: &Regex) {
    out.extend(separator.split(fragment).map(|piece| piece.trim().to_string()));
}
