use crate::lexicon::schema::Lexicon;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Capitalized candidates, in priority order: ALL-CAPS runs (optionally
/// followed by a second ALL-CAPS word), then Title-Case words/pairs.
static CANDIDATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"[A-Z]{3,}(?:\s+[A-Z]+)?", r"[A-Z][a-z]{2,}(?:\s+[A-Z][a-z]+)?"]
        .iter()
        .map(|p| Regex::new(p).expect("valid cafe candidate pattern"))
        .collect()
});

static UPPERCASE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z가-힣]{4,}").expect("valid uppercase run pattern"));

/// Recover a cafe or roaster name directly from raw text.
///
/// Strategies, first success wins:
/// 1. a known cafe name (lexicon order, exact case)
/// 2. the first capitalized candidate that is not an excluded word
/// 3. the first run of 4+ uppercase Latin or Hangul characters
pub fn extract_cafe(text: &str, lexicon: &Lexicon) -> Option<String> {
    if let Some(known) = lexicon
        .known_cafes
        .iter()
        .find(|cafe| text.contains(cafe.as_str()))
    {
        debug!(cafe = %known, "known cafe");
        return Some(known.clone());
    }

    for pattern in CANDIDATE_PATTERNS.iter() {
        let candidate = pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|c| !lexicon.cafe_excluded_words.iter().any(|w| w == c));
        if let Some(candidate) = candidate {
            debug!(cafe = candidate, "capitalized cafe candidate");
            return Some(candidate.to_string());
        }
    }

    UPPERCASE_RUN.find(text).map(|m| {
        debug!(cafe = m.as_str(), "uppercase run cafe candidate");
        m.as_str().to_string()
    })
}
