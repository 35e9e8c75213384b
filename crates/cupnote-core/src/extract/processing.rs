use crate::lexicon::schema::Lexicon;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Labeled "process" fields, tried in order. The first capture that is
/// non-empty after trimming is used.
static LABEL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[Pp]rocess(?:ing)?[:：]?\s*([A-Za-z]+)",
        r"[Pp]rocess(?:ing)?[:：]?\s*([^\n.,]+)",
        r"프로세스[:：]?\s*([^\n.,]+)",
        r"가공방식[:：]?\s*([^\n.,]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid processing label pattern"))
    .collect()
});

/// Map free text to a canonical processing method.
///
/// 1. Case-sensitive alias scan over the whole text, categories in lexicon
///    order (so "F/W" or "NAT" only hit in their listed spelling).
/// 2. Otherwise capture the value of a labeled field ("Process:",
///    "프로세스:", "가공방식:") and look it up case-insensitively, returning
///    the trimmed capture verbatim when it is not a known alias.
pub fn classify_processing(text: &str, lexicon: &Lexicon) -> Option<String> {
    if let Some(name) = lookup_alias(text, lexicon) {
        debug!(processing = name, "processing alias hit");
        return Some(name.to_string());
    }

    for pattern in LABEL_PATTERNS.iter() {
        let Some(captured) = pattern.captures(text).and_then(|c| c.get(1)) else {
            continue;
        };
        let value = captured.as_str().trim();
        if value.is_empty() {
            continue;
        }

        if let Some(name) = lookup_alias_ignore_case(value, lexicon) {
            debug!(processing = name, field = value, "processing label mapped");
            return Some(name.to_string());
        }
        debug!(field = value, "processing label kept verbatim");
        return Some(value.to_string());
    }

    None
}

fn lookup_alias<'a>(text: &str, lexicon: &'a Lexicon) -> Option<&'a str> {
    lexicon
        .processing
        .iter()
        .find(|category| category.aliases.iter().any(|alias| text.contains(alias.as_str())))
        .map(|category| category.name.as_str())
}

fn lookup_alias_ignore_case<'a>(fragment: &str, lexicon: &'a Lexicon) -> Option<&'a str> {
    let fragment = fragment.to_lowercase();
    lexicon
        .processing
        .iter()
        .find(|category| {
            category
                .aliases
                .iter()
                .any(|alias| fragment.contains(&alias.to_lowercase()))
        })
        .map(|category| category.name.as_str())
}
