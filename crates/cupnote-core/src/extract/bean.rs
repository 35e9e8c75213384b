use crate::lexicon::schema::Lexicon;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static LABEL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"원두명[:：]?\s*([^\n]+)",
        r"원두[:：]?\s*([^\n]+)",
        r"[Bb]ean(?:\s+[Nn]ame)?[:：]?\s*([^\n]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid bean label pattern"))
    .collect()
});

const MAX_ORIGIN_LINE_CHARS: usize = 80;
const MIN_KEYWORD_LINE_CHARS: usize = 15;
const MAX_KEYWORD_LINE_CHARS: usize = 50;

/// Recover a bean / product name directly from raw text.
///
/// Strategies, first success wins:
/// 1. a curated specific bean name (exact, case-insensitive, or origin and
///    region found separately)
/// 2. an explicit label ("원두명:", "원두:", "Bean Name:")
/// 3. a short line (< 80 chars) mentioning an origin, after its colon if any
/// 4. a 15-49 char line containing a generic bean keyword
/// 5. the phrase starting at any origin mention
pub fn extract_bean(text: &str, lexicon: &Lexicon) -> Option<String> {
    if let Some(name) = match_specific_bean(text, lexicon) {
        debug!(bean = name, "curated bean name");
        return Some(name.to_string());
    }

    if let Some(label) = match_label(text) {
        debug!(bean = label, "labeled bean name");
        return Some(label.to_string());
    }

    let lines: Vec<&str> = text.split(['\n', '\r']).collect();

    if let Some(line) = origin_line(&lines, lexicon) {
        debug!(bean = %line, "origin line");
        return Some(line);
    }

    if let Some(line) = keyword_line(&lines, lexicon) {
        debug!(bean = line, "bean keyword line");
        return Some(line.to_string());
    }

    let phrase = origin_phrase(&lines, lexicon);
    if let Some(ref phrase) = phrase {
        debug!(bean = %phrase, "origin phrase");
    }
    phrase
}

fn match_specific_bean<'a>(text: &str, lexicon: &'a Lexicon) -> Option<&'a str> {
    let lower = text.to_lowercase();

    lexicon
        .specific_beans
        .iter()
        .find(|name| {
            if text.contains(name.as_str()) {
                return true;
            }
            let name_lower = name.to_lowercase();
            if lower.contains(&name_lower) {
                return true;
            }
            match name_lower.split_once(' ') {
                Some((country, region)) => lower.contains(country) && lower.contains(region),
                None => false,
            }
        })
        .map(|name| name.as_str())
}

fn match_label(text: &str) -> Option<&str> {
    LABEL_PATTERNS
        .iter()
        .filter_map(|p| p.captures(text).and_then(|c| c.get(1)))
        .map(|m| m.as_str().trim())
        .find(|s| !s.is_empty())
}

fn origin_line(lines: &[&str], lexicon: &Lexicon) -> Option<String> {
    for line in lines {
        if line.chars().count() >= MAX_ORIGIN_LINE_CHARS {
            continue;
        }
        if !lexicon.origins.iter().any(|o| line.contains(o.as_str())) {
            continue;
        }

        // Keep what follows a label like "Origin: ..." unless that is empty
        if let Some(idx) = line.find(':') {
            let after = line[idx + 1..].trim();
            if !after.is_empty() {
                return Some(after.to_string());
            }
        }
        return Some(line.trim().to_string());
    }
    None
}

fn keyword_line<'t>(lines: &[&'t str], lexicon: &Lexicon) -> Option<&'t str> {
    lines
        .iter()
        .filter(|line| {
            let len = line.chars().count();
            (MIN_KEYWORD_LINE_CHARS..MAX_KEYWORD_LINE_CHARS).contains(&len)
        })
        .find(|line| lexicon.bean_keywords.iter().any(|k| line.contains(k.as_str())))
        .map(|line| line.trim())
}

fn origin_phrase(lines: &[&str], lexicon: &Lexicon) -> Option<String> {
    for line in lines {
        for origin in &lexicon.origins {
            let Some(start) = line.find(origin.as_str()) else {
                continue;
            };
            let rest = &line[start..];

            if let Some(comma) = rest.find(',') {
                return Some(rest[..comma].trim().to_string());
            }

            let after_origin = &rest[origin.len()..];
            return match after_origin.find(' ') {
                Some(space) => Some(rest[..origin.len() + space].trim().to_string()),
                None => Some(origin.clone()),
            };
        }
    }
    None
}
