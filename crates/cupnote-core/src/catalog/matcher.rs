use crate::model::CatalogEntry;
use crate::normalize::{char_len, first_digit_run, normalize};
use serde::Serialize;
use std::cmp::Reverse;
use tracing::debug;

/// Minimum score an entry needs before it is accepted as a match.
pub const MIN_MATCH_SCORE: i64 = 15;

const NAME_WEIGHT: i64 = 3;
const BRAND_WEIGHT: i64 = 2;
/// Brands this short (or shorter) only earn a flat bonus.
const SHORT_BRAND_LEN: i64 = 4;
const SHORT_BRAND_POINTS: i64 = 3;
const ORIGIN_WEIGHT: i64 = 2;
const MIN_WORD_LEN: i64 = 3;
const LOT_MATCH_POINTS: i64 = 10;
const LOT_MISMATCH_POINTS: i64 = -5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStepKind {
    Name,
    Brand,
    Origin,
    NameWord,
    LotNumber,
    Flavor,
}

/// One contribution to an entry's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreStep {
    pub kind: ScoreStepKind,
    /// The normalized fragment that was found (or compared, for lot numbers).
    pub matched: String,
    pub points: i64,
}

/// A catalog entry together with its score against one input text.
#[derive(Debug, Clone, Serialize)]
pub struct MatchScore<'a> {
    pub entry: &'a CatalogEntry,
    pub score: i64,
    pub steps: Vec<ScoreStep>,
}

/// Score a single catalog entry against already-normalized input text.
///
/// Contributions:
/// - full normalized name found: 3 x its length
/// - brand found: 2 x its length, or a flat 3 for brands of 4 chars or less
/// - origin (first word of the raw name) found: 2 x its raw length
/// - each word of the normalized name (3+ chars) found: its length, then
///   +10 / -5 when the word carries a lot number that does / does not equal
///   the first number in the text
/// - each listed flavor found: its normalized length
///
/// An empty brand or origin is a substring of every text and scores like
/// any other hit: 3 for the brand, 2 x the raw length for the origin.
pub fn score_entry<'a>(normalized_text: &str, entry: &'a CatalogEntry) -> MatchScore<'a> {
    let mut steps = Vec::new();

    let norm_name = normalize(&entry.name);
    if !norm_name.is_empty() && normalized_text.contains(&norm_name) {
        steps.push(ScoreStep {
            kind: ScoreStepKind::Name,
            matched: norm_name.clone(),
            points: NAME_WEIGHT * char_len(&norm_name),
        });
    }

    let norm_brand = normalize(&entry.brand);
    if normalized_text.contains(&norm_brand) {
        let brand_len = char_len(&norm_brand);
        let points = if brand_len > SHORT_BRAND_LEN {
            BRAND_WEIGHT * brand_len
        } else {
            SHORT_BRAND_POINTS
        };
        steps.push(ScoreStep {
            kind: ScoreStepKind::Brand,
            matched: norm_brand,
            points,
        });
    }

    if let Some(origin) = entry.name.split(char::is_whitespace).next() {
        let norm_origin = normalize(origin);
        if normalized_text.contains(&norm_origin) {
            steps.push(ScoreStep {
                kind: ScoreStepKind::Origin,
                matched: norm_origin,
                points: ORIGIN_WEIGHT * char_len(origin),
            });
        }
    }

    // Normalization strips whitespace, so this sees the whole name as one word.
    let text_digits = first_digit_run(normalized_text);
    for word in norm_name.split_whitespace() {
        if char_len(word) < MIN_WORD_LEN || !normalized_text.contains(word) {
            continue;
        }
        steps.push(ScoreStep {
            kind: ScoreStepKind::NameWord,
            matched: word.to_string(),
            points: char_len(word),
        });

        if let Some(word_digits) = first_digit_run(word) {
            let points = if text_digits == Some(word_digits) {
                LOT_MATCH_POINTS
            } else {
                LOT_MISMATCH_POINTS
            };
            steps.push(ScoreStep {
                kind: ScoreStepKind::LotNumber,
                matched: word_digits.to_string(),
                points,
            });
        }
    }

    for flavor in &entry.flavors {
        let norm_flavor = normalize(flavor);
        if !norm_flavor.is_empty() && normalized_text.contains(&norm_flavor) {
            steps.push(ScoreStep {
                kind: ScoreStepKind::Flavor,
                points: char_len(&norm_flavor),
                matched: norm_flavor,
            });
        }
    }

    MatchScore {
        entry,
        score: steps.iter().map(|s| s.points).sum(),
        steps,
    }
}

/// Find the catalog entry that best explains the raw OCR text.
///
/// Entries are scored in catalog order and a later entry only takes the lead
/// with a strictly higher score, so the first entry wins ties. Returns `None`
/// when the best score is below [`MIN_MATCH_SCORE`].
pub fn find_best_match<'a>(raw_text: &str, catalog: &'a [CatalogEntry]) -> Option<MatchScore<'a>> {
    let normalized = normalize(raw_text);
    let mut best: Option<MatchScore<'a>> = None;

    for entry in catalog {
        let scored = score_entry(&normalized, entry);
        let lead = best.as_ref().map_or(0, |b| b.score);
        if scored.score > lead {
            best = Some(scored);
        }
    }

    match best {
        Some(b) if b.score >= MIN_MATCH_SCORE => {
            debug!(name = %b.entry.name, score = b.score, "catalog match");
            Some(b)
        }
        Some(b) => {
            debug!(
                name = %b.entry.name,
                score = b.score,
                threshold = MIN_MATCH_SCORE,
                "best catalog candidate below threshold"
            );
            None
        }
        None => None,
    }
}

/// Every entry with a positive score, highest first. Equal scores keep
/// catalog order.
pub fn rank_entries<'a>(raw_text: &str, catalog: &'a [CatalogEntry]) -> Vec<MatchScore<'a>> {
    let normalized = normalize(raw_text);
    let mut scored: Vec<MatchScore<'a>> = catalog
        .iter()
        .map(|e| score_entry(&normalized, e))
        .filter(|s| s.score > 0)
        .collect();
    scored.sort_by_key(|s| Reverse(s.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, brand: &str, flavors: &[&str]) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            brand: brand.to_string(),
            flavors: flavors.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn points(score: &MatchScore, kind: ScoreStepKind) -> i64 {
        score
            .steps
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| s.points)
            .sum()
    }

    #[test]
    fn test_full_name_match_breakdown() {
        let e = entry("Ethiopia Guji Hambela", "Anthracite", &[]);
        let s = score_entry(&normalize("ETHIOPIA GUJI HAMBELA washed"), &e);
        // name 19 chars -> 57, origin "Ethiopia" -> 16, word -> 19
        assert_eq!(points(&s, ScoreStepKind::Name), 57);
        assert_eq!(points(&s, ScoreStepKind::Origin), 16);
        assert_eq!(points(&s, ScoreStepKind::NameWord), 19);
        assert_eq!(points(&s, ScoreStepKind::Brand), 0);
        assert_eq!(s.score, 92);
    }

    #[test]
    fn test_long_brand_weighted() {
        let e = entry("House Blend", "Momos Coffee", &[]);
        let s = score_entry(&normalize("MOMOS COFFEE"), &e);
        assert_eq!(points(&s, ScoreStepKind::Brand), 22);
    }

    #[test]
    fn test_short_brand_flat_bonus() {
        let e = entry("House Blend", "Tom", &[]);
        let s = score_entry(&normalize("tom's roastery"), &e);
        assert_eq!(points(&s, ScoreStepKind::Brand), 3);
    }

    #[test]
    fn test_origin_uses_raw_length() {
        let e = entry("Costa-Rica Las Lajas", "Bean Brothers", &[]);
        let s = score_entry(&normalize("costarica honey"), &e);
        // raw origin "Costa-Rica" is 10 chars even though the key is 9
        assert_eq!(points(&s, ScoreStepKind::Origin), 20);
    }

    #[test]
    fn test_flavor_contribution() {
        let e = entry("Panama Esmeralda Geisha", "Coffee Libre", &["Jasmine", "Earl Grey"]);
        let s = score_entry(&normalize("notes of jasmine and earl grey"), &e);
        assert_eq!(points(&s, ScoreStepKind::Flavor), 7 + 8);
    }

    #[test]
    fn test_lot_number_match_and_mismatch() {
        let e = entry("Geisha Lot1", "Finca", &[]);

        let same = score_entry(&normalize("Geisha Lot#1"), &e);
        assert_eq!(points(&same, ScoreStepKind::LotNumber), 10);

        // First number in the text is 2, so the lot claim is wrong
        let wrong = score_entry(&normalize("Lot2 Geisha Lot1"), &e);
        assert_eq!(points(&wrong, ScoreStepKind::LotNumber), -5);

        let base = |s: &MatchScore| s.score - points(s, ScoreStepKind::LotNumber);
        assert_eq!(base(&same), base(&wrong));
        assert_eq!(same.score - wrong.score, 15);
    }

    #[test]
    fn test_below_threshold_is_none() {
        let catalog = vec![entry("Kenya Karimikui AA", "Terarosa", &[])];
        // Only the origin hits: 2 x 5 = 10
        assert!(find_best_match("KENYA", &catalog).is_none());
        let ranked = rank_entries("KENYA", &catalog);
        assert_eq!(ranked[0].score, 10);
    }

    #[test]
    fn test_exact_name_clears_threshold() {
        let catalog = vec![entry("Kenya", "Somewhere Else", &[])];
        let best = find_best_match("Kenya", &catalog).unwrap();
        assert!(best.score >= 3 * 5);
        assert!(best.score >= MIN_MATCH_SCORE);
    }

    #[test]
    fn test_numbered_lots_pick_right_entry() {
        let catalog = vec![
            entry("Momos Blend #1", "Momos Coffee", &[]),
            entry("Momos Blend #2", "Momos Coffee", &[]),
        ];
        let best = find_best_match("MOMOS COFFEE\nMomos Blend #2", &catalog).unwrap();
        assert_eq!(best.entry.name, "Momos Blend #2");
    }

    #[test]
    fn test_first_entry_wins_ties() {
        let catalog = vec![
            entry("Kenya Karimikui", "Terarosa", &[]),
            entry("Kenya Karimikui", "Momento", &[]),
        ];
        let best = find_best_match("kenya karimikui", &catalog).unwrap();
        assert_eq!(best.entry.brand, "Terarosa");

        let ranked = rank_entries("kenya karimikui", &catalog);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].entry.brand, "Terarosa");
    }

    #[test]
    fn test_higher_score_overtakes_earlier_entry() {
        let catalog = vec![
            entry("Kenya Gakuyuini", "Terarosa", &[]),
            entry("Kenya Karimikui", "Terarosa", &[]),
        ];
        let best = find_best_match("TERAROSA Kenya Karimikui", &catalog).unwrap();
        assert_eq!(best.entry.name, "Kenya Karimikui");
    }

    #[test]
    fn test_hangul_entry() {
        let catalog = vec![entry("테라로사 에티오피아 예가체프", "테라로사", &["자스민"])];
        let best = find_best_match("테라로사\n에티오피아 예가체프 200g\n자스민, 레몬", &catalog).unwrap();
        assert!(best.score > MIN_MATCH_SCORE);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(find_best_match("anything at all", &[]).is_none());
        assert!(rank_entries("anything at all", &[]).is_empty());
    }

    #[test]
    fn test_empty_brand_earns_short_brand_bonus() {
        let e = entry("Kenya Nyeri", "", &["Plum"]);
        let s = score_entry(&normalize("Kenya Plum"), &e);
        assert_eq!(points(&s, ScoreStepKind::Brand), 3);
        // brand 3 + origin 10 + flavor 4
        assert_eq!(s.score, 17);

        let catalog = vec![e.clone()];
        let best = find_best_match("Kenya Plum", &catalog).unwrap();
        assert_eq!(best.score, 17);
    }

    #[test]
    fn test_symbol_origin_scores_raw_length() {
        let e = entry("★ Kenya Nyeri", "Terarosa", &[]);
        let s = score_entry(&normalize("unrelated"), &e);
        // "★" normalizes to nothing but is one raw character
        assert_eq!(points(&s, ScoreStepKind::Origin), 2);
    }

    #[test]
    fn test_leading_whitespace_gives_empty_origin() {
        let e = entry(" Kenya Nyeri", "Terarosa", &[]);
        let s = score_entry(&normalize("kenya"), &e);
        let origin = s
            .steps
            .iter()
            .find(|st| st.kind == ScoreStepKind::Origin)
            .unwrap();
        assert_eq!(origin.matched, "");
        assert_eq!(origin.points, 0);
    }
}
