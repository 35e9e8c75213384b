use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// What a rejected cafe candidate most likely is instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CafeNameCategory {
    Cafe,
    Origin,
    Farm,
    Processing,
    Variety,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeVerdict {
    pub valid: bool,
    pub category: CafeNameCategory,
    pub reason: String,
}

static REJECT_PATTERNS: LazyLock<Vec<(Regex, CafeNameCategory, &'static str)>> =
    LazyLock::new(|| {
        use CafeNameCategory::*;
        [
            (
                r"(?i)^(PERU|ETHIOPIA|COLOMBIA|KENYA|GUATEMALA|HONDURAS|RWANDA|BURUNDI|COSTA RICA|EL SALVADOR|PANAMA|YEMEN|INDONESIA)(\s|$)",
                Origin,
                "looks like an origin country",
            ),
            (
                r"(?i)^(EL\s+\w+|LA\s+\w+|LAS\s+\w+|LOS\s+\w+|FINCA\s+\w+|HACIENDA\s+\w+)$",
                Farm,
                "looks like a farm or region name",
            ),
            (
                r"^(엘\s+\w+|라\s+\w+|로스\s+\w+|핀카\s+\w+)$",
                Farm,
                "looks like a farm or region name",
            ),
            (
                r"(?i)^(EL ROMERILLO|EL PARAISO|EL INJERTO|LA PALMA|LAS FLORES|LA ESPERANZA|LA CRISTALINA)$",
                Farm,
                "is a well-known farm name",
            ),
            (
                r"^(로메리요|파라이소|인헤르토|팔마|플로레스|에스페란사|크리스탈리나)$",
                Farm,
                "is a well-known farm name",
            ),
            (
                r"(?i)^(Natural|Washed|Honey|Semi-washed|Anaerobic|Carbonic Maceration)(\s|$)",
                Processing,
                "looks like a processing method",
            ),
            (
                r"(?i)^(Geisha|Bourbon|Typica|Caturra|Pacamara|SL28|SL34)(\s|$)",
                Variety,
                "looks like a coffee variety",
            ),
            (r"^\d+$", Other, "is only digits"),
            (r"^[A-Z]{1,3}$", Other, "is too short to be a cafe name"),
        ]
        .into_iter()
        .map(|(p, category, reason)| {
            (
                Regex::new(p).expect("valid cafe screening pattern"),
                category,
                reason,
            )
        })
        .collect()
    });

/// Screen a cafe name candidate against names that are obviously something
/// else: origins, farms, processing methods, varieties, bare numbers and
/// short letter fragments.
///
/// A candidate that passes is only plausible, not verified.
pub fn validate_cafe_name(name: &str) -> CafeVerdict {
    let name = name.trim();
    if name.is_empty() {
        return CafeVerdict {
            valid: false,
            category: CafeNameCategory::Other,
            reason: "cafe name is empty".into(),
        };
    }

    for (pattern, category, reason) in REJECT_PATTERNS.iter() {
        if pattern.is_match(name) {
            return CafeVerdict {
                valid: false,
                category: *category,
                reason: format!("'{}' {}", name, reason),
            };
        }
    }

    CafeVerdict {
        valid: true,
        category: CafeNameCategory::Cafe,
        reason: format!("'{}' passed local screening", name),
    }
}
