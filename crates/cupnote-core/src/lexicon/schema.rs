use serde::{Deserialize, Serialize};

/// Vocabulary tables consulted by the heuristic extractors.
///
/// Every list is ordered and the order is significant: the first
/// processing category, known cafe or specific bean that hits wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Canonical processing methods, scanned in declaration order.
    pub processing: Vec<ProcessingCategory>,
    /// Curated flavor vocabulary, matched case-sensitively against raw text.
    #[serde(default)]
    pub flavor_keywords: Vec<String>,
    /// Known cafe and roaster names, case variants listed explicitly.
    #[serde(default)]
    pub known_cafes: Vec<String>,
    /// Capitalized words that are never accepted as a cafe name.
    #[serde(default)]
    pub cafe_excluded_words: Vec<String>,
    /// Full bean names in "<Origin> <Region/Farm>" form.
    #[serde(default)]
    pub specific_beans: Vec<String>,
    /// Origin countries and regions (Latin and Hangul).
    #[serde(default)]
    pub origins: Vec<String>,
    /// Generic words that mark a line as a product name.
    #[serde(default)]
    pub bean_keywords: Vec<String>,
}

/// One canonical processing method with its spellings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingCategory {
    pub name: String,
    pub aliases: Vec<String>,
}
