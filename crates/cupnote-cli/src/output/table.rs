use cupnote_core::catalog::MatchScore;
use cupnote_core::model::{ExtractionResult, MatchSource};
use std::fmt::Write;

const MISSING: &str = "-";

pub fn format_result(result: &ExtractionResult) -> String {
    let mut out = String::new();

    let source = match (result.match_source, result.score) {
        (MatchSource::Catalog, Some(score)) => format!("catalog (score {})", score),
        (MatchSource::Fallback, _) => match result.error {
            Some(code) => format!("fallback ({})", code),
            None => "fallback".to_string(),
        },
        (source, _) => source.to_string(),
    };

    let flavor = if result.flavor.is_empty() {
        MISSING.to_string()
    } else {
        result.flavor.join(", ")
    };

    let _ = writeln!(out, "  Bean:        {}", result.bean.as_deref().unwrap_or(MISSING));
    let _ = writeln!(out, "  Cafe:        {}", result.cafe.as_deref().unwrap_or(MISSING));
    let _ = writeln!(
        out,
        "  Processing:  {}",
        result.processing.as_deref().unwrap_or(MISSING)
    );
    let _ = writeln!(out, "  Flavor:      {}", flavor);
    let _ = writeln!(out, "  Source:      {}", source);

    if result.is_degraded() {
        let _ = writeln!(out, "\n  {}", result.raw_text);
    }

    out
}

pub fn format_ranking(ranked: &[MatchScore<'_>]) -> String {
    let mut out = String::new();

    if ranked.is_empty() {
        out.push_str("No catalog entry scored above zero.\n");
        return out;
    }

    let max_name = ranked
        .iter()
        .map(|m| m.entry.name.chars().count())
        .max()
        .unwrap_or(10);

    for m in ranked {
        let pad = max_name.saturating_sub(m.entry.name.chars().count());
        let _ = writeln!(
            out,
            "  {:>4}  {}{}  {}",
            m.score,
            m.entry.name,
            " ".repeat(pad),
            m.entry.brand
        );
        for step in &m.steps {
            let _ = writeln!(
                out,
                "          {:+4}  {:?} '{}'",
                step.points, step.kind, step.matched
            );
        }
    }

    out
}
