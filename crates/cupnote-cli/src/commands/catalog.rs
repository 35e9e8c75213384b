use cupnote_core::catalog::{self, rank_entries};
use cupnote_core::error::CupnoteError;
use std::path::Path;

use crate::output;

pub fn list(file: Option<&Path>) -> Result<(), CupnoteError> {
    let entries = super::catalog_from(file, false)?;

    let max_name = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(10);

    println!("{} catalog entries:\n", entries.len());
    for entry in &entries {
        let pad = max_name.saturating_sub(entry.name.chars().count());
        print!("  {}{}  {}", entry.name, " ".repeat(pad), entry.brand);
        if !entry.flavors.is_empty() {
            print!("  [{}]", entry.flavors.join(", "));
        }
        println!();
    }
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), CupnoteError> {
    let entries = catalog::load_catalog(file)?;

    println!("Catalog '{}' is valid.", file.display());
    println!("  Entries: {}", entries.len());

    let mut warnings = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.brand.trim().is_empty() {
            warnings.push(format!("entry {} ('{}') has no brand", i, entry.name));
        }
        if entry.flavors.iter().any(|f| f.chars().count() <= 1) {
            warnings.push(format!(
                "entry {} ('{}') has flavors of one character or less, they will be dropped",
                i, entry.name
            ));
        }
        if entries[..i].iter().any(|prev| prev.name == entry.name) {
            warnings.push(format!(
                "entry {} duplicates the name '{}', the earlier entry wins ties",
                i, entry.name
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

pub fn rank(
    input: &Path,
    file: Option<&Path>,
    top: Option<usize>,
    output_format: &str,
) -> Result<(), CupnoteError> {
    let raw_text = super::read_input(input)?;
    let entries = super::catalog_from(file, false)?;

    let mut ranked = rank_entries(&raw_text, &entries);
    if let Some(n) = top {
        ranked.truncate(n);
    }

    match output_format {
        "json" => output::json::print_ranking(&ranked)?,
        _ => print!("{}", output::table::format_ranking(&ranked)),
    }

    Ok(())
}
