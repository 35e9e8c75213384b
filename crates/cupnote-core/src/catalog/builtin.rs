use crate::catalog::validate_catalog;
use crate::error::CupnoteError;
use crate::model::CatalogEntry;

const SAMPLE_CATALOG_JSON: &str = include_str!("../../../../data/catalog-sample.json");

/// Load the small sample catalog shipped with the crate.
pub fn builtin_catalog() -> Result<Vec<CatalogEntry>, CupnoteError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(SAMPLE_CATALOG_JSON)?;
    validate_catalog(&entries)?;
    Ok(entries)
}
