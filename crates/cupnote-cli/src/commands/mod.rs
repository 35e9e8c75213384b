pub mod catalog;
pub mod check_cafe;
pub mod extract;
pub mod lexicon;
pub mod llm;
pub mod scan;

use cupnote_core::error::CupnoteError;
use cupnote_core::lexicon::schema::Lexicon;
use cupnote_core::model::CatalogEntry;
use std::io::Read;
use std::path::Path;

/// Read a text input; "-" means stdin.
pub fn read_input(input: &Path) -> Result<String, CupnoteError> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(input)?)
}

/// The catalog to match against: a file, nothing, or the bundled sample.
pub fn catalog_from(path: Option<&Path>, disabled: bool) -> Result<Vec<CatalogEntry>, CupnoteError> {
    match (path, disabled) {
        (_, true) => Ok(Vec::new()),
        (Some(path), false) => cupnote_core::catalog::load_catalog(path),
        (None, false) => cupnote_core::catalog::builtin_catalog(),
    }
}

pub fn lexicon_from(path: Option<&Path>) -> Result<Lexicon, CupnoteError> {
    match path {
        Some(path) => cupnote_core::lexicon::load_lexicon(path),
        None => cupnote_core::lexicon::builtin_lexicon(),
    }
}
