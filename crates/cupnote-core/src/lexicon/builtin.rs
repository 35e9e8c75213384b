use crate::error::CupnoteError;
use crate::lexicon::schema::Lexicon;
use crate::lexicon::validate_lexicon;

const DEFAULT_LEXICON_JSON: &str = include_str!("../../../../data/lexicon.json");

/// Load the lexicon shipped with the crate.
pub fn builtin_lexicon() -> Result<Lexicon, CupnoteError> {
    let lexicon: Lexicon = serde_json::from_str(DEFAULT_LEXICON_JSON)?;
    validate_lexicon(&lexicon)?;
    Ok(lexicon)
}
