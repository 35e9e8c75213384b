use cupnote_core::error::CupnoteError;
use std::path::Path;

use crate::output;

pub fn run(
    input: &Path,
    catalog: Option<&Path>,
    no_catalog: bool,
    lexicon: Option<&Path>,
    output_format: &str,
) -> Result<(), CupnoteError> {
    let raw_text = super::read_input(input)?;
    let catalog = super::catalog_from(catalog, no_catalog)?;
    let lexicon = super::lexicon_from(lexicon)?;

    let result = cupnote_core::interpret_text(&raw_text, &catalog, &lexicon);

    match output_format {
        "json" => output::json::print_result(&result)?,
        _ => print!("{}", output::table::format_result(&result)),
    }

    Ok(())
}
