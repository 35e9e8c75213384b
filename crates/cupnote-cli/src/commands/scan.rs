use cupnote_core::error::CupnoteError;
use cupnote_core::ocr::tesseract::TesseractProvider;
use cupnote_core::Interpreter;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    image: &Path,
    catalog: Option<&Path>,
    no_catalog: bool,
    lexicon: Option<&Path>,
    tesseract: Option<PathBuf>,
    lang: Option<String>,
    output_format: &str,
) -> Result<(), CupnoteError> {
    let image_bytes = std::fs::read(image)?;

    let mut provider = TesseractProvider::from_env();
    if let Some(command) = tesseract {
        provider = provider.with_command(command);
    }
    if let Some(languages) = lang {
        provider = provider.with_languages(languages);
    }

    let interpreter = Interpreter::new(
        Some(Box::new(provider)),
        super::catalog_from(catalog, no_catalog)?,
        super::lexicon_from(lexicon)?,
    );
    let result = interpreter.interpret_image(&image_bytes);

    if let Some(code) = result.error {
        eprintln!("warning: OCR did not succeed ({code}), showing placeholder values");
    }

    match output_format {
        "json" => output::json::print_result(&result)?,
        _ => print!("{}", output::table::format_result(&result)),
    }

    Ok(())
}
