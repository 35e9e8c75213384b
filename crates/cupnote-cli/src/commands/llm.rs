use cupnote_core::error::CupnoteError;
use cupnote_core::llm::{build_llm_prompt, parse_llm_response};
use std::path::Path;

use crate::output;

pub fn prompt(input: &Path) -> Result<(), CupnoteError> {
    let raw_text = super::read_input(input)?;
    print!("{}", build_llm_prompt(&raw_text));
    Ok(())
}

pub fn parse(response: &Path, raw: &Path, confidence: Option<f64>) -> Result<(), CupnoteError> {
    let response = super::read_input(response)?;
    let raw_text = super::read_input(raw)?;

    let extraction = parse_llm_response(&raw_text, &response, confidence);
    if let Some(ref error) = extraction.error {
        eprintln!("warning: {error}");
    }
    output::json::print_llm(&extraction)
}
