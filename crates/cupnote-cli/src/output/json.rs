use cupnote_core::catalog::MatchScore;
use cupnote_core::error::CupnoteError;
use cupnote_core::llm::LlmExtraction;
use cupnote_core::model::ExtractionResult;
use cupnote_core::validation::CafeVerdict;

pub fn print_result(result: &ExtractionResult) -> Result<(), CupnoteError> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

pub fn print_ranking(ranked: &[MatchScore<'_>]) -> Result<(), CupnoteError> {
    println!("{}", serde_json::to_string_pretty(ranked)?);
    Ok(())
}

pub fn print_verdict(verdict: &CafeVerdict) -> Result<(), CupnoteError> {
    println!("{}", serde_json::to_string_pretty(verdict)?);
    Ok(())
}

pub fn print_llm(extraction: &LlmExtraction) -> Result<(), CupnoteError> {
    println!("{}", serde_json::to_string_pretty(extraction)?);
    Ok(())
}
