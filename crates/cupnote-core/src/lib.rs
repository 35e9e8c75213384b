pub mod catalog;
pub mod error;
pub mod extract;
pub mod lexicon;
pub mod llm;
pub mod model;
pub mod normalize;
pub mod ocr;
pub mod validation;

use std::panic::{self, AssertUnwindSafe};

use catalog::find_best_match;
use error::CupnoteError;
use extract::{classify_processing, extract_bean, extract_cafe, extract_flavors};
use lexicon::schema::Lexicon;
use model::{CatalogEntry, ErrorCode, ExtractionResult, MatchSource};
use ocr::OcrProvider;
use tracing::{info, warn};

/// Main API entry point: interpret raw OCR text against a catalog snapshot.
///
/// A catalog match wins outright and supplies bean, cafe and flavors; only
/// processing is still classified from the text. Otherwise every field comes
/// from the heuristic extractors.
pub fn interpret_text(
    raw_text: &str,
    catalog: &[CatalogEntry],
    lexicon: &Lexicon,
) -> ExtractionResult {
    let processing = classify_processing(raw_text, lexicon);

    if let Some(best) = find_best_match(raw_text, catalog) {
        info!(
            bean = %best.entry.name,
            cafe = %best.entry.brand,
            score = best.score,
            "catalog match"
        );
        return ExtractionResult {
            bean: Some(best.entry.name.clone()),
            cafe: Some(best.entry.brand.clone()),
            processing,
            flavor: best
                .entry
                .flavors
                .iter()
                .filter(|f| f.chars().count() > 1)
                .cloned()
                .collect(),
            raw_text: raw_text.to_string(),
            match_source: MatchSource::Catalog,
            score: Some(best.score),
            error: None,
        };
    }

    ExtractionResult {
        bean: extract_bean(raw_text, lexicon),
        cafe: extract_cafe(raw_text, lexicon),
        processing,
        flavor: extract_flavors(raw_text, lexicon),
        raw_text: raw_text.to_string(),
        match_source: MatchSource::Heuristic,
        score: None,
        error: None,
    }
}

/// Image-to-metadata pipeline: an optional OCR backend in front of
/// [`interpret_text`].
///
/// [`Interpreter::interpret_image`] never fails. Missing or failing OCR, and
/// any panic inside the pipeline, produce a degraded result instead.
pub struct Interpreter {
    ocr: Option<Box<dyn OcrProvider>>,
    catalog: Vec<CatalogEntry>,
    lexicon: Lexicon,
}

impl Interpreter {
    pub fn new(
        ocr: Option<Box<dyn OcrProvider>>,
        catalog: Vec<CatalogEntry>,
        lexicon: Lexicon,
    ) -> Self {
        Interpreter {
            ocr,
            catalog,
            lexicon,
        }
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn interpret_text(&self, raw_text: &str) -> ExtractionResult {
        interpret_text(raw_text, &self.catalog, &self.lexicon)
    }

    /// Recognize the image and interpret the recovered text.
    pub fn interpret_image(&self, image: &[u8]) -> ExtractionResult {
        let Some(ocr) = self.ocr.as_deref() else {
            warn!("no OCR provider configured");
            return ExtractionResult::degraded(
                ErrorCode::OcrProviderUnavailable,
                "no OCR provider configured",
            );
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            ocr.extract_text(image)
                .map(|text| self.interpret_text(&text))
        }));

        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                warn!(backend = ocr.backend_name(), error = %e, "OCR failed");
                ExtractionResult::degraded(failure_code(&e), &e.to_string())
            }
            Err(payload) => {
                let detail = panic_message(payload.as_ref());
                warn!(backend = ocr.backend_name(), detail = %detail, "interpretation panicked");
                ExtractionResult::degraded(ErrorCode::InternalError, &detail)
            }
        }
    }
}

fn failure_code(e: &CupnoteError) -> ErrorCode {
    if e.is_provider_unavailable() {
        ErrorCode::OcrProviderUnavailable
    } else {
        ErrorCode::OcrProviderFailed
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::lexicon::builtin_lexicon;

    struct FixedOcr(Result<&'static str, fn() -> CupnoteError>);

    impl OcrProvider for FixedOcr {
        fn extract_text(&self, _image: &[u8]) -> Result<String, CupnoteError> {
            match &self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(make) => Err(make()),
            }
        }

        fn backend_name(&self) -> &str {
            "fixed"
        }
    }

    struct PanickingOcr;

    impl OcrProvider for PanickingOcr {
        fn extract_text(&self, _image: &[u8]) -> Result<String, CupnoteError> {
            panic!("decoder exploded")
        }

        fn backend_name(&self) -> &str {
            "panicking"
        }
    }

    fn interpreter(ocr: Option<Box<dyn OcrProvider>>) -> Interpreter {
        Interpreter::new(ocr, builtin_catalog().unwrap(), builtin_lexicon().unwrap())
    }

    #[test]
    fn test_catalog_hit_takes_entry_fields() {
        let lexicon = builtin_lexicon().unwrap();
        let catalog = vec![CatalogEntry {
            name: "Kenya Karimikui AA".into(),
            brand: "Terarosa".into(),
            flavors: vec!["Blackcurrant".into(), "X".into()],
        }];
        let r = interpret_text("TERAROSA\nKenya Karimikui AA\nWashed", &catalog, &lexicon);
        assert_eq!(r.match_source, MatchSource::Catalog);
        assert_eq!(r.bean.as_deref(), Some("Kenya Karimikui AA"));
        assert_eq!(r.cafe.as_deref(), Some("Terarosa"));
        assert_eq!(r.flavor, vec!["Blackcurrant"]);
        assert_eq!(r.processing.as_deref(), Some("Washed"));
        assert!(r.score.unwrap() >= catalog::MIN_MATCH_SCORE);
    }

    #[test]
    fn test_heuristic_when_catalog_empty() {
        let lexicon = builtin_lexicon().unwrap();
        let r = interpret_text("Tasting Notes: Citrus, Peach and Jasmine", &[], &lexicon);
        assert_eq!(r.match_source, MatchSource::Heuristic);
        assert_eq!(r.flavor, vec!["Citrus", "Peach", "Jasmine"]);
        assert!(r.score.is_none());
        assert!(r.error.is_none());
    }

    #[test]
    fn test_empty_text_yields_empty_fields() {
        let lexicon = builtin_lexicon().unwrap();
        let r = interpret_text("", &[], &lexicon);
        assert_eq!(r.bean, None);
        assert_eq!(r.cafe, None);
        assert_eq!(r.processing, None);
        assert!(r.flavor.is_empty());
        assert_eq!(r.raw_text, "");
    }

    #[test]
    fn test_image_without_provider_degrades() {
        let r = interpreter(None).interpret_image(b"png");
        assert_eq!(r.error, Some(ErrorCode::OcrProviderUnavailable));
        assert_eq!(r.match_source, MatchSource::Fallback);
        assert!(!r.flavor.is_empty());
    }

    #[test]
    fn test_image_through_provider() {
        let ocr = FixedOcr(Ok("MOMENTO\nColombia Huila\nNotes: Plum, Cocoa."));
        let r = interpreter(Some(Box::new(ocr))).interpret_image(b"png");
        assert!(!r.is_degraded());
        assert_eq!(r.raw_text, "MOMENTO\nColombia Huila\nNotes: Plum, Cocoa.");
    }

    #[test]
    fn test_provider_error_codes() {
        let unavailable = FixedOcr(Err(|| CupnoteError::TesseractNotFound));
        let r = interpreter(Some(Box::new(unavailable))).interpret_image(b"png");
        assert_eq!(r.error, Some(ErrorCode::OcrProviderUnavailable));

        let failed = FixedOcr(Err(|| CupnoteError::Ocr("unreadable image".into())));
        let r = interpreter(Some(Box::new(failed))).interpret_image(b"png");
        assert_eq!(r.error, Some(ErrorCode::OcrProviderFailed));
        assert!(r.raw_text.contains("unreadable image"));
    }

    #[test]
    fn test_panic_becomes_internal_error() {
        let r = interpreter(Some(Box::new(PanickingOcr))).interpret_image(b"png");
        assert_eq!(r.error, Some(ErrorCode::InternalError));
        assert!(r.raw_text.contains("decoder exploded"));
    }
}
