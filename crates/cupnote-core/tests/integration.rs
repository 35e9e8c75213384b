//! Integration tests for the interpretation pipeline end to end.
//!
//! Uses a MockOcr that returns canned text (or a canned failure) without
//! invoking tesseract, so these tests run without any OCR engine installed.

use cupnote_core::catalog::{builtin_catalog, load_catalog};
use cupnote_core::error::CupnoteError;
use cupnote_core::lexicon::builtin_lexicon;
use cupnote_core::model::{CatalogEntry, ErrorCode, MatchSource};
use cupnote_core::ocr::tesseract::TesseractProvider;
use cupnote_core::ocr::OcrProvider;
use cupnote_core::{interpret_text, Interpreter};
use std::path::Path;

enum MockOcr {
    Text(&'static str),
    Unavailable,
    Failed,
}

impl OcrProvider for MockOcr {
    fn extract_text(&self, _image: &[u8]) -> Result<String, CupnoteError> {
        match self {
            MockOcr::Text(text) => Ok(text.to_string()),
            MockOcr::Unavailable => Err(CupnoteError::OcrUnavailable(
                "missing credentials".into(),
            )),
            MockOcr::Failed => Err(CupnoteError::TesseractFailed {
                code: 1,
                stderr: "Error in pixReadStream".into(),
            }),
        }
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn entry(name: &str, brand: &str) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        brand: brand.to_string(),
        flavors: vec![],
    }
}

const FRITZ_BAG: &str = "FRITZ COFFEE COMPANY\nEthiopia Guji Natural\nNotes: Blueberry, Wine, Chocolate";

// ---------------------------------------------------------------------------
// Heuristic path: no catalog, every field from the extractors
// ---------------------------------------------------------------------------
#[test]
fn heuristic_bag_without_catalog() {
    let lexicon = builtin_lexicon().unwrap();
    let r = interpret_text(FRITZ_BAG, &[], &lexicon);

    assert_eq!(r.match_source, MatchSource::Heuristic);
    assert_eq!(r.cafe.as_deref(), Some("FRITZ COFFEE COMPANY"));
    assert_eq!(r.bean.as_deref(), Some("Ethiopia Guji Natural"));
    assert_eq!(r.processing.as_deref(), Some("Natural"));
    assert_eq!(r.flavor, vec!["Blueberry", "Wine", "Chocolate"]);
    assert_eq!(r.raw_text, FRITZ_BAG);
    assert!(r.score.is_none());
}

// ---------------------------------------------------------------------------
// Catalog path: the brand and origin outweigh the flavor overlap
// ---------------------------------------------------------------------------
#[test]
fn catalog_match_on_builtin_catalog() {
    let lexicon = builtin_lexicon().unwrap();
    let catalog = builtin_catalog().unwrap();
    let r = interpret_text(FRITZ_BAG, &catalog, &lexicon);

    assert_eq!(r.match_source, MatchSource::Catalog);
    assert_eq!(r.bean.as_deref(), Some("Ethiopia Yirgacheffe Konga"));
    assert_eq!(r.cafe.as_deref(), Some("Fritz Coffee Company"));
    // brand 2 x 18 + origin 2 x 8
    assert_eq!(r.score, Some(52));
    assert_eq!(r.flavor, vec!["Jasmine", "Lemon", "Peach"]);
    assert_eq!(r.processing.as_deref(), Some("Natural"));
}

#[test]
fn lot_number_selects_matching_blend() {
    let lexicon = builtin_lexicon().unwrap();
    let catalog = builtin_catalog().unwrap();
    let r = interpret_text("MOMOS COFFEE\nMomos Blend #2", &catalog, &lexicon);

    assert_eq!(r.bean.as_deref(), Some("Momos Blend #2"));
    // name 33 + brand 22 + origin 10 + word 11 + lot 10
    assert_eq!(r.score, Some(86));
    assert_eq!(r.flavor, vec!["Berry", "Caramel"]);
}

#[test]
fn korean_label_matches_korean_entry() {
    let lexicon = builtin_lexicon().unwrap();
    let catalog = builtin_catalog().unwrap();
    let r = interpret_text("테라로사\n에티오피아 예가체프\n내추럴", &catalog, &lexicon);

    assert_eq!(r.bean.as_deref(), Some("테라로사 에티오피아 예가체프"));
    assert_eq!(r.cafe.as_deref(), Some("테라로사"));
    assert_eq!(r.score, Some(63));
    assert_eq!(r.processing.as_deref(), Some("Natural"));
    assert_eq!(r.flavor, vec!["자스민", "레몬"]);
}

#[test]
fn ties_go_to_the_earlier_entry() {
    let lexicon = builtin_lexicon().unwrap();
    let catalog = vec![
        entry("Kenya Nyeri", "Gamma Roastery"),
        entry("Kenya Embu", "Gamma Roastery"),
    ];
    let r = interpret_text("Gamma Roastery Kenya", &catalog, &lexicon);
    assert_eq!(r.bean.as_deref(), Some("Kenya Nyeri"));
    assert_eq!(r.score, Some(36));
}

#[test]
fn weak_match_falls_back_to_heuristics() {
    let lexicon = builtin_lexicon().unwrap();
    let catalog = vec![entry("Kenya Nyeri", "Gamma Roastery")];
    // Only the origin hits: 2 x 5 = 10, below the threshold
    let r = interpret_text("Kenya", &catalog, &lexicon);
    assert_eq!(r.match_source, MatchSource::Heuristic);
    assert_eq!(r.bean.as_deref(), Some("Kenya"));
}

#[test]
fn wet_process_is_washed() {
    let lexicon = builtin_lexicon().unwrap();
    let r = interpret_text("Kenya Nyeri\nWet Process", &[], &lexicon);
    assert_eq!(r.processing.as_deref(), Some("Washed"));
}

#[test]
fn curated_bean_beats_label() {
    let lexicon = builtin_lexicon().unwrap();
    let r = interpret_text("Bean Name: House Espresso\nEthiopia Chelbesa", &[], &lexicon);
    assert_eq!(r.bean.as_deref(), Some("Ethiopia Chelbesa"));
}

#[test]
fn tasting_notes_keep_label_order() {
    let lexicon = builtin_lexicon().unwrap();
    let r = interpret_text("Tasting Notes: Citrus, Peach and Jasmine", &[], &lexicon);
    assert_eq!(r.flavor, vec!["Citrus", "Peach", "Jasmine"]);
}

#[test]
fn sample_catalog_file_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/catalog-sample.json");
    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog, builtin_catalog().unwrap());
}

// ---------------------------------------------------------------------------
// Image path through an OCR provider
// ---------------------------------------------------------------------------
#[test]
fn image_through_mock_ocr() {
    let interpreter = Interpreter::new(
        Some(Box::new(MockOcr::Text(FRITZ_BAG))),
        vec![],
        builtin_lexicon().unwrap(),
    );
    let r = interpreter.interpret_image(&[0x89, b'P', b'N', b'G']);
    assert!(!r.is_degraded());
    assert_eq!(r.cafe.as_deref(), Some("FRITZ COFFEE COMPANY"));
    assert_eq!(r.flavor, vec!["Blueberry", "Wine", "Chocolate"]);
}

#[test]
fn unconfigured_ocr_degrades() {
    let interpreter = Interpreter::new(None, vec![], builtin_lexicon().unwrap());
    let r = interpreter.interpret_image(b"image");

    assert_eq!(r.match_source, MatchSource::Fallback);
    assert_eq!(r.error, Some(ErrorCode::OcrProviderUnavailable));
    assert!(!r.flavor.is_empty());
    assert!(r.processing.is_some());
    assert!(r.raw_text.contains("OCR_PROVIDER_UNAVAILABLE"));
}

#[test]
fn provider_errors_map_to_codes() {
    let lexicon = builtin_lexicon().unwrap();

    let r = Interpreter::new(Some(Box::new(MockOcr::Unavailable)), vec![], lexicon.clone())
        .interpret_image(b"image");
    assert_eq!(r.error, Some(ErrorCode::OcrProviderUnavailable));
    assert!(r.raw_text.contains("missing credentials"));

    let r = Interpreter::new(Some(Box::new(MockOcr::Failed)), vec![], lexicon)
        .interpret_image(b"image");
    assert_eq!(r.error, Some(ErrorCode::OcrProviderFailed));
    assert!(r.raw_text.contains("OCR_PROVIDER_FAILED"));
    assert!(r.raw_text.contains("pixReadStream"));
}

#[test]
fn missing_tesseract_binary_is_unavailable() {
    let ocr = TesseractProvider::new().with_command("/nonexistent/cupnote-tesseract");
    let interpreter = Interpreter::new(Some(Box::new(ocr)), vec![], builtin_lexicon().unwrap());
    let r = interpreter.interpret_image(b"not really a png");
    assert_eq!(r.error, Some(ErrorCode::OcrProviderUnavailable));
}
