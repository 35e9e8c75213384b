use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CupnoteError {
    #[error("OCR provider unavailable: {0}")]
    OcrUnavailable(String),

    #[error("tesseract not found. Install it: brew install tesseract tesseract-lang (macOS) or apt install tesseract-ocr tesseract-ocr-kor (Linux)")]
    TesseractNotFound,

    #[error("tesseract failed with exit code {code}: {stderr}")]
    TesseractFailed { code: i32, stderr: String },

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("failed to load lexicon from {path}: {reason}")]
    LexiconLoad { path: PathBuf, reason: String },

    #[error("invalid lexicon: {0}")]
    LexiconInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CupnoteError {
    /// True when the OCR backend could not be reached or configured at all,
    /// as opposed to failing on a particular image.
    pub fn is_provider_unavailable(&self) -> bool {
        matches!(
            self,
            CupnoteError::OcrUnavailable(_) | CupnoteError::TesseractNotFound
        )
    }
}
