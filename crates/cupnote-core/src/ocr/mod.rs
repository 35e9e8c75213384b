pub mod tesseract;

use crate::error::CupnoteError;

/// Trait for OCR backends that turn an image into raw text.
///
/// Implementations are passed to [`crate::Interpreter`] at construction
/// time; the engine never builds one itself.
pub trait OcrProvider: Send + Sync {
    /// Recognize text in the given image bytes.
    fn extract_text(&self, image: &[u8]) -> Result<String, CupnoteError>;

    /// Name of this OCR backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
