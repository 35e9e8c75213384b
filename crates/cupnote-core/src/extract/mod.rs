//! Fallback extractors used when no catalog entry matches.
//!
//! Each extractor is an independent pure function of the raw OCR text and
//! the lexicon; none of them sees the others' output.

pub mod bean;
pub mod cafe;
pub mod flavor;
pub mod processing;

pub use bean::extract_bean;
pub use cafe::extract_cafe;
pub use flavor::extract_flavors;
pub use processing::classify_processing;
