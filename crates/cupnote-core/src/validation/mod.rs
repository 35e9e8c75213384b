pub mod cafe;
pub mod learning;

pub use cafe::{validate_cafe_name, CafeNameCategory, CafeVerdict};
pub use learning::{LearningCandidate, LearningRejection, MappedValue, MappingKind};
