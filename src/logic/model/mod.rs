//! Model Module - Artifact Loading & Inference
//!
//! The one external collaborator of the adapter: the serialized classifier,
//! loaded once at process start, read-only afterwards.

pub mod inference;
pub mod metadata;

// Re-export common types
pub use inference::{
    AttritionModel, Classifier, LoadedModelInfo, ModelError, ModelOutput, POSITIVE_CLASS,
};
pub use metadata::ModelMetadata;
