//! Features Module - Feature Layout & Encoding
//!
//! Everything that turns a collected record into the numeric vector the
//! classifier was trained on. The layout is versioned and hashed so that a
//! model trained against a different column order fails loudly at load time.

pub mod encode;
pub mod layout;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use encode::encode;
pub use layout::{feature_index, feature_name, LayoutInfo, FEATURE_COUNT, FEATURE_VERSION};
pub use vector::FeatureVector;
