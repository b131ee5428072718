//! Risk Module - Threshold Rules & Annotation
//!
//! Heuristic, threshold-based explanatory flags. Independent of the model:
//! a prediction of "stay" can still carry risk factors, and an empty list
//! does not imply a "stay" prediction.

pub mod annotate;
pub mod rules;
pub mod types;

// Re-export common types
pub use annotate::{derive_risk_factors, derive_with_thresholds};
pub use rules::RiskThresholds;
pub use types::{RiskFactor, RiskRule};
