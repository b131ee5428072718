//! Inference Adapter
//!
//! The one in-scope pipeline: encode -> predict -> annotate, executed once
//! per form submission. Stateless apart from the classifier handed in at
//! construction time.

use serde::{Deserialize, Serialize};

use super::employee::EmployeeRecord;
use super::features::encode;
use super::model::{Classifier, ModelError, POSITIVE_CLASS};
use super::risk::{derive_with_thresholds, RiskFactor, RiskThresholds};

/// How far the two class probabilities may drift from summing to 1 before
/// the model output is rejected as malformed. Well-formed classifiers land
/// within float rounding (< 1e-6); this guard only catches broken exports.
pub const PROBABILITY_SUM_TOLERANCE: f32 = 1e-3;

// ============================================================================
// OUTCOME TYPES
// ============================================================================

/// Binary attrition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttritionLabel {
    /// Likely to stay with the company
    Stay,
    /// At risk of leaving
    Leave,
}

impl AttritionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttritionLabel::Stay => "stay",
            AttritionLabel::Leave => "leave",
        }
    }
}

impl std::fmt::Display for AttritionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the presentation layer renders for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub label: AttritionLabel,
    pub stay_probability: f32,
    pub leave_probability: f32,
    /// Triggered heuristic rules, in fixed rule-table order.
    pub risk_factors: Vec<RiskFactor>,
    pub inference_time_us: u64,
}

// ============================================================================
// ADAPTER
// ============================================================================

/// Ties the feature encoder, the classifier and the risk rules together.
pub struct InferenceAdapter<C: Classifier> {
    classifier: C,
    thresholds: RiskThresholds,
}

impl<C: Classifier> InferenceAdapter<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            thresholds: RiskThresholds::default(),
        }
    }

    pub fn with_thresholds(classifier: C, thresholds: RiskThresholds) -> Self {
        Self {
            classifier,
            thresholds,
        }
    }

    /// Run one full prediction: encode the record, query the classifier,
    /// derive the risk annotations.
    pub fn predict(&self, record: &EmployeeRecord) -> Result<PredictionOutcome, ModelError> {
        let start_time = std::time::Instant::now();

        let vector = encode(record);
        log::debug!("Encoded feature vector: {}", vector.to_log_entry());

        let output = self.classifier.classify(&vector)?;

        let sum = output.stay_probability + output.leave_probability;
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(ModelError(format!(
                "Class probabilities sum to {} - model output is not a distribution",
                sum
            )));
        }

        // Label follows the classifier's binary output, not a probability
        // threshold of our own.
        let label = if output.label == POSITIVE_CLASS {
            AttritionLabel::Leave
        } else {
            AttritionLabel::Stay
        };

        let risk_factors = derive_with_thresholds(record, &self.thresholds);
        let inference_time_us = start_time.elapsed().as_micros() as u64;

        log::info!(
            "Prediction: {} (leave {:.1}%, {} risk factors, {}us)",
            label,
            output.leave_probability * 100.0,
            risk_factors.len(),
            inference_time_us
        );

        Ok(PredictionOutcome {
            label,
            stay_probability: output.stay_probability,
            leave_probability: output.leave_probability,
            risk_factors,
            inference_time_us,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
