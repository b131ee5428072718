//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the exported classifier once at startup and answers one
//! label + probability query per prediction request.
//!
//! The export convention (sklearn -> ONNX with tensor probability output)
//! puts the class label in the first output and the per-class probability
//! tensor `[stay, leave]` in the second. A model without the second output
//! is rejected: there is no probability fallback.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::metadata::ModelMetadata;
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

// ============================================================================
// CONSTANTS
// ============================================================================

/// The classifier's positive class: 1 = leave.
pub const POSITIVE_CLASS: i64 = 1;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct ModelError(pub String);

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelError: {}", self.0)
    }
}

impl std::error::Error for ModelError {}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Raw per-request output of the classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelOutput {
    /// Binary class label: 0 = stay, 1 = leave.
    pub label: i64,
    pub stay_probability: f32,
    pub leave_probability: f32,
}

/// Runtime info about the loaded model (for the info block at startup).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadedModelInfo {
    pub model_path: String,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub metadata: ModelMetadata,
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// The seam between the adapter and the model backend.
pub trait Classifier {
    fn classify(&self, vector: &FeatureVector) -> Result<ModelOutput, ModelError>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// The loaded model artifact: immutable after construction.
///
/// The ONNX session needs exclusive access while running, so it sits behind
/// a mutex; nothing else is ever written after load.
#[derive(Debug)]
pub struct AttritionModel {
    session: Mutex<Session>,
    info: LoadedModelInfo,
}

impl AttritionModel {
    /// Load the artifact and its sidecar metadata. Any failure here is
    /// fatal to the caller: there is no fallback model.
    pub fn load(model_path: &Path) -> Result<Self, ModelError> {
        log::info!("Loading model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(ModelError(format!(
                "Model not found: {}",
                model_path.display()
            )));
        }

        let metadata_path = crate::constants::metadata_path_for(model_path);
        let metadata = ModelMetadata::from_file(&metadata_path)?;
        metadata.validate_layout()?;

        let model_bytes = std::fs::read(model_path)
            .map_err(|e| ModelError(format!("Failed to read model file: {}", e)))?;
        metadata.verify_checksum(&model_bytes)?;

        let session = Session::builder()
            .map_err(|e| ModelError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError(format!("Failed to set optimization: {}", e)))?
            .commit_from_memory(&model_bytes)
            .map_err(|e| ModelError(format!("Failed to load model: {}", e)))?;

        log::info!(
            "Model loaded: {} (best CV score {:.2})",
            metadata.model_type,
            metadata.best_score
        );

        Ok(Self {
            session: Mutex::new(session),
            info: LoadedModelInfo {
                model_path: model_path.display().to_string(),
                loaded_at: chrono::Utc::now(),
                metadata,
            },
        })
    }

    pub fn info(&self) -> &LoadedModelInfo {
        &self.info
    }
}

impl Classifier for AttritionModel {
    fn classify(&self, vector: &FeatureVector) -> Result<ModelOutput, ModelError> {
        // The vector carries its layout; reject anything stale before it
        // reaches the session.
        vector
            .validate()
            .map_err(|e| ModelError(e.to_string()))?;

        let mut session_guard = self.session.lock();
        let session = &mut *session_guard;

        // Output convention: [0] = label, [1] = probabilities.
        let output_names: Vec<String> =
            session.outputs.iter().map(|o| o.name.clone()).collect();
        if output_names.len() < 2 {
            return Err(ModelError(
                "Model does not expose probability estimates".to_string(),
            ));
        }

        let input_array =
            Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), vector.values.to_vec())
                .map_err(|e| ModelError(format!("Failed to create array: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ModelError(format!("Failed to create tensor: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError(format!("Inference failed: {}", e)))?;

        // Label tensor (i64, shape [1])
        let label_output = outputs
            .get(&output_names[0])
            .ok_or_else(|| ModelError("No label output from model".to_string()))?;
        let label_tensor = label_output
            .try_extract_tensor::<i64>()
            .map_err(|e| ModelError(format!("Failed to extract label: {}", e)))?;
        let label = *label_tensor
            .1
            .first()
            .ok_or_else(|| ModelError("Empty label output".to_string()))?;

        // Probability tensor (f32, shape [1, 2] = [stay, leave])
        let prob_output = outputs
            .get(&output_names[1])
            .ok_or_else(|| ModelError("No probability output from model".to_string()))?;
        let prob_tensor = prob_output
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError(format!("Failed to extract probabilities: {}", e)))?;
        let probs = prob_tensor.1;
        if probs.len() < 2 {
            return Err(ModelError(format!(
                "Expected 2 class probabilities, got {}",
                probs.len()
            )));
        }

        let stay_probability = probs[0];
        let leave_probability = probs[1];
        if !stay_probability.is_finite() || !leave_probability.is_finite() {
            return Err(ModelError("Non-finite probability from model".to_string()));
        }

        Ok(ModelOutput {
            label,
            stay_probability,
            leave_probability,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
