//! Model Metadata - Sidecar JSON next to the ONNX artifact
//!
//! `<model>.json` carries what the artifact itself cannot: the tuning
//! results shown to the user (best CV score, best params), an optional
//! SHA-256 digest for integrity, and the feature layout the model was
//! trained against so an ordering mismatch is caught at load time.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::ModelError;
use crate::logic::features::layout::{layout_hash, validate_layout, FEATURE_VERSION};

// ============================================================================
// METADATA
// ============================================================================

/// Sidecar metadata, deserialized from `<model>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Best cross-validation score from the tuning run (display only).
    pub best_score: f64,
    /// Best hyperparameters from the tuning run (display only).
    pub best_params: BTreeMap<String, serde_json::Value>,
    /// Model family, e.g. "random_forest".
    #[serde(default = "default_model_type")]
    pub model_type: String,
    /// Expected SHA-256 of the ONNX file, hex-encoded. Verified when present.
    #[serde(default)]
    pub sha256: Option<String>,
    /// Feature layout version the model was trained against.
    pub feature_version: u8,
    /// Feature layout hash the model was trained against.
    pub layout_hash: u32,
}

fn default_model_type() -> String {
    "random_forest".to_string()
}

impl ModelMetadata {
    /// Load and parse the sidecar file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ModelError(format!("Failed to read metadata {}: {}", path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| ModelError(format!("Failed to parse metadata {}: {}", path.display(), e)))
    }

    /// Check the trained-against layout against the current one.
    pub fn validate_layout(&self) -> Result<(), ModelError> {
        validate_layout(self.feature_version, self.layout_hash)
            .map_err(|e| ModelError(e.to_string()))
    }

    /// Verify the model bytes against the recorded digest, if any.
    pub fn verify_checksum(&self, model_bytes: &[u8]) -> Result<(), ModelError> {
        let Some(expected) = &self.sha256 else {
            log::warn!("Model metadata carries no sha256 digest - skipping integrity check");
            return Ok(());
        };

        let actual = hex::encode(Sha256::digest(model_bytes));
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(ModelError(format!(
                "Model checksum mismatch: expected {}, got {}",
                expected, actual
            )));
        }

        Ok(())
    }

    /// Metadata stub for tests and tooling, pinned to the current layout.
    pub fn for_current_layout(best_score: f64) -> Self {
        Self {
            best_score,
            best_params: BTreeMap::new(),
            model_type: default_model_type(),
            sha256: None,
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
