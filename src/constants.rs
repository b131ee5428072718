//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults.
//! To change the default model location, only edit this file.

use std::path::{Path, PathBuf};

/// Default model file name (ONNX export of the trained classifier)
pub const DEFAULT_MODEL_FILE: &str = "attrition_rf.onnx";

/// Default model directory (relative to the working directory)
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Sidecar metadata file suffix: `<model>.json`
pub const METADATA_SUFFIX: &str = ".json";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "HR Attrition Predictor";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Model path candidates, first existing one wins.
///
/// Order: `ATTRITION_MODEL_PATH` env var, then the per-user data dir
/// (`<data_dir>/AttritionPredictor/models/`), then `./models/`.
pub fn model_path_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = std::env::var("ATTRITION_MODEL_PATH") {
        candidates.push(PathBuf::from(path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        candidates.push(
            data_dir
                .join("AttritionPredictor")
                .join(DEFAULT_MODEL_DIR)
                .join(DEFAULT_MODEL_FILE),
        );
    }

    candidates.push(PathBuf::from(DEFAULT_MODEL_DIR).join(DEFAULT_MODEL_FILE));

    candidates
}

/// Sidecar metadata path for a given model path (`<model>.json`).
pub fn metadata_path_for(model_path: &Path) -> PathBuf {
    let mut name = model_path.as_os_str().to_os_string();
    name.push(METADATA_SUFFIX);
    PathBuf::from(name)
}
