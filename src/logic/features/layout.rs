//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema the model is trained against.**
//!
//! Rules:
//! 1. Add feature -> increment FEATURE_VERSION
//! 2. Change order -> increment FEATURE_VERSION
//! 3. Remove feature -> increment FEATURE_VERSION
//!
//! The layout hash travels with the model's sidecar metadata, so a model
//! trained against a different column order is rejected at load time instead
//! of silently producing garbage predictions.

use crc32fast::Hasher;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version.
/// MUST be incremented when the layout changes.
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in the exact order they appear in the vector.
/// This is the SINGLE SOURCE OF TRUTH for the feature layout.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Scalar fields (0-7) ===
    "satisfaction_level",      // 0: satisfaction, normalized from 0-100 to [0,1]
    "last_evaluation",         // 1: last review score, already [0,1]
    "number_project",          // 2: project count
    "average_monthly_hours",   // 3: monthly hours
    "tenure",                  // 4: years at company
    "work_accident",           // 5: 0/1
    "promotion_last_5years",   // 6: 0/1
    "salary",                  // 7: ordinal 1/2/3 (low/medium/high)
    // === Department one-hot (8-17), canonical order ===
    "department_it",                 // 8
    "department_randd",              // 9
    "department_accounting",         // 10
    "department_hr",                 // 11
    "department_management",         // 12
    "department_marketing",          // 13
    "department_product_management", // 14
    "department_sales",              // 15
    "department_support",            // 16
    "department_technical",          // 17
];

/// Total number of features.
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 18;

/// Index of the first department one-hot slot.
pub const DEPARTMENT_OFFSET: usize = 8;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout.
/// Used to detect layout mismatches against model metadata at load time.
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    // Include version in hash
    hasher.update(&[FEATURE_VERSION]);

    // Hash all feature names in order
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

static LAYOUT_HASH: Lazy<u32> = Lazy::new(compute_layout_hash);

/// Get the layout hash (computed once, inputs are const).
pub fn layout_hash() -> u32 {
    *LAYOUT_HASH
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when a feature layout doesn't match the expected one.
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version, self.expected_hash, self.actual_version, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that incoming layout metadata matches the current layout.
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few).
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index.
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 18);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_department_block_is_ten_wide() {
        assert_eq!(FEATURE_COUNT - DEPARTMENT_OFFSET, 10);
        for name in &FEATURE_LAYOUT[DEPARTMENT_OFFSET..] {
            assert!(name.starts_with("department_"));
        }
    }

    #[test]
    fn test_layout_hash_consistency() {
        let hash1 = compute_layout_hash();
        let hash2 = compute_layout_hash();
        assert_eq!(hash1, hash2);
        assert_eq!(hash1, layout_hash());
    }

    #[test]
    fn test_layout_hash_non_zero() {
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout_success() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash()).is_ok());
    }

    #[test]
    fn test_validate_layout_version_mismatch() {
        assert!(validate_layout(FEATURE_VERSION + 1, layout_hash()).is_err());
    }

    #[test]
    fn test_validate_layout_hash_mismatch() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash().wrapping_add(1)).is_err());
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("satisfaction_level"), Some(0));
        assert_eq!(feature_index("salary"), Some(7));
        assert_eq!(feature_index("department_it"), Some(8));
        assert_eq!(feature_index("department_technical"), Some(17));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("satisfaction_level"));
        assert_eq!(feature_name(17), Some("department_technical"));
        assert_eq!(feature_name(100), None);
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::current();
        assert_eq!(info.version, FEATURE_VERSION);
        assert_eq!(info.feature_count, FEATURE_COUNT);
        assert_eq!(info.feature_names.len(), FEATURE_COUNT);
    }
}
