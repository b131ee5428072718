//! Risk Rule Thresholds
//!
//! Threshold definitions for risk-factor derivation.
//! NO derivation logic here - only constants and config.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS (Constants - fixed at runtime)
// ============================================================================

/// Below this satisfaction (0-100 scale) = low satisfaction.
pub const LOW_SATISFACTION_THRESHOLD: u8 = 40;

/// Below this evaluation score = low performance.
pub const LOW_EVALUATION_THRESHOLD: f32 = 0.4;

/// Above this project count = overloaded.
///
/// NOTE: intentionally one lower than the form's advisory warning (which
/// fires above `ui::form::PROJECT_WARN_THRESHOLD` = 7). The two thresholds
/// disagree in the trained system this reproduces; they are kept distinct
/// rather than silently unified.
pub const PROJECT_OVERLOAD_THRESHOLD: u8 = 6;

/// Above this monthly-hours figure = burnout territory.
pub const HIGH_HOURS_THRESHOLD: u16 = 250;

/// Below this tenure (years) = short tenure.
pub const SHORT_TENURE_THRESHOLD: u8 = 2;

/// Above this tenure without a promotion in 5 years = stagnation.
pub const STAGNATION_TENURE_THRESHOLD: u8 = 3;

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Thresholds for risk derivation (configurable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Below this = low satisfaction (0-100 scale)
    pub low_satisfaction: u8,
    /// Below this = low evaluation
    pub low_evaluation: f32,
    /// Above this = high project load
    pub project_overload: u8,
    /// Above this = high monthly hours
    pub high_monthly_hours: u16,
    /// Below this = short tenure (years)
    pub short_tenure: u8,
    /// Above this without promotion = stagnation (years)
    pub stagnation_tenure: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_satisfaction: LOW_SATISFACTION_THRESHOLD,
            low_evaluation: LOW_EVALUATION_THRESHOLD,
            project_overload: PROJECT_OVERLOAD_THRESHOLD,
            high_monthly_hours: HIGH_HOURS_THRESHOLD,
            short_tenure: SHORT_TENURE_THRESHOLD,
            stagnation_tenure: STAGNATION_TENURE_THRESHOLD,
        }
    }
}
