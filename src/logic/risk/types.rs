//! Risk Types
//!
//! Core types for risk-factor annotation.
//! NO logic here - only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK RULES
// ============================================================================

/// The fixed heuristic rules, in their fixed check order.
///
/// These are threshold heuristics over the raw record, independent of the
/// model's prediction and of its internal feature importances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskRule {
    LowSatisfaction,
    LowEvaluation,
    HighProjectLoad,
    HighMonthlyHours,
    ShortTenure,
    NoRecentPromotion,
    LowSalary,
}

impl RiskRule {
    /// Fixed human-readable text for this rule.
    pub fn label(&self) -> &'static str {
        match self {
            RiskRule::LowSatisfaction => "Low satisfaction level",
            RiskRule::LowEvaluation => "Low performance evaluation",
            RiskRule::HighProjectLoad => "High project load",
            RiskRule::HighMonthlyHours => "High monthly hours",
            RiskRule::ShortTenure => "Short tenure",
            RiskRule::NoRecentPromotion => "No recent promotion despite tenure",
            RiskRule::LowSalary => "Low salary level",
        }
    }
}

impl std::fmt::Display for RiskRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// RISK FACTOR
// ============================================================================

/// One triggered rule, with the formatted detail shown to the user.
///
/// Regenerated on every prediction request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub rule: RiskRule,
    /// Full display message, e.g. "Low satisfaction level (20/100)".
    pub message: String,
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_labels_match_rule_table() {
        assert_eq!(RiskRule::LowSatisfaction.label(), "Low satisfaction level");
        assert_eq!(
            RiskRule::NoRecentPromotion.label(),
            "No recent promotion despite tenure"
        );
        assert_eq!(RiskRule::LowSalary.label(), "Low salary level");
    }
}
