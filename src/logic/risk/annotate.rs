//! Risk Factor Derivation
//!
//! ONLY the derivation logic - no types, no thresholds.
//! Input: EmployeeRecord. Output: the triggered rules, in fixed order.
//!
//! Pure function of the record: does not consult the model or its
//! prediction. Rules are evaluated independently (not mutually exclusive).

use super::rules::RiskThresholds;
use super::types::{RiskFactor, RiskRule};
use crate::logic::employee::{EmployeeRecord, SalaryLevel};

/// Derive risk factors with the default thresholds.
pub fn derive_risk_factors(record: &EmployeeRecord) -> Vec<RiskFactor> {
    derive_with_thresholds(record, &RiskThresholds::default())
}

/// Derive risk factors with custom thresholds.
///
/// Check order is fixed and matches the rule table; callers rely on it
/// when rendering.
pub fn derive_with_thresholds(
    record: &EmployeeRecord,
    thresholds: &RiskThresholds,
) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if record.satisfaction_level < thresholds.low_satisfaction {
        factors.push(RiskFactor {
            rule: RiskRule::LowSatisfaction,
            message: format!(
                "{} ({}/100)",
                RiskRule::LowSatisfaction.label(),
                record.satisfaction_level
            ),
        });
    }

    if record.last_evaluation < thresholds.low_evaluation {
        factors.push(RiskFactor {
            rule: RiskRule::LowEvaluation,
            message: format!(
                "{} ({:.1}/1.0)",
                RiskRule::LowEvaluation.label(),
                record.last_evaluation
            ),
        });
    }

    if record.number_project > thresholds.project_overload {
        factors.push(RiskFactor {
            rule: RiskRule::HighProjectLoad,
            message: format!(
                "{} ({} projects)",
                RiskRule::HighProjectLoad.label(),
                record.number_project
            ),
        });
    }

    if record.average_monthly_hours > thresholds.high_monthly_hours {
        factors.push(RiskFactor {
            rule: RiskRule::HighMonthlyHours,
            message: format!(
                "{} ({} hrs/month)",
                RiskRule::HighMonthlyHours.label(),
                record.average_monthly_hours
            ),
        });
    }

    if record.tenure < thresholds.short_tenure {
        factors.push(RiskFactor {
            rule: RiskRule::ShortTenure,
            message: format!("{} ({} years)", RiskRule::ShortTenure.label(), record.tenure),
        });
    }

    if !record.promotion_last_5years && record.tenure > thresholds.stagnation_tenure {
        factors.push(RiskFactor {
            rule: RiskRule::NoRecentPromotion,
            message: RiskRule::NoRecentPromotion.label().to_string(),
        });
    }

    if record.salary == SalaryLevel::Low {
        factors.push(RiskFactor {
            rule: RiskRule::LowSalary,
            message: RiskRule::LowSalary.label().to_string(),
        });
    }

    factors
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::employee::Department;

    fn low_risk_record() -> EmployeeRecord {
        // The "empty risk factors" scenario from the acceptance checklist
        EmployeeRecord {
            satisfaction_level: 80,
            last_evaluation: 0.9,
            number_project: 3,
            average_monthly_hours: 160,
            tenure: 5,
            work_accident: false,
            promotion_last_5years: true,
            salary: SalaryLevel::High,
            department: Department::It,
        }
    }

    fn high_risk_record() -> EmployeeRecord {
        // Every threshold breached
        EmployeeRecord {
            satisfaction_level: 20,
            last_evaluation: 0.3,
            number_project: 8,
            average_monthly_hours: 280,
            tenure: 1,
            work_accident: false,
            promotion_last_5years: false,
            salary: SalaryLevel::Low,
            department: Department::Sales,
        }
    }

    #[test]
    fn test_no_factors_for_healthy_record() {
        assert!(derive_risk_factors(&low_risk_record()).is_empty());
    }

    #[test]
    fn test_all_seven_rules_fire() {
        // tenure=1 breaches short-tenure; the stagnation rule needs tenure>3,
        // so bump tenure on a second pass to cover it.
        let factors = derive_risk_factors(&high_risk_record());
        let rules: Vec<RiskRule> = factors.iter().map(|f| f.rule).collect();
        assert_eq!(
            rules,
            vec![
                RiskRule::LowSatisfaction,
                RiskRule::LowEvaluation,
                RiskRule::HighProjectLoad,
                RiskRule::HighMonthlyHours,
                RiskRule::ShortTenure,
                RiskRule::LowSalary,
            ]
        );

        let stagnant = EmployeeRecord {
            tenure: 4,
            ..high_risk_record()
        };
        let rules: Vec<RiskRule> = derive_risk_factors(&stagnant)
            .iter()
            .map(|f| f.rule)
            .collect();
        assert!(rules.contains(&RiskRule::NoRecentPromotion));
        assert!(!rules.contains(&RiskRule::ShortTenure));
    }

    #[test]
    fn test_messages_include_rule_text() {
        let factors = derive_risk_factors(&high_risk_record());
        for factor in &factors {
            assert!(
                factor.message.contains(factor.rule.label()),
                "message {:?} should contain {:?}",
                factor.message,
                factor.rule.label()
            );
        }
    }

    #[test]
    fn test_satisfaction_monotonicity() {
        // Lowering satisfaction below 40 adds the rule and removes nothing.
        let mut record = low_risk_record();
        record.salary = SalaryLevel::Low; // one factor already present

        let before: Vec<RiskRule> = derive_risk_factors(&record).iter().map(|f| f.rule).collect();
        assert_eq!(before, vec![RiskRule::LowSalary]);

        record.satisfaction_level = 39;
        let after: Vec<RiskRule> = derive_risk_factors(&record).iter().map(|f| f.rule).collect();

        assert!(after.contains(&RiskRule::LowSatisfaction));
        for rule in before {
            assert!(after.contains(&rule), "existing factor {rule:?} must remain");
        }
    }

    #[test]
    fn test_threshold_boundaries() {
        let mut record = low_risk_record();

        record.satisfaction_level = 40; // not below 40
        assert!(derive_risk_factors(&record).is_empty());

        record.satisfaction_level = 39;
        assert_eq!(derive_risk_factors(&record).len(), 1);

        let mut record = low_risk_record();
        record.number_project = 6; // rule fires strictly above 6
        assert!(derive_risk_factors(&record).is_empty());
        record.number_project = 7;
        assert_eq!(derive_risk_factors(&record).len(), 1);

        let mut record = low_risk_record();
        record.average_monthly_hours = 250;
        assert!(derive_risk_factors(&record).is_empty());
        record.average_monthly_hours = 251;
        assert_eq!(derive_risk_factors(&record).len(), 1);
    }

    #[test]
    fn test_stagnation_needs_both_conditions() {
        let mut record = low_risk_record();
        record.promotion_last_5years = false; // tenure=5 > 3, no promotion
        let rules: Vec<RiskRule> = derive_risk_factors(&record).iter().map(|f| f.rule).collect();
        assert_eq!(rules, vec![RiskRule::NoRecentPromotion]);

        record.tenure = 3; // not strictly above 3
        assert!(derive_risk_factors(&record).is_empty());
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = RiskThresholds {
            high_monthly_hours: 150,
            ..RiskThresholds::default()
        };
        let factors = derive_with_thresholds(&low_risk_record(), &thresholds);
        let rules: Vec<RiskRule> = factors.iter().map(|f| f.rule).collect();
        assert_eq!(rules, vec![RiskRule::HighMonthlyHours]);
    }
}
