//! Employee Record Types
//!
//! Core types for one prediction request.
//! NO logic here - only data structures and their fixed encodings.
//!
//! Salary and department are closed enums: an invalid category cannot be
//! constructed, so the key-lookup failure mode of a stringly input surface
//! does not exist.

use serde::{Deserialize, Serialize};

// ============================================================================
// INPUT BOUNDS (enforced by the form widgets, not re-validated downstream)
// ============================================================================

pub const SATISFACTION_MIN: u8 = 0;
pub const SATISFACTION_MAX: u8 = 100;

pub const EVALUATION_MIN: f32 = 0.0;
pub const EVALUATION_MAX: f32 = 1.0;

pub const PROJECTS_MIN: u8 = 1;
pub const PROJECTS_MAX: u8 = 10;

pub const MONTHLY_HOURS_MIN: u16 = 50;
pub const MONTHLY_HOURS_MAX: u16 = 400;

pub const TENURE_MIN: u8 = 0;
pub const TENURE_MAX: u8 = 10;

// ============================================================================
// SALARY LEVEL
// ============================================================================

/// Salary band, encoded ordinally (low < medium < high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryLevel {
    Low,
    Medium,
    High,
}

impl SalaryLevel {
    pub const ALL: [SalaryLevel; 3] = [SalaryLevel::Low, SalaryLevel::Medium, SalaryLevel::High];

    /// Ordinal encoding used at training time: low=1, medium=2, high=3.
    pub fn ordinal(&self) -> u8 {
        match self {
            SalaryLevel::Low => 1,
            SalaryLevel::Medium => 2,
            SalaryLevel::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryLevel::Low => "low",
            SalaryLevel::Medium => "medium",
            SalaryLevel::High => "high",
        }
    }
}

impl std::fmt::Display for SalaryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DEPARTMENT
// ============================================================================

/// Department, one-hot encoded over the fixed canonical order below.
///
/// The order of `ALL` is part of the model contract: it must match the
/// column order the classifier was trained with. Changing it requires a
/// feature layout version bump (see `features::layout`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    It,
    RandD,
    Accounting,
    Hr,
    Management,
    Marketing,
    ProductManagement,
    Sales,
    Support,
    Technical,
}

impl Department {
    /// Canonical training-time order. Index in this array = one-hot slot.
    pub const ALL: [Department; 10] = [
        Department::It,
        Department::RandD,
        Department::Accounting,
        Department::Hr,
        Department::Management,
        Department::Marketing,
        Department::ProductManagement,
        Department::Sales,
        Department::Support,
        Department::Technical,
    ];

    /// Position of this department in the canonical order.
    pub fn one_hot_index(&self) -> usize {
        match self {
            Department::It => 0,
            Department::RandD => 1,
            Department::Accounting => 2,
            Department::Hr => 3,
            Department::Management => 4,
            Department::Marketing => 5,
            Department::ProductManagement => 6,
            Department::Sales => 7,
            Department::Support => 8,
            Department::Technical => 9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::It => "IT",
            Department::RandD => "RandD",
            Department::Accounting => "Accounting",
            Department::Hr => "HR",
            Department::Management => "Management",
            Department::Marketing => "Marketing",
            Department::ProductManagement => "Product Management",
            Department::Sales => "Sales",
            Department::Support => "Support",
            Department::Technical => "Technical",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// EMPLOYEE RECORD
// ============================================================================

/// One prediction request's worth of collected inputs.
///
/// Created per form submission, discarded after rendering. Field bounds are
/// guaranteed by the form widgets (see `ui::form`); downstream code treats
/// them as already satisfied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Satisfaction on the 0-100 scale the form collects
    pub satisfaction_level: u8,
    /// Last performance review score, 0.0-1.0
    pub last_evaluation: f32,
    /// Current project count, 1-10
    pub number_project: u8,
    /// Typical monthly working hours, 50-400
    pub average_monthly_hours: u16,
    /// Years with the company, 0-10
    pub tenure: u8,
    pub work_accident: bool,
    pub promotion_last_5years: bool,
    pub salary: SalaryLevel,
    pub department: Department,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_ordinal_monotone() {
        assert_eq!(SalaryLevel::Low.ordinal(), 1);
        assert_eq!(SalaryLevel::Medium.ordinal(), 2);
        assert_eq!(SalaryLevel::High.ordinal(), 3);
        assert!(SalaryLevel::Low.ordinal() < SalaryLevel::Medium.ordinal());
        assert!(SalaryLevel::Medium.ordinal() < SalaryLevel::High.ordinal());
    }

    #[test]
    fn test_department_canonical_order() {
        assert_eq!(Department::ALL.len(), 10);
        assert_eq!(Department::It.one_hot_index(), 0);
        assert_eq!(Department::Sales.one_hot_index(), 7);
        assert_eq!(Department::Technical.one_hot_index(), 9);
    }

    #[test]
    fn test_department_indices_unique() {
        for (i, dept) in Department::ALL.iter().enumerate() {
            assert_eq!(dept.one_hot_index(), i);
        }
    }

    #[test]
    fn test_salary_serde_lowercase() {
        let json = serde_json::to_string(&SalaryLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: SalaryLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(back, SalaryLevel::High);
    }
}
