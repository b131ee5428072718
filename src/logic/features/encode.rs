//! Feature Encoding - EmployeeRecord -> FeatureVector
//!
//! The exact training-time encoding. Pure function: same record, same vector.
//!
//! Mapping (must match the layout in `layout.rs`):
//! - satisfaction_level: divided by 100 to normalize the 0-100 form scale to [0,1]
//! - last_evaluation: passed through (already [0,1])
//! - work_accident / promotion_last_5years: false=0, true=1
//! - salary: ordinal 1/2/3 - NOT one-hot
//! - department: one-hot over the canonical 10-slot block

use super::layout::DEPARTMENT_OFFSET;
use super::vector::FeatureVector;
use crate::logic::employee::EmployeeRecord;

/// Encode a collected record into the model's feature vector.
///
/// Field bounds are guaranteed upstream by the form widgets; this function
/// does not re-validate them.
pub fn encode(record: &EmployeeRecord) -> FeatureVector {
    let mut vector = FeatureVector::new();

    vector.set_by_name(
        "satisfaction_level",
        f32::from(record.satisfaction_level) / 100.0,
    );
    vector.set_by_name("last_evaluation", record.last_evaluation);
    vector.set_by_name("number_project", f32::from(record.number_project));
    vector.set_by_name(
        "average_monthly_hours",
        f32::from(record.average_monthly_hours),
    );
    vector.set_by_name("tenure", f32::from(record.tenure));
    vector.set_by_name("work_accident", if record.work_accident { 1.0 } else { 0.0 });
    vector.set_by_name(
        "promotion_last_5years",
        if record.promotion_last_5years { 1.0 } else { 0.0 },
    );
    vector.set_by_name("salary", f32::from(record.salary.ordinal()));

    // Department one-hot: exactly one slot in the block gets a 1.
    vector.set(DEPARTMENT_OFFSET + record.department.one_hot_index(), 1.0);

    vector
}
