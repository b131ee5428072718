//! Cross-module feature tests: encoding invariants against the layout.

use super::encode::encode;
use super::layout::{DEPARTMENT_OFFSET, FEATURE_COUNT};
use crate::logic::employee::{Department, EmployeeRecord, SalaryLevel};

fn sample_record() -> EmployeeRecord {
    EmployeeRecord {
        satisfaction_level: 50,
        last_evaluation: 0.5,
        number_project: 5,
        average_monthly_hours: 200,
        tenure: 5,
        work_accident: false,
        promotion_last_5years: false,
        salary: SalaryLevel::Medium,
        department: Department::It,
    }
}

#[test]
fn encode_is_deterministic() {
    let record = sample_record();
    assert_eq!(encode(&record), encode(&record));
}

#[test]
fn encode_one_hot_invariant_all_departments() {
    for dept in Department::ALL {
        let record = EmployeeRecord {
            department: dept,
            ..sample_record()
        };
        let vector = encode(&record);
        let block = &vector.values[DEPARTMENT_OFFSET..];

        let ones = block.iter().filter(|&&v| v == 1.0).count();
        let zeros = block.iter().filter(|&&v| v == 0.0).count();
        assert_eq!(ones, 1, "exactly one slot set for {dept}");
        assert_eq!(zeros, block.len() - 1);
        assert_eq!(block[dept.one_hot_index()], 1.0);
    }
}

#[test]
fn encode_salary_ordinal() {
    for (salary, expected) in [
        (SalaryLevel::Low, 1.0),
        (SalaryLevel::Medium, 2.0),
        (SalaryLevel::High, 3.0),
    ] {
        let record = EmployeeRecord {
            salary,
            ..sample_record()
        };
        assert_eq!(encode(&record).get_by_name("salary"), Some(expected));
    }
}

#[test]
fn encode_normalizes_satisfaction() {
    let record = EmployeeRecord {
        satisfaction_level: 20,
        ..sample_record()
    };
    let vector = encode(&record);
    assert!((vector.get_by_name("satisfaction_level").unwrap() - 0.2).abs() < 1e-6);
}

#[test]
fn encode_passes_evaluation_through() {
    let record = EmployeeRecord {
        last_evaluation: 0.87,
        ..sample_record()
    };
    assert_eq!(encode(&record).get_by_name("last_evaluation"), Some(0.87));
}

#[test]
fn encode_booleans_as_zero_one() {
    let record = EmployeeRecord {
        work_accident: true,
        promotion_last_5years: false,
        ..sample_record()
    };
    let vector = encode(&record);
    assert_eq!(vector.get_by_name("work_accident"), Some(1.0));
    assert_eq!(vector.get_by_name("promotion_last_5years"), Some(0.0));
}

#[test]
fn encode_high_risk_scenario_exact_vector() {
    // satisfaction=20, eval=0.3, projects=8, hours=280, tenure=1,
    // no accident, no promotion, low salary, Sales
    let record = EmployeeRecord {
        satisfaction_level: 20,
        last_evaluation: 0.3,
        number_project: 8,
        average_monthly_hours: 280,
        tenure: 1,
        work_accident: false,
        promotion_last_5years: false,
        salary: SalaryLevel::Low,
        department: Department::Sales,
    };
    let vector = encode(&record);

    let mut expected = [0.0f32; FEATURE_COUNT];
    expected[0] = 0.2;
    expected[1] = 0.3;
    expected[2] = 8.0;
    expected[3] = 280.0;
    expected[4] = 1.0;
    expected[5] = 0.0;
    expected[6] = 0.0;
    expected[7] = 1.0;
    expected[DEPARTMENT_OFFSET + Department::Sales.one_hot_index()] = 1.0;

    assert_eq!(vector.values, expected);

    // Sales slot set, all other department slots zero
    for (i, &v) in vector.values[DEPARTMENT_OFFSET..].iter().enumerate() {
        if i == Department::Sales.one_hot_index() {
            assert_eq!(v, 1.0);
        } else {
            assert_eq!(v, 0.0);
        }
    }
}

#[test]
fn encode_vector_carries_current_layout() {
    let vector = encode(&sample_record());
    assert!(vector.is_compatible());
}
