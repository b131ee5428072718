//! Terminal Form - Bounded Input Widgets
//!
//! Collects the nine input fields with range-constrained prompts that
//! re-ask until the value parses and lies in bounds. Downstream code relies
//! on this being the only way an `EmployeeRecord` is built interactively,
//! so no further validation happens past this point.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::logic::employee::{
    Department, EmployeeRecord, SalaryLevel, EVALUATION_MAX, EVALUATION_MIN, MONTHLY_HOURS_MAX,
    MONTHLY_HOURS_MIN, PROJECTS_MAX, PROJECTS_MIN, SATISFACTION_MAX, SATISFACTION_MIN, TENURE_MAX,
    TENURE_MIN,
};

// ============================================================================
// ADVISORY WARNINGS (form-level, distinct from the risk rules)
// ============================================================================

/// Advisory warning fires strictly above this project count.
///
/// NOTE: one higher than the risk rule's overload threshold (6); the
/// original system shipped with both values and they are kept distinct.
pub const PROJECT_WARN_THRESHOLD: u8 = 7;

/// Advisory warning fires strictly above this monthly-hours figure.
pub const HOURS_WARN_THRESHOLD: u16 = 250;

// ============================================================================
// PROMPT PRIMITIVES
// ============================================================================

fn read_trimmed<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while reading the form",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompt for a number in `[min, max]`, re-asking until valid.
fn prompt_number<T, R, W>(reader: &mut R, writer: &mut W, label: &str, min: T, max: T) -> io::Result<T>
where
    T: FromStr + PartialOrd + Copy + Display,
    R: BufRead,
    W: Write,
{
    loop {
        write!(writer, "{} [{}-{}]: ", label, min, max)?;
        writer.flush()?;

        let line = read_trimmed(reader)?;
        match line.parse::<T>() {
            Ok(value) if value >= min && value <= max => return Ok(value),
            Ok(_) => writeln!(writer, "  Value must be between {} and {}.", min, max)?,
            Err(_) => writeln!(writer, "  Not a valid number, try again.")?,
        }
    }
}

/// Prompt for a yes/no answer, re-asking until valid.
fn prompt_yes_no<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> io::Result<bool> {
    loop {
        write!(writer, "{} [y/n]: ", label)?;
        writer.flush()?;

        match read_trimmed(reader)?.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(writer, "  Please answer y or n.")?,
        }
    }
}

/// Prompt for one of a fixed list of options by number.
fn prompt_choice<T, R, W>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
    options: &[(&str, T)],
) -> io::Result<T>
where
    T: Copy,
    R: BufRead,
    W: Write,
{
    writeln!(writer, "{}:", label)?;
    for (i, (name, _)) in options.iter().enumerate() {
        writeln!(writer, "  {}. {}", i + 1, name)?;
    }

    loop {
        write!(writer, "Choice [1-{}]: ", options.len())?;
        writer.flush()?;

        let line = read_trimmed(reader)?;
        match line.parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => return Ok(options[n - 1].1),
            _ => writeln!(writer, "  Enter a number between 1 and {}.", options.len())?,
        }
    }
}

// ============================================================================
// THE FORM
// ============================================================================

/// Walk the user through the nine fields and build the record.
pub fn collect_record<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<EmployeeRecord> {
    writeln!(writer, "\n--- Employee Details ---")?;

    let satisfaction_level = prompt_number(
        reader,
        writer,
        "Satisfaction level",
        SATISFACTION_MIN,
        SATISFACTION_MAX,
    )?;

    let last_evaluation = prompt_number(
        reader,
        writer,
        "Last performance evaluation",
        EVALUATION_MIN,
        EVALUATION_MAX,
    )?;

    let number_project =
        prompt_number(reader, writer, "Number of projects", PROJECTS_MIN, PROJECTS_MAX)?;
    if number_project > PROJECT_WARN_THRESHOLD {
        writeln!(writer, "  ! High project load may increase attrition risk")?;
    }

    let average_monthly_hours = prompt_number(
        reader,
        writer,
        "Average monthly hours",
        MONTHLY_HOURS_MIN,
        MONTHLY_HOURS_MAX,
    )?;
    if average_monthly_hours > HOURS_WARN_THRESHOLD {
        writeln!(writer, "  ! High monthly hours may indicate burnout risk")?;
    }

    writeln!(writer, "\n--- Employment History ---")?;

    let tenure = prompt_number(reader, writer, "Tenure (years)", TENURE_MIN, TENURE_MAX)?;
    let work_accident = prompt_yes_no(reader, writer, "Had a work accident?")?;
    let promotion_last_5years = prompt_yes_no(reader, writer, "Promoted in last 5 years?")?;

    let salary_options: Vec<(&str, SalaryLevel)> = SalaryLevel::ALL
        .iter()
        .map(|s| (s.as_str(), *s))
        .collect();
    let salary = prompt_choice(reader, writer, "Salary level", &salary_options)?;

    let department_options: Vec<(&str, Department)> = Department::ALL
        .iter()
        .map(|d| (d.as_str(), *d))
        .collect();
    let department = prompt_choice(reader, writer, "Department", &department_options)?;

    Ok(EmployeeRecord {
        satisfaction_level,
        last_evaluation,
        number_project,
        average_monthly_hours,
        tenure,
        work_accident,
        promotion_last_5years,
        salary,
        department,
    })
}

/// "Predict another?" prompt at the end of a request.
pub fn prompt_again<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<bool> {
    prompt_yes_no(reader, writer, "\nPredict another employee?")
}

// ============================================================================
// TESTS
// ============================================================================
