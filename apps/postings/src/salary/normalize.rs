use crate::errors::{PostingsError, Result};
use crate::models::SalaryRecord;
use crate::salary::extract::extract_magnitudes;
use crate::salary::frequency::classify_frequency;

/// Parses a free-text salary string into a canonical `SalaryRecord`.
///
/// A single extracted value is duplicated into both bounds before the
/// cadence is classified. With two or more values, the first becomes the
/// minimum and the second the maximum in text order; any further values are
/// ignored. A string with no extractable number is a
/// `PostingsError::NoSalaryValue`.
pub fn normalize_salary(salary_string: &str) -> Result<SalaryRecord> {
    let mut magnitudes = extract_magnitudes(salary_string);
    if magnitudes.is_empty() {
        return Err(PostingsError::NoSalaryValue(salary_string.to_string()));
    }
    if magnitudes.len() == 1 {
        magnitudes.push(magnitudes[0]);
    }

    let frequency = classify_frequency(salary_string, &magnitudes)?;
    Ok(SalaryRecord {
        min_salary: magnitudes[0],
        max_salary: magnitudes[1],
        frequency,
    })
}
