use crate::errors::{PostingsError, Result};
use crate::models::EnrichedJob;

/// Keeps jobs whose annual compensation lies entirely within `range`,
/// given as `"min-max"` (integer bounds). Jobs without annualized bounds
/// are excluded.
pub fn filter_by_salary_range(jobs: &[EnrichedJob], range: &str) -> Result<Vec<EnrichedJob>> {
    let (min, max) = parse_range(range)?;
    Ok(jobs
        .iter()
        .filter(|job| match (job.min_annual_comp, job.max_annual_comp) {
            (Some(lo), Some(hi)) => lo >= min && hi <= max,
            _ => false,
        })
        .cloned()
        .collect())
}

fn parse_range(range: &str) -> Result<(f64, f64)> {
    let invalid = || PostingsError::InvalidSalaryRange(range.to_string());
    let (min, max) = range.split_once('-').ok_or_else(invalid)?;
    let min: i64 = min.trim().parse().map_err(|_| invalid())?;
    let max: i64 = max.trim().parse().map_err(|_| invalid())?;
    Ok((min as f64, max as f64))
}
