//! Payment cadence classification from keyword cues.

use crate::errors::{PostingsError, Result};
use crate::models::Frequency;

/// Cadence cues, checked in priority order with early exit. When cues
/// overlap in a string, the earlier category wins: hourly over yearly over
/// monthly over weekly.
const CADENCE_CUES: &[(&[&str], Frequency)] = &[
    (&["hr", "hourly", "hour"], Frequency::Hourly),
    (&["yearly", "annual", "annum", "year", "yr"], Frequency::Yearly),
    (&["monthly", "mo", "month"], Frequency::Monthly),
    (&["week", "weekly"], Frequency::Weekly),
];

/// Classifies the payment cadence of a salary string.
///
/// Cue matching is substring containment on the lower-cased string, not
/// whole-word matching, so a cue inside an unrelated word matches too; an
/// accepted trade-off. With no cue present, falls back to magnitude
/// heuristics: a maximum of 500 or less reads as hourly, a minimum of
/// 35,000 or more as yearly, anything between as monthly. The fallback
/// never produces weekly.
///
/// An empty magnitude list means the string had no salary value, which is
/// reported as an error rather than an arbitrary cadence.
pub fn classify_frequency(salary_string: &str, magnitudes: &[f64]) -> Result<Frequency> {
    if magnitudes.is_empty() {
        return Err(PostingsError::NoSalaryValue(salary_string.to_string()));
    }

    let lowered = salary_string.to_lowercase();
    for (cues, frequency) in CADENCE_CUES {
        if cues.iter().any(|cue| lowered.contains(cue)) {
            return Ok(*frequency);
        }
    }

    let max = magnitudes.iter().copied().fold(f64::MIN, f64::max);
    let min = magnitudes.iter().copied().fold(f64::MAX, f64::min);
    if max <= 500.0 {
        Ok(Frequency::Hourly)
    } else if min >= 35_000.0 {
        Ok(Frequency::Yearly)
    } else {
        Ok(Frequency::Monthly)
    }
}
