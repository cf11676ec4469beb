//! Numeric magnitude extraction from free-text salary strings.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Runs of digits and periods. Deliberately loose: the dataset contains
    // malformed tokens like "1.2.3", which are skipped at parse time.
    static ref NUMERIC_TOKEN: Regex = Regex::new(r"[0-9.]+").unwrap();
}

/// Returns true if the string contains at least one digit.
pub fn contains_number(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Extracts every numeric magnitude from a salary string, in scan order.
///
/// The input is lower-cased and comma thousands-separators are stripped
/// before scanning. A `k` immediately following a number scales it by
/// 1,000 and an `m` by 1,000,000; the suffix is read at each match's own
/// position, so a value that repeats in the string is scaled independently
/// per occurrence. Results are rounded to 2 decimal places.
///
/// A string with no extractable number yields an empty vec, never an
/// error; callers decide whether that is fatal.
pub fn extract_magnitudes(salary_string: &str) -> Vec<f64> {
    let normalized = salary_string.to_lowercase().replace(',', "");
    let mut magnitudes = Vec::new();
    for token in NUMERIC_TOKEN.find_iter(&normalized) {
        let value: f64 = match token.as_str().parse() {
            Ok(value) => value,
            // Matches the token grammar but is not a number ("1.2.3", ".").
            Err(_) => continue,
        };
        let multiplier = match normalized[token.end()..].chars().next() {
            Some('k') => 1_000.0,
            Some('m') => 1_000_000.0,
            _ => 1.0,
        };
        magnitudes.push(round2(value * multiplier));
    }
    magnitudes
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
