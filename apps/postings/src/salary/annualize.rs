use crate::models::{CompensationRecord, Frequency, SalaryRecord};

/// 40 hours/week x 4 weeks/month x 12 months/year.
const HOURLY_TO_ANNUAL: f64 = 40.0 * 4.0 * 12.0;

/// Which bound of a salary record to annualize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// Converts one bound of a salary record to an annual figure.
///
/// Multipliers: hourly x1920, weekly x52, monthly x12, yearly x1.
pub fn annualize(record: &SalaryRecord, bound: Bound) -> f64 {
    let value = match bound {
        Bound::Min => record.min_salary,
        Bound::Max => record.max_salary,
    };
    let multiplier = match record.frequency {
        Frequency::Hourly => HOURLY_TO_ANNUAL,
        Frequency::Weekly => 52.0,
        Frequency::Monthly => 12.0,
        Frequency::Yearly => 1.0,
    };
    value * multiplier
}

/// Annualized minimum compensation.
pub fn min_annual_comp(record: &SalaryRecord) -> f64 {
    annualize(record, Bound::Min)
}

/// Annualized maximum compensation.
pub fn max_annual_comp(record: &SalaryRecord) -> f64 {
    annualize(record, Bound::Max)
}

/// Annualizes both bounds at once.
pub fn annualize_record(record: &SalaryRecord) -> CompensationRecord {
    CompensationRecord {
        min_annual_comp: min_annual_comp(record),
        max_annual_comp: max_annual_comp(record),
    }
}
