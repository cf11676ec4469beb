//! Salary-string normalization pipeline.
//!
//! Raw text flows through extraction (`extract`), cadence classification
//! (`frequency`), and normalization (`normalize`) into a `SalaryRecord`,
//! which `annualize` converts to yearly compensation bounds.

pub mod annualize;
pub mod extract;
pub mod frequency;
pub mod normalize;

pub use annualize::{annualize, annualize_record, max_annual_comp, min_annual_comp, Bound};
pub use extract::{contains_number, extract_magnitudes};
pub use frequency::classify_frequency;
pub use normalize::normalize_salary;

pub(crate) use extract::round2;
