//! Job postings normalization and analysis.
//!
//! Turns free-text salary strings into canonical `{min, max, frequency}`
//! records, annualizes them, adjusts mean salaries by cost-of-living
//! ratios, and computes aggregate views (skill demand, per-state title
//! dominance, skill co-occurrence) over the enriched rows.
//!
//! The pipeline: raw salary text is scanned for magnitudes
//! ([`salary::extract_magnitudes`]), classified by cadence
//! ([`salary::classify_frequency`]), normalized into a [`SalaryRecord`]
//! ([`salary::normalize_salary`]), and annualized ([`salary::annualize`]).
//! [`dataset::enrich`] runs the whole chain per CSV row with missing-value
//! propagation. Plotting, map rendering, and CLI surfaces are consumers of
//! this crate, not part of it.

pub mod analysis;
pub mod cost_of_living;
pub mod dataset;
pub mod errors;
pub mod models;
pub mod salary;

pub use errors::{PostingsError, Result};
pub use models::{CompensationRecord, EnrichedJob, Frequency, JobPosting, SalaryRecord};
