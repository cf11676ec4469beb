//! Cost-of-living adjustment of mean salaries against a reference city.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::{PostingsError, Result};
use crate::models::EnrichedJob;
use crate::salary::round2;

/// Cost-of-living indices, keyed by composite `"city, state"` strings at
/// the city level and by bare state at the state level. The tables are read
/// only; adjustment never mutates them.
#[derive(Debug, Clone, Default)]
pub struct CostOfLivingTables {
    pub by_city: HashMap<String, f64>,
    pub by_state: HashMap<String, f64>,
}

/// Builds the composite key used for city-level lookups.
pub fn city_key(city: &str, state: &str) -> String {
    format!("{city}, {state}")
}

/// Rescales each job's mean salary by the ratio of its location's
/// cost-of-living index to the reference city's index.
///
/// City-level matches take precedence over state-level ones; a job matching
/// neither keeps `adjusted_salary: None`, as does a job with no mean
/// salary. Lookups are exact string equality, not fuzzy. Results are
/// rounded to 2 decimal places.
///
/// Fails up front with `ReferenceCityNotFound` if the reference city is
/// absent from the city table, since every ratio depends on it.
pub fn adjust_salaries(
    jobs: &[EnrichedJob],
    tables: &CostOfLivingTables,
    reference_city: &str,
) -> Result<Vec<EnrichedJob>> {
    let reference_index = *tables
        .by_city
        .get(reference_city)
        .ok_or_else(|| PostingsError::ReferenceCityNotFound(reference_city.to_string()))?;

    let adjusted = jobs
        .iter()
        .map(|job| {
            let mut job = job.clone();
            job.adjusted_salary = adjusted_salary(&job, tables, reference_index);
            job
        })
        .collect();
    Ok(adjusted)
}

fn adjusted_salary(
    job: &EnrichedJob,
    tables: &CostOfLivingTables,
    reference_index: f64,
) -> Option<f64> {
    let mean = job.mean_salary?;
    let key = city_key(&job.posting.city, &job.posting.state);
    let index = tables
        .by_city
        .get(&key)
        .or_else(|| tables.by_state.get(&job.posting.state));
    match index {
        Some(index) => Some(round2(mean * index / reference_index)),
        None => {
            debug!(location = %key, "no cost-of-living index for location");
            None
        }
    }
}
