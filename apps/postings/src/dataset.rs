//! CSV loading and row-wise enrichment of job postings.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::models::{EnrichedJob, JobPosting};
use crate::salary::{annualize_record, contains_number, normalize_salary, round2};

/// Reads a headered CSV of job postings from any reader.
pub fn load_jobs<R: Read>(reader: R) -> Result<Vec<JobPosting>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut jobs = Vec::new();
    for row in csv_reader.deserialize() {
        jobs.push(row?);
    }
    Ok(jobs)
}

/// Convenience wrapper over [`load_jobs`] for a file on disk.
pub fn load_jobs_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<JobPosting>> {
    load_jobs(File::open(path)?)
}

/// Runs the salary pipeline over every posting, merging the derived fields
/// back by row correspondence.
///
/// A row whose salary field is absent or carries no extractable number
/// comes through with all derived fields `None`; one bad row never fails
/// the batch. `mean_salary` is the midpoint of the annualized bounds.
/// Row order is preserved; each row is independent of the others.
pub fn enrich(jobs: Vec<JobPosting>) -> Vec<EnrichedJob> {
    jobs.into_iter().map(enrich_one).collect()
}

fn enrich_one(posting: JobPosting) -> EnrichedJob {
    let record = posting
        .salary
        .as_deref()
        .filter(|text| contains_number(text))
        .and_then(|text| match normalize_salary(text) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(title = %posting.title, %err, "salary not enrichable");
                None
            }
        });

    match record {
        Some(record) => {
            let comp = annualize_record(&record);
            EnrichedJob {
                min_salary: Some(record.min_salary),
                max_salary: Some(record.max_salary),
                frequency: Some(record.frequency),
                min_annual_comp: Some(comp.min_annual_comp),
                max_annual_comp: Some(comp.max_annual_comp),
                mean_salary: Some(round2((comp.min_annual_comp + comp.max_annual_comp) / 2.0)),
                adjusted_salary: None,
                posting,
            }
        }
        None => EnrichedJob {
            min_salary: None,
            max_salary: None,
            frequency: None,
            min_annual_comp: None,
            max_annual_comp: None,
            mean_salary: None,
            adjusted_salary: None,
            posting,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;

    const CSV_FIXTURE: &str = "\
title,company,city,state,skills,salary
Data Engineer,Initech,Austin,TX,\"Python, SQL\",$90k-$120k annual
Barista,BeanCo,Portland,OR,,$15-$20
Analyst,Globex,Fargo,ND,\"Excel\",
";

    #[test]
    fn test_load_jobs_reads_rows_in_order() {
        let jobs = load_jobs(CSV_FIXTURE.as_bytes()).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].title, "Data Engineer");
        assert_eq!(jobs[1].company, "BeanCo");
        assert_eq!(jobs[2].state, "ND");
    }

    #[test]
    fn test_load_jobs_empty_cells_become_none() {
        let jobs = load_jobs(CSV_FIXTURE.as_bytes()).unwrap();
        assert!(jobs[1].skills.is_none() || jobs[1].skills.as_deref() == Some(""));
        let salary = jobs[2].salary.as_deref().unwrap_or("");
        assert!(salary.is_empty());
    }

    #[test]
    fn test_enrich_fills_derived_fields() {
        let jobs = load_jobs(CSV_FIXTURE.as_bytes()).unwrap();
        let enriched = enrich(jobs);

        let engineer = &enriched[0];
        assert_eq!(engineer.min_salary, Some(90_000.0));
        assert_eq!(engineer.max_salary, Some(120_000.0));
        assert_eq!(engineer.frequency, Some(Frequency::Yearly));
        assert_eq!(engineer.min_annual_comp, Some(90_000.0));
        assert_eq!(engineer.max_annual_comp, Some(120_000.0));
        assert_eq!(engineer.mean_salary, Some(105_000.0));

        let barista = &enriched[1];
        assert_eq!(barista.frequency, Some(Frequency::Hourly));
        assert_eq!(barista.min_annual_comp, Some(15.0 * 1920.0));
        assert_eq!(barista.max_annual_comp, Some(20.0 * 1920.0));
    }

    #[test]
    fn test_enrich_propagates_missing_salary_as_none() {
        let jobs = load_jobs(CSV_FIXTURE.as_bytes()).unwrap();
        let enriched = enrich(jobs);

        let analyst = &enriched[2];
        assert_eq!(analyst.min_salary, None);
        assert_eq!(analyst.frequency, None);
        assert_eq!(analyst.mean_salary, None);
        assert_eq!(analyst.adjusted_salary, None);
    }

    #[test]
    fn test_enrich_tolerates_unparseable_salary_text() {
        let posting = JobPosting {
            title: "Intern".to_string(),
            company: "Acme".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            skills: None,
            salary: Some("competitive".to_string()),
        };
        let enriched = enrich(vec![posting]);
        assert_eq!(enriched[0].min_salary, None);
        assert_eq!(enriched[0].frequency, None);
    }

    #[test]
    fn test_enrich_preserves_row_order() {
        let jobs = load_jobs(CSV_FIXTURE.as_bytes()).unwrap();
        let titles: Vec<String> = enrich(jobs)
            .into_iter()
            .map(|j| j.posting.title)
            .collect();
        assert_eq!(titles, vec!["Data Engineer", "Barista", "Analyst"]);
    }
}
