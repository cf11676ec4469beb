use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment cadence inferred from a salary string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Hourly,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Hourly => "hourly",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        };
        f.write_str(label)
    }
}

/// Canonical form of a parsed salary string.
///
/// When the source text carried a single value, `min_salary == max_salary`.
/// When it carried two, they are kept in text order even if the first is
/// larger; the source data is taken at face value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub min_salary: f64,
    pub max_salary: f64,
    pub frequency: Frequency,
}

/// Annualized compensation bounds derived from a `SalaryRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompensationRecord {
    pub min_annual_comp: f64,
    pub max_annual_comp: f64,
}

/// One raw row of the job postings dataset.
///
/// `skills` and `salary` are frequently absent in the source data, so they
/// deserialize to `None` rather than failing the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
}

/// A posting with the derived salary fields merged back in.
///
/// Every derived field is optional: a row whose salary string is missing or
/// carries no number comes through with all of them `None`, and
/// `adjusted_salary` additionally stays `None` for locations absent from the
/// cost-of-living tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedJob {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub frequency: Option<Frequency>,
    pub min_annual_comp: Option<f64>,
    pub max_annual_comp: Option<f64>,
    pub mean_salary: Option<f64>,
    pub adjusted_salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_serde_roundtrip_lowercase() {
        let json = serde_json::to_string(&Frequency::Hourly).unwrap();
        assert_eq!(json, r#""hourly""#);
        let parsed: Frequency = serde_json::from_str(r#""yearly""#).unwrap();
        assert_eq!(parsed, Frequency::Yearly);
    }

    #[test]
    fn test_frequency_display_matches_serde() {
        for freq in [
            Frequency::Hourly,
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::Yearly,
        ] {
            let json = serde_json::to_string(&freq).unwrap();
            assert_eq!(json.trim_matches('"'), freq.to_string());
        }
    }

    #[test]
    fn test_job_posting_missing_optional_fields_deserialize_to_none() {
        let json = r#"{
            "title": "Data Engineer",
            "company": "Initech",
            "city": "Austin",
            "state": "TX"
        }"#;
        let posting: JobPosting = serde_json::from_str(json).unwrap();
        assert!(posting.skills.is_none());
        assert!(posting.salary.is_none());
    }

    #[test]
    fn test_enriched_job_flattens_posting_fields() {
        let job = EnrichedJob {
            posting: JobPosting {
                title: "SRE".to_string(),
                company: "Globex".to_string(),
                city: "Denver".to_string(),
                state: "CO".to_string(),
                skills: None,
                salary: Some("$90k-$120k annual".to_string()),
            },
            min_salary: Some(90_000.0),
            max_salary: Some(120_000.0),
            frequency: Some(Frequency::Yearly),
            min_annual_comp: Some(90_000.0),
            max_annual_comp: Some(120_000.0),
            mean_salary: Some(105_000.0),
            adjusted_salary: None,
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["title"], "SRE");
        assert_eq!(value["frequency"], "yearly");
        assert_eq!(value["mean_salary"], 105_000.0);
    }
}
