use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::JobPosting;

/// The most common job title in one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateDominantTitle {
    pub state: String,
    pub title: String,
    pub count: u32,
}

/// For each state, the job title with the most postings.
///
/// Count ties resolve to the lexicographically first title, and the output
/// is sorted by state, so the result is reproducible run to run.
pub fn dominant_title_by_state(jobs: &[JobPosting]) -> Vec<StateDominantTitle> {
    let mut counts: BTreeMap<&str, BTreeMap<&str, u32>> = BTreeMap::new();
    for job in jobs {
        *counts
            .entry(job.state.as_str())
            .or_default()
            .entry(job.title.as_str())
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(state, titles)| {
            let mut best_title = "";
            let mut best_count = 0;
            for (title, count) in titles {
                if count > best_count {
                    best_title = title;
                    best_count = count;
                }
            }
            StateDominantTitle {
                state: state.to_string(),
                title: best_title.to_string(),
                count: best_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, state: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: "Acme".to_string(),
            city: "Somewhere".to_string(),
            state: state.to_string(),
            skills: None,
            salary: None,
        }
    }

    #[test]
    fn test_picks_most_common_title_per_state() {
        let jobs = vec![
            posting("Data Engineer", "TX"),
            posting("Data Engineer", "TX"),
            posting("Analyst", "TX"),
            posting("Analyst", "NY"),
        ];
        let dominant = dominant_title_by_state(&jobs);
        assert_eq!(dominant.len(), 2);
        assert_eq!(dominant[0].state, "NY");
        assert_eq!(dominant[0].title, "Analyst");
        assert_eq!(dominant[0].count, 1);
        assert_eq!(dominant[1].state, "TX");
        assert_eq!(dominant[1].title, "Data Engineer");
        assert_eq!(dominant[1].count, 2);
    }

    #[test]
    fn test_tie_breaks_to_lexicographically_first_title() {
        let jobs = vec![posting("Zookeeper", "CA"), posting("Analyst", "CA")];
        let dominant = dominant_title_by_state(&jobs);
        assert_eq!(dominant[0].title, "Analyst");
    }

    #[test]
    fn test_output_sorted_by_state() {
        let jobs = vec![posting("A", "WA"), posting("B", "AZ"), posting("C", "MN")];
        let dominant = dominant_title_by_state(&jobs);
        let states: Vec<&str> = dominant.iter().map(|d| d.state.as_str()).collect();
        assert_eq!(states, vec!["AZ", "MN", "WA"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(dominant_title_by_state(&[]).is_empty());
    }
}
