//! Skill demand aggregations: per-job match percentage, top-N counts
//! against an injected catalogue, and pairwise co-occurrence.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::JobPosting;

/// Flat skill taxonomy from the source dataset. Injected into
/// [`top_skills`] as a plain slice so callers can swap in their own
/// catalogue without touching the counting logic.
pub const DEFAULT_SKILL_CATALOGUE: &[&str] = &[
    "Azure AD",
    ".net",
    "oauth",
    "valet key",
    "api",
    "azure AD",
    "AAA game engine experience",
    "C/C++ programming",
    "BS CS/CE",
    "Azure",
    "Active Directory",
    "SSO",
    "SAML",
    "OAuth",
    "OpenID",
    "Window",
    "AD",
    "SCCM",
    "ServiceNow",
    "IT infrastructure",
    "DHCP",
    "DNS",
    "Python",
    "PHP",
    "MySQL",
    "SDLC",
    "ASP",
    ".NET",
    "SQL",
    "JavaScript",
    "HTML",
    ".Net",
    "C#",
    "CSS",
    "J2EE",
    "Java",
    "Research",
    "Test",
    "A/V",
    "Assembly",
    "Perl",
    "Bash",
    "Windows",
    "UNIX",
    "Linux",
    "Excel",
    "PowerPoint",
    "SAS",
    "Oracle",
    "IT",
    "Biometrics",
    "DNA",
    "Project Manager",
    "Automotive",
    "API",
    "Ruby on Rails",
    "Swift",
    "Kotlin",
    "Release",
    "Apache",
    "Unity",
    "Unreal Engine",
    "OpenGL",
    "DirectX",
    "Machine Learning",
    "Deep Learning",
    "Natural Language Processing",
    "Computer Vision",
    "Data Science",
    "Big Data",
    "Hadoop",
    "Spark",
    "Cassandra",
    "MongoDB",
    "Elasticsearch",
    "Redis",
    "RabbitMQ",
    "Git",
    "Jenkins",
    "Ansible",
    "Puppet",
    "Chef",
    "Nagios",
    "New Relic",
    "Splunk",
    "Grafana",
    "Prometheus",
    "ELK Stack",
    "Apache Kafka",
    "RESTful APIs",
    "GraphQL",
    "WebSockets",
    "OAuth 2.0",
    "OpenID Connect",
    "SAML 2.0",
    "JWT",
    "OAuth2/OIDC libraries",
];

/// A skill and how many postings mention it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u32,
}

/// Percentage of `target_skills` covered by each posting, by row
/// correspondence.
///
/// A posting without a skills field yields `None` for that row. An empty
/// target list also yields `None` per row, since coverage of nothing is
/// undefined.
pub fn skill_match(jobs: &[JobPosting], target_skills: &[&str]) -> Vec<Option<f64>> {
    let target: BTreeSet<&str> = target_skills.iter().copied().collect();
    if target.is_empty() {
        return jobs.iter().map(|_| None).collect();
    }
    jobs.iter()
        .map(|job| {
            let skills = job.skills.as_deref()?;
            let job_set: BTreeSet<&str> = skills.split(", ").collect();
            let overlap = job_set.intersection(&target).count();
            Some(overlap as f64 / target.len() as f64 * 100.0)
        })
        .collect()
}

/// Counts catalogue skills across all postings and returns the `n` most
/// frequent. Tokens are trimmed before the exact catalogue comparison.
/// Count ties break lexicographically so output order is reproducible.
pub fn top_skills(jobs: &[JobPosting], n: usize, catalogue: &[&str]) -> Vec<SkillCount> {
    let catalogue_set: BTreeSet<&str> = catalogue.iter().copied().collect();
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for job in jobs {
        let skills = match job.skills.as_deref() {
            Some(s) => s,
            None => continue,
        };
        for token in skills.split(',') {
            if let Some(&skill) = catalogue_set.get(token.trim()) {
                *counts.entry(skill).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<SkillCount> = counts
        .into_iter()
        .map(|(skill, count)| SkillCount {
            skill: skill.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    ranked.truncate(n);
    ranked
}

/// Pairwise co-mention counts across postings.
///
/// Skills are deduplicated within a posting, so each pair counts at most
/// once per posting. Postings without a skills field are skipped. The
/// nested map is ordered, so iteration order is stable.
pub fn skill_cooccurrence(jobs: &[JobPosting]) -> BTreeMap<String, BTreeMap<String, u32>> {
    let mut counts: BTreeMap<String, BTreeMap<String, u32>> = BTreeMap::new();
    for job in jobs {
        let skills = match job.skills.as_deref() {
            Some(s) => s,
            None => continue,
        };
        let set: BTreeSet<&str> = skills.split(", ").collect();
        for &skill in &set {
            let row = counts.entry(skill.to_string()).or_default();
            for &other in &set {
                if skill != other {
                    *row.entry(other.to_string()).or_insert(0) += 1;
                }
            }
        }
    }
    counts
}
