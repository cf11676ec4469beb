pub mod job;

pub use job::{CompensationRecord, EnrichedJob, Frequency, JobPosting, SalaryRecord};
