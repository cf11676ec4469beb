use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PostingsError>;

/// Library-level error type.
///
/// Per-row "unknown" outcomes (a posting without a salary string, a location
/// with no cost-of-living index) are not errors; they surface as `None`
/// fields on the row. These variants cover the failures that must stop a
/// computation with a message the caller can act on.
#[derive(Debug, Error)]
pub enum PostingsError {
    #[error("no salary value found in {0:?}")]
    NoSalaryValue(String),

    #[error("reference city {0:?} not found in the cost-of-living table")]
    ReferenceCityNotFound(String),

    #[error("invalid salary range {0:?}: expected \"min-max\" with integer bounds")]
    InvalidSalaryRange(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
