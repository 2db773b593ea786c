use thiserror::Error;

/// Infrastructure failures. Compliance rejections are never reported through this type;
/// they are ordinary [`Verdict`](crate::domain::verdict::Verdict) values.
#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV header is missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("Registry error: {0}")]
    Registry(String),
    #[error("Ledger error: {0}")]
    Ledger(String),
}

pub type Result<T> = std::result::Result<T, ComplianceError>;
