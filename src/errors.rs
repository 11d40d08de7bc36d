use thiserror::Error;

/// Error type that captures validation, parse, and storage failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Transaction log error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed transaction log line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Account already exists: {0}")]
    AccountExists(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
