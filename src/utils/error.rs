use std::path::PathBuf;
use thiserror::Error;

use crate::validation::RecordIssue;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Document unreadable: {}: {reason}", .path.display())]
    DocumentUnreadable { path: PathBuf, reason: String },
    #[error("No data extracted from {}", .0.display())]
    NoDataExtracted(PathBuf),
    #[error("Invalid record: {0}")]
    InvalidRecord(RecordIssue),
    #[error("Write failure: {}: {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ExtractError::DocumentUnreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write_failure(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ExtractError::WriteFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
