use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Load-time failures. None of these are fatal: the service recovers to an
/// empty index and reports lookups as not found.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset '{}' is unavailable: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset contains no data rows")]
    Empty,
    #[error("dataset is missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
    #[error("line {line}: invalid value in column {column}: {reason}")]
    InvalidRow {
        line: u64,
        column: String,
        reason: String,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadErrorKind {
    DatasetUnavailable,
    AggregationError,
}

impl DatasetError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            DatasetError::Unavailable { .. } | DatasetError::Empty => {
                LoadErrorKind::DatasetUnavailable
            }
            DatasetError::MissingColumns { .. }
            | DatasetError::InvalidRow { .. }
            | DatasetError::Csv(_) => LoadErrorKind::AggregationError,
        }
    }
}
