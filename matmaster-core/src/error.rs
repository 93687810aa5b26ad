use std::fmt;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A rejected row in an uploaded file. Rows are numbered from 1, excluding the header.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)
    }
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Unsupported file format: {0} (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON upload must be an array of objects")]
    NotAnArray,

    #[error("File contains no records")]
    Empty,

    #[error("{} invalid row(s)", .0.len())]
    InvalidRows(Vec<RowError>),
}

impl ImportError {
    /// Every individual problem, one per line of output.
    pub fn details(&self) -> Vec<String> {
        match self {
            ImportError::InvalidRows(rows) => rows.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}
