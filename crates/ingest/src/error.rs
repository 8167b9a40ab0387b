//! Ingestion error taxonomy.
//!
//! Every variant aborts the whole parse; a partial record set is never
//! returned, so downstream averages cannot be skewed by silently dropped
//! rows. Row numbers are 1-based over data rows (header excluded).

use thiserror::Error;

/// Failure while turning raw CSV text into validated records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A row is missing one or more required columns (absent from the
    /// header, or present but empty). Lists every missing column for the
    /// row, not just the first.
    #[error("row {row}: missing required columns: {}", columns.join(", "))]
    MissingColumns { row: usize, columns: Vec<String> },

    /// A required numeric column holds a value that does not coerce to a
    /// number. Rejected here rather than propagated as NaN through the
    /// downstream arithmetic.
    #[error("row {row}: column '{column}' must be numeric, got '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// The date column holds a value in no recognized calendar format.
    #[error("row {row}: unrecognized date '{value}'")]
    InvalidDate { row: usize, value: String },

    /// The underlying CSV reader failed (malformed file).
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
}

impl ParseError {
    /// Data row the error refers to, when it is row-scoped.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MissingColumns { row, .. }
            | Self::InvalidNumber { row, .. }
            | Self::InvalidDate { row, .. } => Some(*row),
            Self::Csv(_) => None,
        }
    }
}
