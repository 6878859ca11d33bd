use std::path::PathBuf;

use thiserror::Error;

/// CSV encoding error carried by the write variants.
pub use csv::Error as CsvError;

/// Errors emitted while validating a request or writing its output.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid number of rows: {0}")]
    InvalidRowCount(i64),
    #[error("fields cannot be empty")]
    EmptyFields,
    #[error("filename cannot be empty")]
    EmptyFilename,
    #[error("Invalid fields selected: {}", .0.join(", "))]
    InvalidFields(Vec<String>),
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write header row: {0}")]
    WriteHeader(#[source] csv::Error),
    #[error("failed to write row {row}: {source}")]
    WriteRow {
        row: u64,
        #[source]
        source: csv::Error,
    },
    #[error("failed to flush output: {0}")]
    Flush(#[source] csv::Error),
}

impl GenerationError {
    /// True for the request sanity checks (row count, empty fields, empty filename).
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRowCount(_) | Self::EmptyFields | Self::EmptyFilename
        )
    }

    /// True when the field list names something outside the vocabulary.
    pub fn is_field_error(&self) -> bool {
        matches!(self, Self::InvalidFields(_))
    }
}
