//! Unified error types for inventory-tools.
//!
//! The engine itself is pure in-memory computation and cannot fail; errors
//! arise at the edges (ingestion, configuration, report output) and carry
//! enough context to point at the offending file or value.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for inventory-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InventoryError {
    /// Errors while reading inventory exports
    #[error("Failed to ingest inventory data: {context}")]
    Ingest {
        context: String,
        #[source]
        source: IngestErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific ingestion error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IngestErrorKind {
    #[error("Unknown export format - expected a .json or .csv inventory export")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid CSV structure at line {line}: {message}")]
    InvalidCsv { line: usize, message: String },

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Export contains no header row")]
    MissingHeader,
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("CSV serialization failed: {0}")]
    CsvError(String),

    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

/// Convenient Result type for inventory-tools operations
pub type Result<T> = std::result::Result<T, InventoryError>;

impl InventoryError {
    /// Create an ingestion error with context
    pub fn ingest(context: impl Into<String>, source: IngestErrorKind) -> Self {
        Self::Ingest {
            context: context.into(),
            source,
        }
    }

    /// Create an ingestion error for an unrecognized export format
    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::ingest(format!("at {}", path.into()), IngestErrorKind::UnknownFormat)
    }

    /// Create an ingestion error for a missing column
    pub fn missing_column(column: impl Into<String>, context: impl Into<String>) -> Self {
        Self::ingest(
            context,
            IngestErrorKind::MissingColumn {
                column: column.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::ingest(
            "JSON deserialization",
            IngestErrorKind::InvalidJson(err.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InventoryError::unknown_format("export.xlsx");
        let display = err.to_string();
        assert!(
            display.contains("ingest"),
            "Error message should mention ingestion: {}",
            display
        );

        let err = InventoryError::missing_column("Publisher", "reading header");
        assert!(err.to_string().contains("reading header"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = InventoryError::io("/data/export.csv", io_err);

        assert!(err.to_string().contains("/data/export.csv"));
    }
}
