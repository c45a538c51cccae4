//! Ingestion of inventory exports.
//!
//! Thin I/O wrappers with no algorithmic content: they read per-workstation
//! export files into [`InstallationRecord`]s and apply the fleet filters
//! (server rows, first-party publishers) before anything reaches the
//! engine. Format is detected by file extension.

mod csv;
mod filter;
mod json;

pub use csv::read_csv_records;
pub use filter::apply_fleet_filters;
pub use json::read_json_records;

use crate::error::{InventoryError, Result};
use crate::model::InstallationRecord;
use std::path::Path;
use tracing::info;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Detect the export format from a file extension.
pub fn detect_format(path: &Path) -> Result<ExportFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json" | "jsonl") => Ok(ExportFormat::Json),
        Some("csv") => Ok(ExportFormat::Csv),
        _ => Err(InventoryError::unknown_format(path.display().to_string())),
    }
}

/// Read one export file, auto-detecting the format.
pub fn read_records(path: &Path) -> Result<Vec<InstallationRecord>> {
    let records = match detect_format(path)? {
        ExportFormat::Json => read_json_records(path)?,
        ExportFormat::Csv => read_csv_records(path)?,
    };
    info!(path = %path.display(), records = records.len(), "ingested export");
    Ok(records)
}

/// Read and concatenate several export files.
pub fn read_all_records(paths: &[impl AsRef<Path>]) -> Result<Vec<InstallationRecord>> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(read_records(path.as_ref())?);
    }
    Ok(records)
}
