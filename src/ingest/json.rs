//! JSON export reader.
//!
//! Accepts either a single JSON array of records or JSON-lines (one record
//! object per line). Missing fields deserialize to empty strings via the
//! record's serde defaults.

use crate::error::{InventoryError, Result};
use crate::model::InstallationRecord;
use std::path::Path;

/// Read records from a `.json` (array) or `.jsonl` (one object per line)
/// file.
pub fn read_json_records(path: &Path) -> Result<Vec<InstallationRecord>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| InventoryError::io(path.to_path_buf(), e))?;

    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        let records: Vec<InstallationRecord> = serde_json::from_str(&content)?;
        return Ok(records);
    }

    // JSON-lines: skip blank lines, fail on the first malformed one.
    let mut records = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records.push(serde_json::from_str(line)?);
    }
    Ok(records)
}
