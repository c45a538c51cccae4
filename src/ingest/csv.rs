//! CSV export reader.
//!
//! A minimal RFC-4180 reader (quoted fields, embedded commas, doubled
//! quotes) with header-based column mapping, because the scan tooling has
//! shipped the workstation and OS columns under several names over the
//! years.

use crate::error::{IngestErrorKind, InventoryError, Result};
use crate::model::InstallationRecord;
use std::path::Path;

/// Accepted header spellings per logical column. Matching is
/// case-insensitive on the trimmed header cell.
const PUBLISHER_HEADERS: &[&str] = &["publisher"];
const APPLICATION_HEADERS: &[&str] = &["application"];
const VERSION_HEADERS: &[&str] = &["version"];
const WORKSTATION_HEADERS: &[&str] = &[
    "workstation_id",
    "system name",
    "encrypted workstation name",
];
const SCAN_HEADERS: &[&str] = &["last_scan", "last hw scan"];
const OS_HEADERS: &[&str] = &["operating_system", "os", "c054"];

struct ColumnMap {
    publisher: Option<usize>,
    application: usize,
    version: Option<usize>,
    workstation: usize,
    scan: usize,
    os: Option<usize>,
}

fn find_column(header: &[String], names: &[&str]) -> Option<usize> {
    header.iter().position(|cell| {
        let cell = cell.trim().to_lowercase();
        names.contains(&cell.as_str())
    })
}

fn map_columns(header: &[String], path: &Path) -> Result<ColumnMap> {
    let context = || format!("reading header of {}", path.display());
    let required = |names: &[&str]| {
        find_column(header, names)
            .ok_or_else(|| InventoryError::missing_column(names[0], context()))
    };

    Ok(ColumnMap {
        publisher: find_column(header, PUBLISHER_HEADERS),
        application: required(APPLICATION_HEADERS)?,
        version: find_column(header, VERSION_HEADERS),
        workstation: required(WORKSTATION_HEADERS)?,
        scan: required(SCAN_HEADERS)?,
        os: find_column(header, OS_HEADERS),
    })
}

/// Read records from a CSV export.
///
/// Publisher, version, and OS columns are optional (missing values become
/// empty strings); application, workstation, and scan-date columns are
/// required.
pub fn read_csv_records(path: &Path) -> Result<Vec<InstallationRecord>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| InventoryError::io(path.to_path_buf(), e))?;
    let mut rows = parse_csv(&content)?;
    if rows.is_empty() {
        return Err(InventoryError::ingest(
            format!("at {}", path.display()),
            IngestErrorKind::MissingHeader,
        ));
    }

    let header = rows.remove(0);
    let columns = map_columns(&header, path)?;

    let cell = |row: &[String], idx: Option<usize>| {
        idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
    };

    Ok(rows
        .into_iter()
        .map(|row| InstallationRecord {
            publisher: cell(&row, columns.publisher),
            application: cell(&row, Some(columns.application)),
            version: cell(&row, columns.version),
            workstation_id: cell(&row, Some(columns.workstation)),
            last_scan: cell(&row, Some(columns.scan)),
            operating_system: cell(&row, columns.os),
        })
        .collect())
}

/// Parse CSV text into rows of fields, honoring quoted fields with embedded
/// commas, newlines, and doubled quotes.
fn parse_csv(content: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => {
                if field.is_empty() {
                    in_quotes = true;
                } else {
                    return Err(InventoryError::ingest(
                        "parsing CSV",
                        IngestErrorKind::InvalidCsv {
                            line,
                            message: "quote inside unquoted field".to_string(),
                        },
                    ));
                }
            }
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                line += 1;
                row.push(std::mem::take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err(InventoryError::ingest(
            "parsing CSV",
            IngestErrorKind::InvalidCsv {
                line,
                message: "unterminated quoted field".to_string(),
            },
        ));
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    Ok(rows)
}
