//! The `normalize` command: names-only dry run.
//!
//! Useful when tuning the stopword and tag lists: it runs ingestion and
//! display-name normalization without aggregation or clustering and prints
//! the resulting report to stdout.

use crate::config::{load_or_default, AppConfig};
use crate::engine::Engine;
use crate::error::Result;
use crate::ingest::{apply_fleet_filters, read_all_records};
use crate::reports::render_normalized_names;
use std::path::{Path, PathBuf};

/// Render the normalization report for the given exports. Returns the CSV
/// text plus the (raw, normalized) distinct-name counts.
pub fn run_normalize(
    inputs: &[PathBuf],
    config_file: Option<&Path>,
) -> Result<(String, usize, usize)> {
    let (config, _): (AppConfig, _) = load_or_default(config_file)?;

    let records = read_all_records(inputs)?;
    let records = apply_fleet_filters(records, &config.filter);

    let output = Engine::new(&config).run(&records);
    let (raw, normalized) = output.normalization_shrinkage();
    Ok((
        render_normalized_names(&output.normalized_names),
        raw,
        normalized,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_normalize_reports_shrinkage() {
        let mut export = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("tempfile");
        writeln!(export, "Publisher,Application,Version,System Name,Last HW Scan").expect("write");
        writeln!(export, "X,Studio 2019,1.0,A,2021-07-06").expect("write");
        writeln!(export, "X,Studio 2020,2.0,A,2021-07-06").expect("write");

        let (csv, raw, normalized) =
            run_normalize(&[export.path().to_path_buf()], None).expect("runs");
        assert!(csv.contains("\"Studio 2019\",\"Studio\""));
        assert_eq!(raw, 2);
        assert_eq!(normalized, 1);
    }
}
