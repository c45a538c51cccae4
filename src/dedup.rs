//! Duplicate-installation detection.
//!
//! A record is a duplicate when at least one other record shares its
//! composite key: application, workstation, and last-scan timestamp, plus
//! the version string for the versioned pass. All colliding records are
//! flagged; the classifier deliberately does not elect a "first" survivor,
//! because it produces counts for the dashboard rather than a reduced
//! record set.

use crate::model::InstallationRecord;
use std::collections::HashMap;

/// Which composite key the classifier (and the aggregation built on it)
/// uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyGranularity {
    /// (application, workstation, last-scan)
    Unversioned,
    /// (application, version, workstation, last-scan)
    Versioned,
}

/// Duplicate key of one record under the given granularity.
fn duplicate_key(record: &InstallationRecord, granularity: KeyGranularity) -> (String, String) {
    // The unit separator keeps "ab"+"c" and "a"+"bc" from colliding.
    let head = match granularity {
        KeyGranularity::Unversioned => record.application.clone(),
        KeyGranularity::Versioned => {
            format!("{}\u{1f}{}", record.application, record.version)
        }
    };
    let tail = format!("{}\u{1f}{}", record.workstation_id, record.last_scan);
    (head, tail)
}

/// Flag each record in the collection as duplicate (`true`) or unique
/// (`false`).
///
/// The output is positionally aligned with the input slice. Running the
/// classifier twice over the same collection yields identical flags; it
/// reads the collection but never reorders or reduces it.
#[must_use]
pub fn duplicate_flags(
    records: &[InstallationRecord],
    granularity: KeyGranularity,
) -> Vec<bool> {
    let mut occurrences: HashMap<(String, String), usize> = HashMap::new();
    for record in records {
        *occurrences.entry(duplicate_key(record, granularity)).or_insert(0) += 1;
    }

    records
        .iter()
        .map(|record| occurrences[&duplicate_key(record, granularity)] > 1)
        .collect()
}
