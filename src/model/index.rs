//! Precomputed workstation lookup for similarity checks.

use super::InstallationRecord;
use std::collections::{HashMap, HashSet};

/// Application name -> set of distinct workstations carrying it.
///
/// The workstation-overlap check runs once per candidate pair during
/// clustering; building this index once per engine run replaces a linear
/// scan over the full record collection per comparison.
#[derive(Debug, Default)]
pub struct WorkstationIndex {
    by_application: HashMap<String, HashSet<String>>,
}

impl WorkstationIndex {
    /// Build the index from the full record collection.
    #[must_use]
    pub fn build(records: &[InstallationRecord]) -> Self {
        let mut by_application: HashMap<String, HashSet<String>> = HashMap::new();
        for record in records {
            by_application
                .entry(record.application.clone())
                .or_default()
                .insert(record.workstation_id.clone());
        }
        Self { by_application }
    }

    /// Workstations carrying the given application, if any were observed.
    #[must_use]
    pub fn workstations_of(&self, application: &str) -> Option<&HashSet<String>> {
        self.by_application.get(application)
    }

    /// Jaccard overlap between the workstation sets of two applications,
    /// expressed as a percentage in `[0.0, 100.0]`.
    ///
    /// Returns `None` when both sets are empty or unknown: the ratio is
    /// undefined there, and callers must treat it as a non-match rather
    /// than divide by zero.
    #[must_use]
    pub fn overlap_pct(&self, app_a: &str, app_b: &str) -> Option<f64> {
        let empty = HashSet::new();
        let set_a = self.workstations_of(app_a).unwrap_or(&empty);
        let set_b = self.workstations_of(app_b).unwrap_or(&empty);

        let union = set_a.union(set_b).count();
        if union == 0 {
            return None;
        }
        let intersection = set_a.intersection(set_b).count();
        Some(intersection as f64 / union as f64 * 100.0)
    }

    /// Number of distinct applications in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_application.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_application.is_empty()
    }
}
