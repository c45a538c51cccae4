//! Aggregation of raw records into the ranked dashboard.
//!
//! Groups records by (publisher, application) or (publisher, application,
//! version) and attaches three counts to each group: all entries, duplicate
//! entries, unique entries. The result is the sorted worklist the clusterer
//! and conflict detector consume.

use crate::dedup::{duplicate_flags, KeyGranularity};
use crate::model::{AggregatedGroup, GroupKey, InstallationRecord};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// One full aggregation pass: the ranked groups plus dashboard totals.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Groups sorted descending by unique count; ties keep first-seen
    /// record order (stable sort over insertion-ordered grouping).
    pub groups: Vec<AggregatedGroup>,
    /// Number of distinct (publisher, application[, version]) rows
    pub distinct_applications: usize,
    /// Sum of duplicate entries across all groups
    pub total_duplicates: usize,
}

impl Dashboard {
    /// Look up a group by key. Linear; used by tests and small reports.
    #[must_use]
    pub fn group(&self, key: &GroupKey) -> Option<&AggregatedGroup> {
        self.groups.iter().find(|g| &g.key == key)
    }
}

#[derive(Default)]
struct Counts {
    all: usize,
    duplicates: usize,
    uniques: usize,
}

fn group_key(record: &InstallationRecord, granularity: KeyGranularity) -> GroupKey {
    match granularity {
        KeyGranularity::Unversioned => {
            GroupKey::unversioned(record.publisher.clone(), record.application.clone())
        }
        KeyGranularity::Versioned => GroupKey::versioned(
            record.publisher.clone(),
            record.application.clone(),
            record.version.clone(),
        ),
    }
}

/// Aggregate the record collection under the given key granularity.
///
/// For the versioned granularity `all == duplicates + uniques` holds per
/// group by construction, since every record is classified exactly once
/// under the same key width it is grouped by. The unversioned granularity
/// classifies with a narrower key (no version) than it groups by, so the
/// identity is not guaranteed there.
#[must_use]
pub fn aggregate(records: &[InstallationRecord], granularity: KeyGranularity) -> Dashboard {
    let flags = duplicate_flags(records, granularity);

    let mut grouped: IndexMap<GroupKey, Counts> = IndexMap::new();
    for (record, &is_duplicate) in records.iter().zip(flags.iter()) {
        let counts = grouped.entry(group_key(record, granularity)).or_default();
        counts.all += 1;
        if is_duplicate {
            counts.duplicates += 1;
        } else {
            counts.uniques += 1;
        }
    }

    let mut groups: Vec<AggregatedGroup> = grouped
        .into_iter()
        .map(|(key, counts)| AggregatedGroup {
            key,
            all_entries: counts.all,
            duplicate_entries: counts.duplicates,
            unique_entries: counts.uniques,
        })
        .collect();

    // Stable: rows with equal unique counts keep insertion order.
    groups.sort_by(|a, b| b.unique_entries.cmp(&a.unique_entries));

    let distinct_applications = groups.len();
    let total_duplicates = groups.iter().map(|g| g.duplicate_entries).sum();

    debug!(
        granularity = ?granularity,
        groups = distinct_applications,
        total_duplicates,
        "aggregated record collection"
    );

    Dashboard {
        groups,
        distinct_applications,
        total_duplicates,
    }
}
