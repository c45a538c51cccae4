//! Aggregated group, bundle, and conflict types derived from raw records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one dashboard row: an application under one publisher,
/// optionally pinned to a version.
///
/// Two records share a key iff all constituent fields are string-equal,
/// case-sensitively and without normalization. In particular `"1.0"` and
/// `"1.0.0"` are distinct versions by design; version strings are never
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub publisher: String,
    pub application: String,
    /// `None` for the unversioned aggregation, `Some` for the versioned one
    pub version: Option<String>,
}

impl GroupKey {
    /// Key for the unversioned aggregation (publisher, application).
    #[must_use]
    pub fn unversioned(publisher: impl Into<String>, application: impl Into<String>) -> Self {
        Self {
            publisher: publisher.into(),
            application: application.into(),
            version: None,
        }
    }

    /// Key for the versioned aggregation (publisher, application, version).
    #[must_use]
    pub fn versioned(
        publisher: impl Into<String>,
        application: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            publisher: publisher.into(),
            application: application.into(),
            version: Some(version.into()),
        }
    }

    /// Render as the `"application || publisher || version"` row label used
    /// by the bundle report.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!(
            "{} || {} || {}",
            self.application,
            self.publisher,
            self.version.as_deref().unwrap_or("")
        )
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}

/// One row of the ranked dashboard: a [`GroupKey`] with its installation
/// counts.
///
/// The snapshot produced by the aggregator is immutable; clustering state
/// ("has this row been absorbed into a bundle yet") lives in a separate
/// absorption map inside the clusterer, never on the group itself.
///
/// For the versioned aggregation `all_entries == duplicate_entries +
/// unique_entries` holds by construction. For the unversioned aggregation it
/// need not hold exactly: duplicate detection there uses a narrower key (no
/// version) than the grouping key carries counts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedGroup {
    pub key: GroupKey,
    pub all_entries: usize,
    pub duplicate_entries: usize,
    pub unique_entries: usize,
}

/// A cluster of dashboard rows judged to represent the same underlying
/// product.
///
/// The anchor is the highest-ranked row that initiated the cluster; members
/// are the rows absorbed into it, in absorption order (rows scanned above
/// the anchor first, then rows scanned below). A bundle may have zero
/// members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub anchor: GroupKey,
    pub anchor_count: usize,
    pub members: Vec<GroupKey>,
}

impl Bundle {
    /// Total number of dashboard rows covered by this bundle.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.members.len()
    }
}

/// An application name attached to two or more distinct publisher strings,
/// each above the reporting threshold. Flagged for human review; the engine
/// never guesses which publisher spelling is canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub application: String,
    /// Distinct publisher strings in dashboard rank order
    pub publishers: Vec<String>,
}
