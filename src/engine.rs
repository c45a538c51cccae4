//! Batch engine orchestration.
//!
//! One [`Engine::run`] call takes the filtered record collection through
//! every stage in order: utility flagging, name normalization, both
//! aggregation passes, bundle clustering, and conflict detection. Execution
//! is single-threaded and synchronous; the full collection is materialized
//! before any stage runs, and no state survives across runs.

use crate::aggregate::{aggregate, Dashboard};
use crate::cluster::cluster_bundles;
use crate::config::{AppConfig, EngineConfig, FilterConfig};
use crate::conflicts::detect_conflicts;
use crate::dedup::KeyGranularity;
use crate::flags::{flag_utilities, UtilityEntry};
use crate::matching::BundleMatcher;
use crate::model::{Bundle, ConflictEntry, InstallationRecord, WorkstationIndex};
use crate::normalize::normalize_display_name;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, info_span};

/// One row of the name-normalization report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedName {
    pub old_name: String,
    pub new_name: String,
    pub count: usize,
}

/// Everything one engine run produces.
#[derive(Debug)]
pub struct EngineOutput {
    /// (publisher, application) dashboard with totals
    pub dashboard: Dashboard,
    /// (publisher, application, version) dashboard with totals
    pub versioned_dashboard: Dashboard,
    /// Bundles clustered over the versioned dashboard
    pub bundles: Vec<Bundle>,
    /// Publisher conflicts over the unversioned dashboard
    pub conflicts: Vec<ConflictEntry>,
    /// Utility (publisher, application) list with counts
    pub utilities: Vec<UtilityEntry>,
    /// Display-name normalization over business (non-utility) records,
    /// sorted descending by count
    pub normalized_names: Vec<NormalizedName>,
}

impl EngineOutput {
    /// Distinct raw business-app names versus distinct names after
    /// normalization; the gap is the redundancy the cleaner removes.
    #[must_use]
    pub fn normalization_shrinkage(&self) -> (usize, usize) {
        let old = self.normalized_names.len();
        let new: std::collections::HashSet<&str> = self
            .normalized_names
            .iter()
            .map(|n| n.new_name.as_str())
            .collect();
        (old, new.len())
    }
}

/// The deduplication and bundling engine.
pub struct Engine {
    engine_config: EngineConfig,
    filter_config: FilterConfig,
}

impl Engine {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            engine_config: config.engine.clone(),
            filter_config: config.filter.clone(),
        }
    }

    /// Run every stage over an already-filtered record collection.
    ///
    /// An empty collection produces empty outputs across the board.
    #[must_use]
    pub fn run(&self, records: &[InstallationRecord]) -> EngineOutput {
        let span = info_span!("engine_run", records = records.len());
        let _guard = span.enter();

        let flagged = flag_utilities(records, &self.filter_config);
        let business = flagged.business_records(records);
        let normalized_names = normalize_names(&business);

        let dashboard = aggregate(records, KeyGranularity::Unversioned);
        let versioned_dashboard = aggregate(records, KeyGranularity::Versioned);

        let index = WorkstationIndex::build(records);
        let matcher = BundleMatcher::new(&index, &self.engine_config);
        let bundles = cluster_bundles(&versioned_dashboard.groups, &matcher, &self.engine_config);

        let conflicts = detect_conflicts(&dashboard.groups, &self.engine_config);

        info!(
            distinct_applications = dashboard.distinct_applications,
            total_duplicates = dashboard.total_duplicates,
            bundles = bundles.len(),
            conflicts = conflicts.len(),
            "engine run complete"
        );

        EngineOutput {
            dashboard,
            versioned_dashboard,
            bundles,
            conflicts,
            utilities: flagged.utilities,
            normalized_names,
        }
    }
}

/// Group business records by raw application name and attach the cleaned
/// display name and total row count, sorted descending by count.
fn normalize_names(records: &[&InstallationRecord]) -> Vec<NormalizedName> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        *counts.entry(record.application.as_str()).or_insert(0) += 1;
    }

    let mut names: Vec<NormalizedName> = counts
        .into_iter()
        .map(|(old_name, count)| NormalizedName {
            new_name: normalize_display_name(old_name),
            old_name: old_name.to_string(),
            count,
        })
        .collect();
    names.sort_by(|a, b| b.count.cmp(&a.count));
    names
}
