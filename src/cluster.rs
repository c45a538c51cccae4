//! Greedy windowed bundle clustering.
//!
//! Consumes the versioned dashboard (sorted descending by unique count) and
//! the similarity oracle, and emits one [`Bundle`] per anchor. The worklist
//! itself is never mutated; absorption state lives in a separate boolean
//! map indexed by rank position, so the aggregation snapshot stays
//! immutable.
//!
//! The algorithm is greedy and order-dependent by design: absorbing a group
//! (as anchor or member) permanently excludes it from later consideration,
//! and the overall result is entirely a function of the initial sort.
//!
//! Known quirk, preserved deliberately: each directional scan stops at the
//! FIRST neighbor outside the anchor's acceptance window. A neighbor just
//! past the bound is never revisited, even if a row beyond it would fall
//! back inside the window conceptually. The scan is a contiguous run, not a
//! filter.

use crate::config::EngineConfig;
use crate::matching::BundleMatcher;
use crate::model::{AggregatedGroup, Bundle};
use tracing::debug;

/// Cluster the ranked worklist into bundles.
///
/// `groups` must be sorted descending by `unique_entries` (the aggregator's
/// output order). The pass terminates at the first group below the
/// installation floor; the sort guarantees nothing after it qualifies
/// either.
#[must_use]
pub fn cluster_bundles(
    groups: &[AggregatedGroup],
    matcher: &BundleMatcher<'_>,
    config: &EngineConfig,
) -> Vec<Bundle> {
    let mut absorbed = vec![false; groups.len()];
    let mut bundles = Vec::new();

    for (rank, anchor) in groups.iter().enumerate() {
        let count = anchor.unique_entries;
        if count < config.min_install_count {
            break;
        }
        if absorbed[rank] {
            continue;
        }

        // Window bound is fixed once per anchor, not recomputed per
        // neighbor.
        let window = count as f64 * config.window_pct;
        let mut members = Vec::new();

        // Upward: toward higher unique counts. The worklist is descending,
        // so a lower index means a count >= the anchor's.
        for neighbor_rank in (0..rank).rev() {
            let neighbor = &groups[neighbor_rank];
            if (neighbor.unique_entries - count) as f64 > window {
                break;
            }
            if !absorbed[neighbor_rank] && matcher.is_bundle(anchor, neighbor) {
                absorbed[rank] = true;
                absorbed[neighbor_rank] = true;
                members.push(neighbor.key.clone());
            }
        }

        // Downward: toward lower unique counts.
        for (neighbor_rank, neighbor) in groups.iter().enumerate().skip(rank + 1) {
            if (count - neighbor.unique_entries) as f64 > window {
                break;
            }
            if !absorbed[neighbor_rank] && matcher.is_bundle(anchor, neighbor) {
                absorbed[rank] = true;
                absorbed[neighbor_rank] = true;
                members.push(neighbor.key.clone());
            }
        }

        bundles.push(Bundle {
            anchor: anchor.key.clone(),
            anchor_count: count,
            members,
        });
    }

    debug!(
        bundles = bundles.len(),
        grouped = absorbed.iter().filter(|&&g| g).count(),
        "clustering pass complete"
    );
    bundles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate, Dashboard};
    use crate::dedup::KeyGranularity;
    use crate::model::{InstallationRecord, WorkstationIndex};

    /// Build a fleet where `specs` lists (application, version, number of
    /// workstations); every application is installed on workstations
    /// W0..Wn drawn from a shared pool, so related apps overlap fully.
    fn fleet(specs: &[(&str, &str, usize)]) -> Vec<InstallationRecord> {
        let mut records = Vec::new();
        for (app, version, count) in specs {
            for i in 0..*count {
                records.push(InstallationRecord::new(
                    "X",
                    *app,
                    *version,
                    format!("W{i}"),
                    "2021-07-06",
                ));
            }
        }
        records
    }

    fn run(records: &[InstallationRecord], config: &EngineConfig) -> (Dashboard, Vec<Bundle>) {
        let dashboard = aggregate(records, KeyGranularity::Versioned);
        let index = WorkstationIndex::build(records);
        let matcher = BundleMatcher::new(&index, config);
        let bundles = cluster_bundles(&dashboard.groups, &matcher, config);
        (dashboard, bundles)
    }

    #[test]
    fn test_related_groups_bundle_under_higher_count_anchor() {
        let records = fleet(&[("Foo Driver 1.0", "1.0", 150), ("Foo Tool 1.0", "1.0", 145)]);
        let config = EngineConfig::default();
        let (_, bundles) = run(&records, &config);

        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].anchor.application, "Foo Driver 1.0");
        assert_eq!(bundles[0].anchor_count, 150);
        assert_eq!(bundles[0].members.len(), 1);
        assert_eq!(bundles[0].members[0].application, "Foo Tool 1.0");
    }

    #[test]
    fn test_below_floor_group_never_appears() {
        let records = fleet(&[("Big App", "1.0", 150), ("Tiny App", "1.0", 99)]);
        let config = EngineConfig::default();
        let (_, bundles) = run(&records, &config);

        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].anchor.application, "Big App");
        assert!(bundles[0].members.is_empty());
    }

    #[test]
    fn test_singleton_bundles_are_emitted() {
        let records = fleet(&[("Alpha", "1.0", 200), ("Omega", "2.0", 150)]);
        let config = EngineConfig::default();
        let (_, bundles) = run(&records, &config);

        assert_eq!(bundles.len(), 2);
        assert!(bundles.iter().all(|b| b.members.is_empty()));
    }

    #[test]
    fn test_absorbed_group_is_skipped_as_anchor() {
        let records = fleet(&[
            ("Foo Suite", "1.0", 150),
            ("Foo Suite Pro", "1.0", 148),
            ("Foo Suite Lite", "1.0", 146),
        ]);
        let config = EngineConfig::default();
        let (_, bundles) = run(&records, &config);

        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].size(), 3);
    }

    #[test]
    fn test_window_excludes_distant_counts() {
        // 300 vs 150: far outside the 10% window even though names match.
        let records = fleet(&[("Foo", "1.0", 300), ("Foo Extra", "1.0", 150)]);
        let config = EngineConfig::default();
        let (_, bundles) = run(&records, &config);

        assert_eq!(bundles.len(), 2);
        assert!(bundles.iter().all(|b| b.members.is_empty()));
    }

    #[test]
    fn test_every_qualifying_key_appears_exactly_once() {
        let records = fleet(&[
            ("Foo", "1.0", 160),
            ("Foo Plus", "1.0", 155),
            ("Bar", "2.0", 140),
            ("Baz", "3.0", 120),
        ]);
        let config = EngineConfig::default();
        let (dashboard, bundles) = run(&records, &config);

        let mut seen = std::collections::HashSet::new();
        for bundle in &bundles {
            assert!(seen.insert(bundle.anchor.clone()), "anchor repeated");
            for member in &bundle.members {
                assert!(seen.insert(member.clone()), "member repeated");
            }
        }
        for group in &dashboard.groups {
            if group.unique_entries >= config.min_install_count {
                assert!(seen.contains(&group.key), "missing {:?}", group.key);
            } else {
                assert!(!seen.contains(&group.key), "below-floor {:?}", group.key);
            }
        }
    }

    #[test]
    fn test_clustering_is_deterministic() {
        let records = fleet(&[
            ("Foo", "1.0", 160),
            ("Foo Plus", "1.0", 158),
            ("Bar", "2.0", 140),
        ]);
        let config = EngineConfig::default();
        let (_, first) = run(&records, &config);
        let (_, second) = run(&records, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_raising_floor_never_adds_bundles() {
        let records = fleet(&[
            ("Foo", "1.0", 160),
            ("Bar", "2.0", 140),
            ("Baz", "3.0", 110),
        ]);
        let low = EngineConfig::default();
        let high = EngineConfig {
            min_install_count: 150,
            ..EngineConfig::default()
        };
        let (_, low_bundles) = run(&records, &low);
        let (_, high_bundles) = run(&records, &high);
        assert!(high_bundles.len() <= low_bundles.len());
    }

    #[test]
    fn test_empty_worklist() {
        let config = EngineConfig::default();
        let index = WorkstationIndex::build(&[]);
        let matcher = BundleMatcher::new(&index, &config);
        assert!(cluster_bundles(&[], &matcher, &config).is_empty());
    }
}
