//! Property tests over the classification and clustering pipeline.
//!
//! Small alphabets on purpose: collisions in the duplicate key and near
//! ranks in the worklist are the interesting cases, and tiny domains hit
//! them constantly.

use inventory_tools::{
    aggregate, cluster_bundles, duplicate_flags, partial_ratio, AppConfig, Engine, EngineConfig,
    InstallationRecord, KeyGranularity, BundleMatcher, WorkstationIndex,
};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = InstallationRecord> {
    (
        prop_oneof![Just("Acme"), Just("Globex"), Just("")],
        prop_oneof![
            Just("Editor"),
            Just("Editor Pro"),
            Just("Viewer"),
            Just("R")
        ],
        prop_oneof![Just("1.0"), Just("1.0.0"), Just("2.0")],
        prop_oneof![Just("W0"), Just("W1"), Just("W2"), Just("W3")],
        prop_oneof![Just("2021-07-05"), Just("2021-07-06")],
    )
        .prop_map(|(publisher, app, version, ws, scan)| {
            InstallationRecord::new(publisher, app, version, ws, scan)
        })
}

fn arb_records() -> impl Strategy<Value = Vec<InstallationRecord>> {
    prop::collection::vec(arb_record(), 0..60)
}

proptest! {
    #[test]
    fn classifier_is_deterministic(records in arb_records()) {
        let first = duplicate_flags(&records, KeyGranularity::Versioned);
        let second = duplicate_flags(&records, KeyGranularity::Versioned);
        prop_assert_eq!(first.len(), records.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn duplicates_always_come_in_groups(records in arb_records()) {
        // A record is flagged only when its key collides, so no key can
        // contribute exactly one flagged record.
        for granularity in [KeyGranularity::Unversioned, KeyGranularity::Versioned] {
            let flags = duplicate_flags(&records, granularity);
            let flagged = flags.iter().filter(|f| **f).count();
            prop_assert_ne!(flagged, 1);
        }
    }

    #[test]
    fn widening_the_key_never_adds_duplicates(records in arb_records()) {
        // Every versioned-key collision is also an unversioned-key
        // collision.
        let coarse = duplicate_flags(&records, KeyGranularity::Unversioned);
        let fine = duplicate_flags(&records, KeyGranularity::Versioned);
        for (c, f) in coarse.iter().zip(&fine) {
            prop_assert!(*c || !*f);
        }
    }

    #[test]
    fn group_counts_always_sum(records in arb_records()) {
        let dashboard = aggregate(&records, KeyGranularity::Versioned);
        let mut total = 0;
        for group in &dashboard.groups {
            prop_assert_eq!(
                group.all_entries,
                group.duplicate_entries + group.unique_entries
            );
            total += group.all_entries;
        }
        prop_assert_eq!(total, records.len());
    }

    #[test]
    fn dashboard_is_sorted_descending(records in arb_records()) {
        let dashboard = aggregate(&records, KeyGranularity::Unversioned);
        for pair in dashboard.groups.windows(2) {
            prop_assert!(pair[0].unique_entries >= pair[1].unique_entries);
        }
    }

    #[test]
    fn clustering_partitions_qualifying_groups(
        records in arb_records(),
        floor in 1usize..6,
    ) {
        let config = EngineConfig {
            min_install_count: floor,
            ..EngineConfig::default()
        };
        let dashboard = aggregate(&records, KeyGranularity::Versioned);
        let index = WorkstationIndex::build(&records);
        let matcher = BundleMatcher::new(&index, &config);
        let bundles = cluster_bundles(&dashboard.groups, &matcher, &config);

        let mut seen = std::collections::HashSet::new();
        for bundle in &bundles {
            prop_assert!(seen.insert(bundle.anchor.clone()));
            prop_assert!(bundle.anchor_count >= floor);
            for member in &bundle.members {
                prop_assert!(seen.insert(member.clone()));
            }
        }
        for group in &dashboard.groups {
            if group.unique_entries >= floor {
                prop_assert!(seen.contains(&group.key));
            }
        }
    }

    #[test]
    fn engine_runs_are_reproducible(records in arb_records()) {
        let engine = Engine::new(&AppConfig::default());
        let first = engine.run(&records);
        let second = engine.run(&records);
        prop_assert_eq!(first.dashboard.groups, second.dashboard.groups);
        prop_assert_eq!(first.bundles, second.bundles);
        prop_assert_eq!(first.conflicts, second.conflicts);
    }

    #[test]
    fn partial_ratio_is_bounded_and_symmetric(a in "[a-c ]{0,8}", b in "[a-c ]{0,8}") {
        let score = partial_ratio(&a, &b);
        prop_assert!(score <= 100);
        prop_assert_eq!(score, partial_ratio(&b, &a));
    }

    #[test]
    fn partial_ratio_of_identical_strings_is_perfect(a in "[a-z]{1,8}") {
        prop_assert_eq!(partial_ratio(&a, &a), 100);
    }
}
