//! Publisher-conflict detection.
//!
//! An application string appearing under two or more distinct publishers,
//! each with a unique-install count above the reporting threshold, usually
//! means a typo or renaming in the publisher field. The detector only flags
//! these for human review; it never decides which spelling is canonical.

use crate::config::EngineConfig;
use crate::model::{AggregatedGroup, ConflictEntry};
use indexmap::IndexMap;

/// Scan the unversioned dashboard for applications attached to multiple
/// qualifying publishers.
///
/// Pure grouping and filtering over the immutable aggregation snapshot; no
/// fuzzy logic. Publishers are listed in dashboard rank order. The
/// threshold is strictly exceeded (`>`), mirroring the clusterer's `<`
/// termination, so a count of exactly `min_install_count` clusters but
/// does not conflict-report.
#[must_use]
pub fn detect_conflicts(groups: &[AggregatedGroup], config: &EngineConfig) -> Vec<ConflictEntry> {
    let mut publishers_by_app: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for group in groups {
        if group.unique_entries > config.min_install_count {
            let publishers = publishers_by_app
                .entry(group.key.application.as_str())
                .or_default();
            if !publishers.contains(&group.key.publisher.as_str()) {
                publishers.push(group.key.publisher.as_str());
            }
        }
    }

    publishers_by_app
        .into_iter()
        .filter(|(_, publishers)| publishers.len() >= 2)
        .map(|(application, publishers)| ConflictEntry {
            application: application.to_string(),
            publishers: publishers.into_iter().map(str::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GroupKey;

    fn group(publisher: &str, app: &str, unique: usize) -> AggregatedGroup {
        AggregatedGroup {
            key: GroupKey::unversioned(publisher, app),
            all_entries: unique,
            duplicate_entries: 0,
            unique_entries: unique,
        }
    }

    #[test]
    fn test_zoom_conflict_scenario() {
        let groups = vec![
            group("Zoom Video", "Zoom", 500),
            group("Zoom LLC", "Zoom", 150),
            group("Adobe", "Acrobat", 400),
        ];
        let conflicts = detect_conflicts(&groups, &EngineConfig::default());

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].application, "Zoom");
        assert_eq!(conflicts[0].publishers, vec!["Zoom Video", "Zoom LLC"]);
    }

    #[test]
    fn test_below_threshold_publisher_not_counted() {
        let groups = vec![group("Zoom Video", "Zoom", 500), group("Zoom LLC", "Zoom", 80)];
        let conflicts = detect_conflicts(&groups, &EngineConfig::default());
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly at the floor does not qualify.
        let groups = vec![group("A", "Zoom", 100), group("B", "Zoom", 100)];
        let conflicts = detect_conflicts(&groups, &EngineConfig::default());
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_single_publisher_is_no_conflict() {
        let groups = vec![group("Adobe", "Acrobat", 400)];
        assert!(detect_conflicts(&groups, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn test_three_way_conflict_lists_all() {
        let groups = vec![
            group("Zoom Video", "Zoom", 500),
            group("Zoom LLC", "Zoom", 300),
            group("Zoom Inc", "Zoom", 150),
        ];
        let conflicts = detect_conflicts(&groups, &EngineConfig::default());
        assert_eq!(conflicts[0].publishers.len(), 3);
    }
}
