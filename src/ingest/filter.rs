//! Fleet filters applied before the engine runs.

use crate::config::FilterConfig;
use crate::model::InstallationRecord;
use tracing::info;

/// Drop server rows and first-party publishers from the fleet.
///
/// - Server rows: the operating-system string contains "server",
///   case-insensitively. Only workstations are license-relevant.
/// - First-party rows: the publisher contains any configured marker,
///   case-insensitively; internally developed software is not rationalized.
///
/// Missing values have already been normalized to empty strings, so both
/// checks are plain substring tests.
#[must_use]
pub fn apply_fleet_filters(
    records: Vec<InstallationRecord>,
    config: &FilterConfig,
) -> Vec<InstallationRecord> {
    let before = records.len();
    let markers: Vec<String> = config
        .first_party_publishers
        .iter()
        .map(|m| m.to_lowercase())
        .collect();

    let kept: Vec<InstallationRecord> = records
        .into_iter()
        .filter(|record| {
            if config.exclude_server_os
                && record.operating_system.to_lowercase().contains("server")
            {
                return false;
            }
            let publisher = record.publisher.to_lowercase();
            !markers.iter().any(|marker| publisher.contains(marker))
        })
        .collect();

    info!(
        kept = kept.len(),
        dropped = before - kept.len(),
        "applied fleet filters"
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_os(publisher: &str, os: &str) -> InstallationRecord {
        InstallationRecord::new(publisher, "App", "1.0", "A", "2021-07-06").with_os(os)
    }

    #[test]
    fn test_server_rows_dropped() {
        let records = vec![
            record_with_os("X", "Windows Server 2019"),
            record_with_os("X", "Windows 10"),
        ];
        let kept = apply_fleet_filters(records, &FilterConfig::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].operating_system, "Windows 10");
    }

    #[test]
    fn test_server_filter_can_be_disabled() {
        let config = FilterConfig {
            exclude_server_os: false,
            ..FilterConfig::default()
        };
        let records = vec![record_with_os("X", "Windows Server 2019")];
        assert_eq!(apply_fleet_filters(records, &config).len(), 1);
    }

    #[test]
    fn test_first_party_publisher_dropped_case_insensitively() {
        let config = FilterConfig {
            first_party_publishers: vec!["usda".to_string()],
            ..FilterConfig::default()
        };
        let records = vec![
            record_with_os("USDA Forest Service", "Windows 10"),
            record_with_os("Adobe", "Windows 10"),
        ];
        let kept = apply_fleet_filters(records, &config);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].publisher, "Adobe");
    }

    #[test]
    fn test_empty_os_rows_survive() {
        let records = vec![record_with_os("X", "")];
        assert_eq!(apply_fleet_filters(records, &FilterConfig::default()).len(), 1);
    }
}
