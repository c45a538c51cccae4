//! Utility flagging.
//!
//! Drivers, updaters, and vendor support tooling inflate the dashboard
//! without being license-relevant. Rows are tagged as utilities by keyword
//! in the application name or by an exact publisher match against a list of
//! hardware vendors; the remaining "business" records are what name
//! normalization reports on.

use crate::config::FilterConfig;
use crate::model::InstallationRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// One row of the utility report: a (publisher, application) pair with its
/// total installation count, sorted descending by count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtilityEntry {
    pub publisher: String,
    pub application: String,
    pub count: usize,
}

/// Result of splitting the fleet into utility and business records.
#[derive(Debug)]
pub struct FlaggedRecords {
    /// Indices into the original record slice flagged as utilities
    pub utility_flags: Vec<bool>,
    /// Deduplicated (publisher, application) utility list with counts
    pub utilities: Vec<UtilityEntry>,
}

impl FlaggedRecords {
    /// Records not flagged as utilities, in original order.
    #[must_use]
    pub fn business_records<'a>(
        &self,
        records: &'a [InstallationRecord],
    ) -> Vec<&'a InstallationRecord> {
        records
            .iter()
            .zip(&self.utility_flags)
            .filter(|(_, &is_utility)| !is_utility)
            .map(|(record, _)| record)
            .collect()
    }
}

fn is_utility(record: &InstallationRecord, config: &FilterConfig) -> bool {
    let app = record.application.to_lowercase();
    if config
        .utility_keywords
        .iter()
        .any(|keyword| app.contains(keyword.as_str()))
    {
        return true;
    }
    config
        .utility_publishers
        .iter()
        .any(|publisher| publisher == &record.publisher)
}

/// Tag every record as utility or business and build the utility list.
///
/// The per-application count is the TOTAL number of rows carrying that
/// application name across the whole collection, matching the dashboard's
/// all-entries notion rather than a deduplicated count.
#[must_use]
pub fn flag_utilities(records: &[InstallationRecord], config: &FilterConfig) -> FlaggedRecords {
    let utility_flags: Vec<bool> = records.iter().map(|r| is_utility(r, config)).collect();

    let mut installs_by_app: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        *installs_by_app.entry(record.application.as_str()).or_insert(0) += 1;
    }

    let mut seen: IndexMap<(&str, &str), usize> = IndexMap::new();
    for (record, &flagged) in records.iter().zip(&utility_flags) {
        if flagged {
            seen.entry((record.publisher.as_str(), record.application.as_str()))
                .or_insert_with(|| installs_by_app[record.application.as_str()]);
        }
    }

    let mut utilities: Vec<UtilityEntry> = seen
        .into_iter()
        .map(|((publisher, application), count)| UtilityEntry {
            publisher: publisher.to_string(),
            application: application.to_string(),
            count,
        })
        .collect();
    utilities.sort_by(|a, b| b.count.cmp(&a.count));

    FlaggedRecords {
        utility_flags,
        utilities,
    }
}
