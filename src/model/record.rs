//! Raw installation records as they arrive from fleet inventory exports.

use serde::{Deserialize, Serialize};

/// One software installation observed on one workstation during one scan.
///
/// Records are immutable once ingested. Repeated scans of the same machine
/// produce rows that agree on every field; those are exactly the duplicates
/// the [`crate::dedup`] pass counts. Missing values in the source export are
/// normalized to empty strings before they reach the engine, so every field
/// is always populated (possibly with `""`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationRecord {
    /// Publisher string as reported by the scan agent (not canonicalized)
    #[serde(default)]
    pub publisher: String,
    /// Application display name
    #[serde(default)]
    pub application: String,
    /// Version string, compared verbatim ("1.0" and "1.0.0" are distinct)
    #[serde(default)]
    pub version: String,
    /// Workstation identifier (hostname or an encrypted stand-in)
    #[serde(default)]
    pub workstation_id: String,
    /// Timestamp of the hardware scan that produced this row, kept opaque
    #[serde(default)]
    pub last_scan: String,
    /// Operating system string, used only by the server-row filter
    #[serde(default)]
    pub operating_system: String,
}

impl InstallationRecord {
    /// Convenience constructor used heavily in tests.
    #[must_use]
    pub fn new(
        publisher: impl Into<String>,
        application: impl Into<String>,
        version: impl Into<String>,
        workstation_id: impl Into<String>,
        last_scan: impl Into<String>,
    ) -> Self {
        Self {
            publisher: publisher.into(),
            application: application.into(),
            version: version.into(),
            workstation_id: workstation_id.into(),
            last_scan: last_scan.into(),
            operating_system: String::new(),
        }
    }

    /// Same constructor with an operating system attached.
    #[must_use]
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.operating_system = os.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: InstallationRecord =
            serde_json::from_str(r#"{"application": "Foo"}"#).expect("valid record");
        assert_eq!(record.application, "Foo");
        assert_eq!(record.publisher, "");
        assert_eq!(record.version, "");
        assert_eq!(record.workstation_id, "");
    }
}
