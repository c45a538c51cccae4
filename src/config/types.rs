//! Typed configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Thresholds steering the bundling engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Installation floor: groups below this unique count neither anchor
    /// bundles nor appear in the bundle list, and conflict reporting
    /// requires counts strictly above it.
    pub min_install_count: usize,
    /// Workstation Jaccard overlap floor, in percent (0-100)
    pub min_workstation_overlap_pct: f64,
    /// Partial-ratio similarity floor, on the 0-100 fuzzy scale
    pub min_fuzzy_score: u32,
    /// Acceptance window around an anchor's count, as a fraction (0.10 =
    /// neighbors within 10% of the anchor's unique count)
    pub window_pct: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_install_count: 100,
            min_workstation_overlap_pct: 70.0,
            min_fuzzy_score: 50,
            window_pct: 0.10,
        }
    }
}

impl EngineConfig {
    /// Tighter thresholds: fewer, higher-confidence bundles.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            min_install_count: 250,
            min_workstation_overlap_pct: 85.0,
            min_fuzzy_score: 70,
            window_pct: 0.05,
        }
    }

    /// Looser thresholds for exploratory runs over smaller fleets.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            min_install_count: 25,
            min_workstation_overlap_pct: 50.0,
            min_fuzzy_score: 40,
            window_pct: 0.20,
        }
    }
}

/// Row filters applied between ingestion and the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Drop rows whose operating system mentions "server"
    pub exclude_server_os: bool,
    /// Drop rows whose publisher contains any of these markers
    /// (case-insensitive); used to exclude first-party/internal software
    pub first_party_publishers: Vec<String>,
    /// Application-name keywords that mark a row as a utility
    pub utility_keywords: Vec<String>,
    /// Exact publisher strings that mark a row as a utility
    pub utility_publishers: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_server_os: true,
            first_party_publishers: Vec::new(),
            utility_keywords: [
                "driver",
                "update",
                "compiler",
                "decompiler",
                "installer",
                "utility",
                "plugin",
                "tool",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            utility_publishers: [
                "Intel",
                "Intel Corporation",
                "Intel(R) Corporation",
                "Advanced Micro Devices, Inc.",
                "Advanced Micro Devices Inc.",
                "AMD",
                "Dell",
                "Dell Inc.",
                "Dell, Inc.",
                "Dell Inc",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

/// Where report files land.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated CSV reports; defaults to the working
    /// directory when unset
    pub output_dir: Option<PathBuf>,
}

/// Top-level application configuration, as loaded from a YAML file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}
