//! The `analyze` command: full ingest -> filter -> engine -> reports run.

use crate::config::{load_or_default, AppConfig, Validatable};
use crate::engine::Engine;
use crate::error::Result;
use crate::ingest::{apply_fleet_filters, read_all_records};
use crate::reports::write_reports;
use std::path::PathBuf;
use tracing::info;

/// CLI-level overrides layered on top of the config file.
#[derive(Debug, Default, Clone)]
pub struct AnalyzeOptions {
    pub config_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub min_install_count: Option<usize>,
    pub min_workstation_overlap_pct: Option<f64>,
    pub min_fuzzy_score: Option<u32>,
    pub window_pct: Option<f64>,
    pub first_party_publishers: Vec<String>,
    pub include_servers: bool,
}

/// What the command reports back to `main` for exit-code selection.
#[derive(Debug)]
pub struct AnalysisSummary {
    pub records: usize,
    pub distinct_applications: usize,
    pub total_duplicates: usize,
    pub bundles: usize,
    pub conflicts: usize,
    pub reports: Vec<PathBuf>,
}

impl AnalysisSummary {
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        self.conflicts > 0
    }
}

/// Merge CLI flags over the loaded configuration.
fn effective_config(options: &AnalyzeOptions) -> Result<AppConfig> {
    let (mut config, _) = load_or_default(options.config_file.as_deref())?;

    if let Some(v) = options.min_install_count {
        config.engine.min_install_count = v;
    }
    if let Some(v) = options.min_workstation_overlap_pct {
        config.engine.min_workstation_overlap_pct = v;
    }
    if let Some(v) = options.min_fuzzy_score {
        config.engine.min_fuzzy_score = v;
    }
    if let Some(v) = options.window_pct {
        config.engine.window_pct = v;
    }
    if !options.first_party_publishers.is_empty() {
        config.filter.first_party_publishers = options.first_party_publishers.clone();
    }
    if options.include_servers {
        config.filter.exclude_server_os = false;
    }
    if let Some(dir) = &options.output_dir {
        config.output.output_dir = Some(dir.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Run the full analysis over the given export files.
pub fn run_analyze(inputs: &[PathBuf], options: &AnalyzeOptions) -> Result<AnalysisSummary> {
    let config = effective_config(options)?;

    let records = read_all_records(inputs)?;
    let records = apply_fleet_filters(records, &config.filter);

    let output = Engine::new(&config).run(&records);

    let out_dir = config
        .output
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let reports = write_reports(&output, &out_dir)?;

    let summary = AnalysisSummary {
        records: records.len(),
        distinct_applications: output.dashboard.distinct_applications,
        total_duplicates: output.dashboard.total_duplicates,
        bundles: output.bundles.len(),
        conflicts: output.conflicts.len(),
        reports,
    };
    info!(
        records = summary.records,
        bundles = summary.bundles,
        conflicts = summary.conflicts,
        "analysis complete"
    );
    Ok(summary)
}

/// Validate overrides eagerly so a bad flag fails before ingestion starts.
pub fn check_options(options: &AnalyzeOptions) -> Result<()> {
    effective_config(options).map(|_| ())
}
