//! Report generation.
//!
//! CSV renderers plus a writer that lands the full report set in an output
//! directory. Rendering is infallible; only filesystem writes can error.

mod csv;

pub use csv::{
    render_bundles, render_conflicts, render_dashboard, render_normalized_names, render_utilities,
};

use crate::engine::EngineOutput;
use crate::error::{InventoryError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// File names for the standard report set.
pub const DASHBOARD_FILE: &str = "full_dashboard.csv";
pub const VERSIONED_DASHBOARD_FILE: &str = "full_dashboard_w_versions.csv";
pub const BUNDLES_FILE: &str = "v_bundles.csv";
pub const CONFLICTS_FILE: &str = "problematic_apps.csv";
pub const UTILITIES_FILE: &str = "utilities.csv";
pub const NORMALIZED_FILE: &str = "normalized_apps.csv";

/// Write the full report set into `dir`, creating it if needed. Returns
/// the paths written, in a fixed order.
pub fn write_reports(output: &EngineOutput, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| InventoryError::io(dir.to_path_buf(), e))?;

    let files = [
        (DASHBOARD_FILE, render_dashboard(&output.dashboard)),
        (
            VERSIONED_DASHBOARD_FILE,
            render_dashboard(&output.versioned_dashboard),
        ),
        (BUNDLES_FILE, render_bundles(&output.bundles)),
        (CONFLICTS_FILE, render_conflicts(&output.conflicts)),
        (UTILITIES_FILE, render_utilities(&output.utilities)),
        (
            NORMALIZED_FILE,
            render_normalized_names(&output.normalized_names),
        ),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = dir.join(name);
        std::fs::write(&path, content).map_err(|e| InventoryError::io(path.clone(), e))?;
        written.push(path);
    }

    info!(dir = %dir.display(), files = written.len(), "wrote report set");
    Ok(written)
}
