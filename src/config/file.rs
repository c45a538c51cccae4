//! YAML config file loading and discovery.

use super::types::AppConfig;
use super::validation::Validatable;
use crate::error::{InventoryError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = ".inventory-tools.yaml";

/// Look for a config file in the working directory, then under
/// `~/.config/inventory-tools/`.
#[must_use]
pub fn discover_config_file() -> Option<PathBuf> {
    let cwd_candidate = PathBuf::from(CONFIG_FILE_NAME);
    if cwd_candidate.is_file() {
        return Some(cwd_candidate);
    }

    let home_candidate = dirs::config_dir()?
        .join("inventory-tools")
        .join("config.yaml");
    home_candidate.is_file().then_some(home_candidate)
}

/// Load and validate a config file.
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    let content =
        std::fs::read_to_string(path).map_err(|e| InventoryError::io(path.to_path_buf(), e))?;
    let config: AppConfig = serde_yaml::from_str(&content).map_err(|e| {
        InventoryError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    config.validate()?;
    Ok(config)
}

/// Load the given file, or a discovered one, or fall back to defaults.
///
/// Returns the config and the path it was loaded from, if any. An explicit
/// path that fails to load is an error; a discovered file that fails to
/// load is also an error (a broken config should never be silently
/// ignored).
pub fn load_or_default(explicit: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => discover_config_file(),
    };

    match path {
        Some(p) => {
            let config = load_config_file(&p)?;
            debug!(path = %p.display(), "loaded configuration file");
            Ok((config, Some(p)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}
