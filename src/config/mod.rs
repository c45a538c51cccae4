//! Configuration for inventory-tools.
//!
//! Follows the layered model of the CLI: built-in defaults, then an
//! optional YAML config file (`.inventory-tools.yaml` in the working
//! directory or `~/.config/inventory-tools/`), then command-line flags,
//! later layers winning.
//!
//! ```yaml
//! engine:
//!   min_install_count: 100
//!   min_workstation_overlap_pct: 70.0
//! filter:
//!   first_party_publishers: ["usda"]
//! ```

mod file;
mod types;
mod validation;

pub use file::{discover_config_file, load_config_file, load_or_default};
pub use types::{AppConfig, EngineConfig, FilterConfig, OutputConfig};
pub use validation::Validatable;
