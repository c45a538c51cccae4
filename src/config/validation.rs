//! Configuration validation.

use super::types::{AppConfig, EngineConfig, FilterConfig};
use crate::error::{InventoryError, Result};

/// Implemented by configuration sections that can reject bad values before
/// a run starts.
pub trait Validatable {
    fn validate(&self) -> Result<()>;
}

impl Validatable for EngineConfig {
    fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.min_workstation_overlap_pct) {
            return Err(InventoryError::config(format!(
                "min_workstation_overlap_pct must be within 0-100, got {}",
                self.min_workstation_overlap_pct
            )));
        }
        if self.min_fuzzy_score > 100 {
            return Err(InventoryError::config(format!(
                "min_fuzzy_score must be within 0-100, got {}",
                self.min_fuzzy_score
            )));
        }
        if !(0.0..=1.0).contains(&self.window_pct) {
            return Err(InventoryError::config(format!(
                "window_pct must be a fraction within 0-1, got {}",
                self.window_pct
            )));
        }
        Ok(())
    }
}

impl Validatable for FilterConfig {
    fn validate(&self) -> Result<()> {
        if self.first_party_publishers.iter().any(String::is_empty) {
            return Err(InventoryError::config(
                "first_party_publishers must not contain empty markers",
            ));
        }
        Ok(())
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        self.filter.validate()?;
        Ok(())
    }
}
