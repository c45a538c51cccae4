//! CLI command handlers.
//!
//! Testable handlers invoked by `main.rs`; each implements the business
//! logic for one subcommand.

mod analyze;
mod normalize;

pub use analyze::{check_options, run_analyze, AnalysisSummary, AnalyzeOptions};
pub use normalize::run_normalize;
