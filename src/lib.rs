//! **Deduplication and bundle detection for workstation software inventories.**
//!
//! `inventory-tools` ingests per-workstation software-inventory exports and
//! produces deduplicated installation counts per application, plus a
//! clustering of related dashboard rows ("bundles") that likely represent
//! the same product published under inconsistent names, versions, or
//! publisher strings. It exists for software-license rationalization across
//! large fleets, where the same suite routinely shows up a dozen ways.
//!
//! ## Pipeline
//!
//! Data flows strictly downward through the stages:
//!
//! 1. **Ingest** ([`ingest`]): read JSON/CSV exports into
//!    [`InstallationRecord`]s; drop server rows and first-party publishers.
//! 2. **Classify** ([`dedup`]): flag duplicate installations by
//!    (application\[, version\], workstation, last-scan) key.
//! 3. **Aggregate** ([`aggregate`]): group into the ranked dashboard with
//!    all/duplicate/unique counts.
//! 4. **Cluster** ([`cluster`]): greedy windowed pass over the ranked
//!    worklist, consulting the four-signal similarity oracle
//!    ([`matching`]), emitting [`Bundle`]s.
//! 5. **Detect conflicts** ([`conflicts`]): applications published above
//!    the reporting floor under two or more publisher spellings.
//! 6. **Report** ([`reports`]): CSV outputs for spreadsheet review.
//!
//! Everything runs single-threaded and batch: the full record collection
//! is in memory before any stage starts, and no state persists across
//! runs.
//!
//! ## Example
//!
//! ```no_run
//! use inventory_tools::{AppConfig, Engine};
//! use inventory_tools::ingest::read_records;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = read_records(Path::new("fleet-export.csv"))?;
//!     let output = Engine::new(&AppConfig::default()).run(&records);
//!
//!     println!(
//!         "{} distinct applications, {} bundles, {} publisher conflicts",
//!         output.dashboard.distinct_applications,
//!         output.bundles.len(),
//!         output.conflicts.len()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! The clustering is greedy and order-dependent by design; see [`cluster`]
//! for the exact scan semantics and the documented window quirk.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize->f64 casts appear in ratio math over bounded counts
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors sections are aspirational here
    clippy::missing_errors_doc
)]

pub mod aggregate;
pub mod cli;
pub mod cluster;
pub mod config;
pub mod conflicts;
pub mod dedup;
pub mod engine;
pub mod error;
pub mod flags;
pub mod ingest;
pub mod matching;
pub mod model;
pub mod normalize;
pub mod reports;

// Re-export main types for convenience
pub use aggregate::{aggregate, Dashboard};
pub use cluster::cluster_bundles;
pub use config::{AppConfig, EngineConfig, FilterConfig, OutputConfig, Validatable};
pub use conflicts::detect_conflicts;
pub use dedup::{duplicate_flags, KeyGranularity};
pub use engine::{Engine, EngineOutput, NormalizedName};
pub use error::{IngestErrorKind, InventoryError, ReportErrorKind, Result};
pub use flags::{flag_utilities, UtilityEntry};
pub use matching::{partial_ratio, BundleMatcher};
pub use model::{
    AggregatedGroup, Bundle, ConflictEntry, GroupKey, InstallationRecord, WorkstationIndex,
};
pub use normalize::{clean_name, normalize_display_name};
