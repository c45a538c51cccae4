//! Data model for the deduplication and bundling engine.
//!
//! Everything here is created fresh per engine invocation from the current
//! record collection; no state persists across runs. Raw
//! [`InstallationRecord`]s flow into immutable [`AggregatedGroup`] snapshots,
//! which the clusterer and conflict detector consume as independent
//! read-only views.

mod group;
mod index;
mod record;

pub use group::{AggregatedGroup, Bundle, ConflictEntry, GroupKey};
pub use index::WorkstationIndex;
pub use record::InstallationRecord;
