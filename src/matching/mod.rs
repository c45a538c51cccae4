//! Similarity oracle for bundle membership.
//!
//! [`BundleMatcher::is_bundle`] decides whether two versioned dashboard rows
//! represent the same underlying product. Four independent signals must all
//! agree; failing any one rejects the pair. The conjunction deliberately
//! trades recall for precision: merged license counts drive procurement
//! decisions, so a false bundle is worse than a missed one.

mod partial_ratio;

pub use partial_ratio::partial_ratio;

use crate::config::EngineConfig;
use crate::model::{AggregatedGroup, WorkstationIndex};
use crate::normalize::{bypasses_token_overlap, clean_name};
use std::collections::HashSet;
use tracing::trace;

/// Pairwise bundle decision over an immutable aggregation snapshot.
pub struct BundleMatcher<'a> {
    index: &'a WorkstationIndex,
    min_fuzzy_score: u32,
    min_workstation_overlap_pct: f64,
}

impl<'a> BundleMatcher<'a> {
    #[must_use]
    pub fn new(index: &'a WorkstationIndex, config: &EngineConfig) -> Self {
        Self {
            index,
            min_fuzzy_score: config.min_fuzzy_score,
            min_workstation_overlap_pct: config.min_workstation_overlap_pct,
        }
    }

    /// Do these two versioned groups belong in the same bundle?
    ///
    /// All four checks must hold:
    /// 1. version strings are exactly equal;
    /// 2. cleaned token sets intersect (bypassed when either raw name is a
    ///    single character);
    /// 3. partial-ratio over the cleaned token sequences clears the fuzzy
    ///    floor;
    /// 4. workstation Jaccard overlap clears the overlap floor (undefined
    ///    overlap counts as a miss, never a division by zero).
    #[must_use]
    pub fn is_bundle(&self, a: &AggregatedGroup, b: &AggregatedGroup) -> bool {
        if a.key.version != b.key.version {
            return false;
        }

        let name_a = &a.key.application;
        let name_b = &b.key.application;
        let tokens_a = clean_name(name_a);
        let tokens_b = clean_name(name_b);

        if !self.tokens_overlap(name_a, name_b, &tokens_a, &tokens_b) {
            return false;
        }

        let fuzzy = partial_ratio(&tokens_a.join(" "), &tokens_b.join(" "));
        if fuzzy < self.min_fuzzy_score {
            trace!(%name_a, %name_b, fuzzy, "rejected below fuzzy floor");
            return false;
        }

        match self.index.overlap_pct(name_a, name_b) {
            Some(pct) => pct >= self.min_workstation_overlap_pct,
            None => false,
        }
    }

    /// Token-overlap precondition, with the single-character bypass applied
    /// to the ORIGINAL (unsplit) names.
    fn tokens_overlap(
        &self,
        raw_a: &str,
        raw_b: &str,
        tokens_a: &[String],
        tokens_b: &[String],
    ) -> bool {
        if bypasses_token_overlap(raw_a) || bypasses_token_overlap(raw_b) {
            return true;
        }
        let set_a: HashSet<&str> = tokens_a.iter().map(String::as_str).collect();
        tokens_b.iter().any(|t| set_a.contains(t.as_str()))
    }
}
