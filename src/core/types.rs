//! Core data types shared by the indexer and its adapters.

use serde::{Deserialize, Serialize};

/// Statistics from an indexing pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of qualifying documents read
    pub documents_scanned: usize,

    /// Anchors written to the tag table (chapter headings)
    pub anchors_emitted: usize,

    /// `##`-and-deeper headings seen (detected, not tagged)
    pub headings_detected: usize,

    /// Grammar production lines seen (detected, not tagged)
    pub grammar_rules_detected: usize,

    /// Indexing duration in milliseconds
    pub duration_ms: u64,
}

/// Per-document detection counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentCounts {
    pub chapters: usize,
    pub headings: usize,
    pub grammar_rules: usize,
}

impl IndexStats {
    /// Fold one document's counts into the totals
    pub fn record(&mut self, counts: DocumentCounts) {
        self.documents_scanned += 1;
        self.anchors_emitted += counts.chapters;
        self.headings_detected += counts.headings;
        self.grammar_rules_detected += counts.grammar_rules;
    }
}
