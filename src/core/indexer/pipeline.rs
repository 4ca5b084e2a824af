//! Tag indexing pipeline.
//!
//! Coordinates one indexing pass:
//! 1. Walk the directory tree for qualifying documents
//! 2. Read each document once
//! 3. Classify every line and emit chapter anchors
//!
//! Any error aborts the pass; no partial table is returned.

use std::path::Path;
use std::time::Instant;

use crate::core::config::IndexingConfig;
use crate::core::error::Result;
use crate::core::indexer::document::Document;
use crate::core::indexer::line::{classify, LineKind};
use crate::core::indexer::walker::DocumentWalker;
use crate::core::tags::{Anchor, TagTable};
use crate::core::types::{DocumentCounts, IndexStats};

/// Builds tag tables from documentation trees
pub struct TagIndexer {
    walker: DocumentWalker,
    prefix: String,
}

impl TagIndexer {
    /// Create a new tag indexer
    ///
    /// # Arguments
    ///
    /// * `extension` - Documentation extension without the dot
    /// * `exclude_patterns` - Relative paths (glob syntax) never opened
    /// * `prefix` - Namespace token prepended to chapter anchor names
    /// * `sort` - Visit documents in file-name order
    pub fn new(
        extension: &str,
        exclude_patterns: Vec<String>,
        prefix: impl Into<String>,
        sort: bool,
    ) -> Result<Self> {
        let walker = DocumentWalker::new(extension, exclude_patterns, sort)?;

        Ok(Self {
            walker,
            prefix: prefix.into(),
        })
    }

    /// Create an indexer from the indexing section of the configuration
    pub fn from_config(config: &IndexingConfig) -> Result<Self> {
        Self::new(
            &config.extension,
            config.exclude_patterns.clone(),
            config.prefix.clone(),
            config.sort_documents,
        )
    }

    /// Index every qualifying document beneath `root`
    ///
    /// Anchors are appended in document visit order and, within a
    /// document, in line order.
    pub fn build_index(&self, root: &Path) -> Result<(TagTable, IndexStats)> {
        let start = Instant::now();

        tracing::info!("Collecting documents from {:?}", root);
        let documents = self.walker.collect_documents(root)?;
        tracing::debug!("Found {} documents", documents.len());

        let mut table = TagTable::new();
        let mut stats = IndexStats::default();

        for location in &documents {
            tracing::info!("Indexing {}", location.relative);

            let document = Document::read(location)?;
            let counts = self.scan_document(&document, &mut table);
            stats.record(counts);
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Indexing complete: {} documents, {} anchors \
             ({} headings, {} grammar rules detected) in {}ms",
            stats.documents_scanned,
            stats.anchors_emitted,
            stats.headings_detected,
            stats.grammar_rules_detected,
            stats.duration_ms
        );

        Ok((table, stats))
    }

    /// Scan one document, appending its chapter anchors to `table`
    pub fn scan_document(&self, document: &Document, table: &mut TagTable) -> DocumentCounts {
        let mut counts = DocumentCounts::default();
        // Chapters never span documents
        let mut current_chapter = "";

        for line in document.lines() {
            match classify(line) {
                LineKind::Chapter { title } => {
                    table.push(Anchor::new(
                        format!("{}{}", self.prefix, title),
                        document.path.as_str(),
                        line,
                    ));
                    current_chapter = title;
                    counts.chapters += 1;
                }
                LineKind::Heading { level, title } => {
                    // TODO: emit sub-heading anchors once a naming scheme is settled
                    tracing::trace!(
                        "{}: h{} {:?} in chapter {:?}",
                        document.path,
                        level,
                        title,
                        current_chapter
                    );
                    counts.headings += 1;
                }
                LineKind::GrammarRule { name } => {
                    tracing::trace!(
                        "{}: grammar rule {:?} in chapter {:?}",
                        document.path,
                        name,
                        current_chapter
                    );
                    counts.grammar_rules += 1;
                }
                LineKind::Other => {}
            }
        }

        counts
    }
}
