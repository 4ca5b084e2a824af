//! Documentation tag indexing.
//!
//! Walks a documentation tree and turns chapter headings into tag-file
//! anchors. Key pieces:
//!
//! - Document walking with extension and exclusion filters
//! - Line classification (chapter, sub-heading, grammar rule)
//! - Indexing pipeline producing a fresh `TagTable` per call

pub mod document;
pub mod line;
pub mod pipeline;
pub mod walker;

pub use document::Document;
pub use line::{classify, LineKind};
pub use pipeline::TagIndexer;
pub use walker::{DocumentPath, DocumentWalker};

use std::path::Path;

use crate::core::config::IndexingConfig;
use crate::core::error::Result;
use crate::core::tags::TagTable;

/// Index `base_dir` with the default indexing settings
pub fn build_index(base_dir: &Path) -> Result<TagTable> {
    let indexer = TagIndexer::from_config(&IndexingConfig::default())?;
    let (table, _) = indexer.build_index(base_dir)?;
    Ok(table)
}
