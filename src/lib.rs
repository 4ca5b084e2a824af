//! doctags - tag-file indexer for Markdown documentation trees
//!
//! Scans a directory of Markdown documents for chapter headings and
//! writes a POSIX tag file (`name\tpath\t/^pattern/`) so editors can
//! jump straight to a chapter.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - tags (anchors, tag-file writer)
//!   - indexer (walking, line classification, pipeline)
//!
//! - **cli**: clap adapter (depends on core)
//!   - index, show-config, completions

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{DocTagsError, Result};
pub use crate::core::indexer::{build_index, TagIndexer};
pub use crate::core::tags::{Anchor, TagTable};
pub use crate::core::types::IndexStats;
