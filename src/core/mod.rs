//! Core domain logic (independent of the CLI)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Indexing statistics
//! - **xdg**: XDG config directory handling
//! - **tags**: Anchors and tag-file output
//! - **indexer**: Document walking and line classification

pub mod config;
pub mod error;
pub mod indexer;
pub mod tags;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocTagsError, Result};
pub use indexer::{build_index, TagIndexer};
pub use tags::{Anchor, TagTable};
