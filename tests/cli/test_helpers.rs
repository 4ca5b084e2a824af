//! CLI test helpers
//!
//! Provides a configuration pointing at temporary directories, matching
//! the CLI execute() signatures.

use doctags::core::config::Config;
use std::path::Path;

/// Configuration indexing `docs_root` into `<out_dir>/tags`
pub fn create_cli_test_config(docs_root: &Path, out_dir: &Path) -> Config {
    let mut config = Config::default();
    config.indexing.base_dir = docs_root.to_path_buf();
    config.output.tags_file = out_dir.join("tags");
    config
}
