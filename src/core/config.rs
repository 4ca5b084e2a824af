//! Configuration management for doctags.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults matching the documentation
//! tree layout doctags was written for.

use crate::core::error::{DocTagsError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Directory scanned when no base directory is given on the command line
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Documentation file extension, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Relative paths (glob syntax) that are never opened
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Namespace token prepended to every chapter anchor name
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Visit documents in file-name order instead of filesystem order
    #[serde(default = "default_sort_documents")]
    pub sort_documents: bool,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Tag file path (`-` for stdout)
    #[serde(default = "default_tags_file")]
    pub tags_file: PathBuf,
}

// Default value functions
fn default_base_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_exclude_patterns() -> Vec<String> {
    // Raw grammar listing: every line would match the grammar-rule pattern
    vec!["ReferenceManual/SummaryOfTheGrammar.md".to_string()]
}

fn default_prefix() -> String {
    "doc:".to_string()
}

fn default_sort_documents() -> bool {
    true
}

fn default_tags_file() -> PathBuf {
    PathBuf::from("tags")
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            extension: default_extension(),
            exclude_patterns: default_exclude_patterns(),
            prefix: default_prefix(),
            sort_documents: default_sort_documents(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tags_file: default_tags_file(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocTagsError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. DOCTAGS_CONFIG env var
    /// 2. XDG config file (~/.config/doctags/config.toml)
    /// 3. ./doctags.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("DOCTAGS_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("doctags.toml").exists() {
                Self::from_file("doctags.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(base_dir) = env::var("DOCTAGS_BASE_DIR") {
            self.indexing.base_dir = PathBuf::from(base_dir);
        }
        if let Ok(extension) = env::var("DOCTAGS_EXTENSION") {
            self.indexing.extension = extension;
        }
        if let Ok(prefix) = env::var("DOCTAGS_PREFIX") {
            self.indexing.prefix = prefix;
        }
        if let Ok(sort) = env::var("DOCTAGS_SORT") {
            if let Ok(s) = sort.parse() {
                self.indexing.sort_documents = s;
            }
        }
        if let Ok(tags_file) = env::var("DOCTAGS_TAGS_FILE") {
            self.output.tags_file = PathBuf::from(tags_file);
        }
    }

    /// Accept `.md` as well as `md` for the extension
    pub fn normalize(&mut self) {
        if let Some(stripped) = self.indexing.extension.strip_prefix('.') {
            self.indexing.extension = stripped.to_string();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let ext = &self.indexing.extension;
        if ext.is_empty() {
            return Err(DocTagsError::ConfigError(
                "Extension must be non-empty".to_string(),
            ));
        }
        if ext.contains('/') || ext.contains('\\') {
            return Err(DocTagsError::ConfigError(format!(
                "Extension '{ext}' must not contain path separators"
            )));
        }

        for pattern in &self.indexing.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                DocTagsError::PatternError(format!("Invalid exclude pattern '{pattern}': {e}"))
            })?;
        }

        if self.output.tags_file.as_os_str().is_empty() {
            return Err(DocTagsError::ConfigError(
                "Tags file path must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Base dir: {:?}", self.indexing.base_dir);
        tracing::debug!("  Extension: .{}", self.indexing.extension);
        tracing::debug!(
            "  Exclude patterns: {} patterns",
            self.indexing.exclude_patterns.len()
        );
        tracing::debug!("  Prefix: {:?}", self.indexing.prefix);
        tracing::debug!("  Sort documents: {}", self.indexing.sort_documents);
        tracing::debug!("  Tags file: {:?}", self.output.tags_file);
    }
}
