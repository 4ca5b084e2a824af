//! Error types and error handling for doctags.
//!
//! Every error aborts the indexing run. A partial tag file would send
//! editor users to wrong jump targets without warning, so nothing is
//! written unless the whole pass succeeds.

use thiserror::Error;

/// Result type alias for doctags operations
pub type Result<T> = std::result::Result<T, DocTagsError>;

/// Main error type for doctags
#[derive(Error, Debug)]
pub enum DocTagsError {
    /// A qualifying document could not be read as UTF-8 text
    #[error("Read error: {0}")]
    ReadError(String),

    /// An exclusion pattern failed to compile
    #[error("Pattern error: {0}")]
    PatternError(String),

    /// The base directory is missing, not a directory, or could not be walked
    #[error("Traversal error: {0}")]
    TraversalError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocTagsError {
    /// Check if the error came from the input tree (missing dir, bad file)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DocTagsError::ReadError(_) | DocTagsError::TraversalError(_)
        )
    }

    /// Check if the error is a configuration defect
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DocTagsError::PatternError(_)
                | DocTagsError::ConfigError(_)
                | DocTagsError::TomlError(_)
        )
    }
}
