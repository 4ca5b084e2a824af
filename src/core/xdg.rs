//! Where doctags looks for `config.toml`
//!
//! Only a config directory is resolved; doctags keeps no data, cache or
//! state on disk and never creates the directory.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "doctags";
const CONFIG_FILE: &str = "config.toml";

/// Resolved location of the doctags settings directory
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// `DOCTAGS_CONFIG_DIR` is used as-is; otherwise `$XDG_CONFIG_HOME/doctags`,
    /// falling back to `~/.config/doctags`
    pub fn new() -> Self {
        let config_dir = match env::var("DOCTAGS_CONFIG_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => Self::config_home().join(APP_DIR),
        };
        Self { config_dir }
    }

    fn config_home() -> PathBuf {
        env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            })
    }

    /// The settings file read by `Config::load`; it may not exist
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn log_paths(&self) {
        tracing::debug!(
            "Looking for settings in {:?} (file {:?})",
            self.config_dir,
            self.config_file()
        );
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
