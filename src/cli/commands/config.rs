//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Show built-in defaults instead of the effective configuration
    #[arg(long, short = 'd')]
    pub defaults: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub base_dir: String,
    pub extension: String,
    pub exclude_patterns: Vec<String>,
    pub prefix: String,
    pub sort_documents: bool,
    pub tags_file: String,
}

impl ConfigResponse {
    pub fn new(config: &Config, xdg: &XdgDirs) -> Self {
        Self {
            config_file: xdg.config_file().display().to_string(),
            base_dir: config.indexing.base_dir.display().to_string(),
            extension: config.indexing.extension.clone(),
            exclude_patterns: config.indexing.exclude_patterns.clone(),
            prefix: config.indexing.prefix.clone(),
            sort_documents: config.indexing.sort_documents,
            tags_file: config.output.tags_file.display().to_string(),
        }
    }
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = Config::default();
    let shown = if args.defaults { &defaults } else { config };
    let response = ConfigResponse::new(shown, &XdgDirs::new());

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration:"));
            println!("  config_file: {}", colors::file_path(&response.config_file));
            println!("  indexing:");
            println!("    base_dir: {}", response.base_dir);
            println!("    extension: {}", response.extension);
            println!("    exclude_patterns: {:?}", response.exclude_patterns);
            println!("    prefix: {:?}", response.prefix);
            println!("    sort_documents: {}", response.sort_documents);
            println!("  output:");
            println!("    tags_file: {}", response.tags_file);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
