//! Tests for the show-config CLI command

use doctags::cli::commands::config::{execute, ConfigArgs, ConfigResponse};
use doctags::cli::OutputFormat;
use doctags::core::config::Config;
use doctags::core::xdg::XdgDirs;
use std::path::PathBuf;

#[test]
fn test_config_human() {
    let result = execute(ConfigArgs::default(), &Config::default(), OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_config_json_defaults() {
    let args = ConfigArgs { defaults: true };
    let result = execute(args, &Config::default(), OutputFormat::Json);
    assert!(result.is_ok());
}

#[test]
fn test_config_response_fields() {
    let mut config = Config::default();
    config.indexing.prefix = "swift:".to_string();
    let xdg = XdgDirs {
        config_dir: PathBuf::from("/etc/doctags"),
    };

    let response = ConfigResponse::new(&config, &xdg);

    assert_eq!(response.config_file, "/etc/doctags/config.toml");
    assert_eq!(response.prefix, "swift:");
    assert_eq!(response.extension, "md");
    assert_eq!(response.tags_file, "tags");
    assert_eq!(
        response.exclude_patterns,
        vec!["ReferenceManual/SummaryOfTheGrammar.md"]
    );
}
