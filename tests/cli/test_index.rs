//! Tests for the index CLI command
//!
//! - Writing the tag file from configured and explicit base directories
//! - Argument overrides (prefix, exclusions, output path)
//! - Error cases leave no tag file behind

use crate::cli::test_helpers::create_cli_test_config;
use crate::common::TestDocs;
use doctags::cli::commands::index::{execute, IndexArgs};
use doctags::cli::OutputFormat;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_index_uses_configured_paths() {
    let docs = TestDocs::with_files(&[("X/Y.md", "# Intro\nsome text\n## Sub\n")]);
    let out = TempDir::new().unwrap();
    let config = create_cli_test_config(docs.path(), out.path());

    let args = IndexArgs {
        quiet: true,
        ..Default::default()
    };

    let result = execute(args, &config, OutputFormat::Human);
    assert!(result.is_ok(), "Index should succeed: {:?}", result.err());

    let tags = fs::read_to_string(out.path().join("tags")).unwrap();
    assert_eq!(tags, "doc:Intro\tX/Y.md\t/^# Intro/\n");
}

#[test]
fn test_index_json_format() {
    let docs = TestDocs::book();
    let out = TempDir::new().unwrap();
    let config = create_cli_test_config(docs.path(), out.path());

    let result = execute(IndexArgs::default(), &config, OutputFormat::Json);
    assert!(result.is_ok(), "Index (JSON) should succeed");

    let tags = fs::read_to_string(out.path().join("tags")).unwrap();
    assert_eq!(tags.lines().count(), 4);
}

#[test]
fn test_index_argument_overrides() {
    let docs = TestDocs::with_files(&[("a.md", "# A\n"), ("skip/b.md", "# B\n")]);
    let out = TempDir::new().unwrap();
    let config = create_cli_test_config(out.path(), out.path());
    let custom_out = out.path().join("custom.tags");

    let args = IndexArgs {
        base_dir: Some(docs.path().to_path_buf()),
        output: Some(custom_out.clone()),
        prefix: Some("book:".to_string()),
        exclude: vec!["skip".to_string()],
        quiet: true,
        ..Default::default()
    };

    execute(args, &config, OutputFormat::Human).unwrap();

    let tags = fs::read_to_string(custom_out).unwrap();
    assert_eq!(tags, "book:A\ta.md\t/^# A/\n");
    assert!(!out.path().join("tags").exists());
}

#[test]
fn test_index_overwrites_stale_tags() {
    let docs = TestDocs::with_files(&[("a.md", "# Fresh\n")]);
    let out = TempDir::new().unwrap();
    let config = create_cli_test_config(docs.path(), out.path());
    fs::write(out.path().join("tags"), "doc:Stale\told.md\t/^# Stale/\n").unwrap();

    let args = IndexArgs {
        quiet: true,
        ..Default::default()
    };
    execute(args, &config, OutputFormat::Human).unwrap();

    let tags = fs::read_to_string(out.path().join("tags")).unwrap();
    assert_eq!(tags, "doc:Fresh\ta.md\t/^# Fresh/\n");
}

#[test]
fn test_index_missing_dir_writes_nothing() {
    let out = TempDir::new().unwrap();
    let config = create_cli_test_config(&out.path().join("missing"), out.path());

    let args = IndexArgs {
        quiet: true,
        ..Default::default()
    };
    let result = execute(args, &config, OutputFormat::Human);

    assert!(result.is_err());
    assert!(!out.path().join("tags").exists());
}

#[test]
fn test_index_read_error_keeps_previous_tags() {
    let docs = TestDocs::with_bytes(&[
        ("a.md", b"# A\n".as_slice()),
        ("b.md", [0xff, 0xfe].as_slice()),
    ]);
    let out = TempDir::new().unwrap();
    let config = create_cli_test_config(docs.path(), out.path());
    fs::write(out.path().join("tags"), "previous\n").unwrap();

    let args = IndexArgs {
        quiet: true,
        ..Default::default()
    };
    let result = execute(args, &config, OutputFormat::Human);

    assert!(result.is_err());
    assert_eq!(
        fs::read_to_string(out.path().join("tags")).unwrap(),
        "previous\n"
    );
}

#[test]
fn test_index_invalid_exclude_pattern() {
    let docs = TestDocs::with_files(&[("a.md", "# A\n")]);
    let out = TempDir::new().unwrap();
    let config = create_cli_test_config(docs.path(), out.path());

    let args = IndexArgs {
        exclude: vec!["[broken".to_string()],
        quiet: true,
        ..Default::default()
    };
    let result = execute(args, &config, OutputFormat::Human);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Pattern error"));
}

#[test]
fn test_index_rejects_empty_extension() {
    let docs = TestDocs::with_files(&[("a.md", "# A\n")]);
    let out = TempDir::new().unwrap();
    let config = create_cli_test_config(docs.path(), out.path());

    let args = IndexArgs {
        extension: Some(String::new()),
        quiet: true,
        ..Default::default()
    };
    let err = execute(args, &config, OutputFormat::Human).unwrap_err();

    assert!(err.to_string().contains("Configuration error"));
    assert_eq!(doctags::cli::exit_code(err.as_ref()), 2);
    assert!(!out.path().join("tags").exists());
}

#[test]
fn test_index_rejects_extension_with_separator() {
    let docs = TestDocs::with_files(&[("a.md", "# A\n")]);
    let out = TempDir::new().unwrap();
    let config = create_cli_test_config(docs.path(), out.path());

    let args = IndexArgs {
        extension: Some("a/b".to_string()),
        quiet: true,
        ..Default::default()
    };
    let err = execute(args, &config, OutputFormat::Human).unwrap_err();

    assert!(err.to_string().contains("Configuration error"));
    assert!(!out.path().join("tags").exists());
}

#[test]
fn test_index_extension_leading_dot_is_stripped() {
    let docs = TestDocs::with_files(&[("a.md", "# A\n"), ("b.txt", "# B\n")]);
    let out = TempDir::new().unwrap();
    let config = create_cli_test_config(docs.path(), out.path());

    let args = IndexArgs {
        extension: Some(".md".to_string()),
        quiet: true,
        ..Default::default()
    };
    let result = execute(args, &config, OutputFormat::Human);
    assert!(result.is_ok(), "Index should succeed: {:?}", result.err());

    let tags = fs::read_to_string(out.path().join("tags")).unwrap();
    assert_eq!(tags, "doc:A\ta.md\t/^# A/\n");
}
