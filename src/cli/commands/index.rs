//! Index command - build a tag file for a documentation tree

use crate::cli::output::{colors, format_elapsed};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::indexer::TagIndexer;
use clap::Args;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Arguments for the index command
#[derive(Args, Debug, Default)]
pub struct IndexArgs {
    /// Documentation directory to scan (defaults to the configured base_dir)
    pub base_dir: Option<PathBuf>,

    /// Tag file to write; `-` writes to stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Namespace prefix for chapter anchors
    #[arg(long)]
    pub prefix: Option<String>,

    /// Documentation file extension
    #[arg(long)]
    pub extension: Option<String>,

    /// Relative paths to skip, glob syntax (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Keep filesystem order instead of sorting documents by name
    #[arg(long)]
    pub no_sort: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Indexing result response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub base_dir: String,
    pub tags_file: String,
    pub documents_scanned: usize,
    pub anchors_emitted: usize,
    pub headings_detected: usize,
    pub grammar_rules_detected: usize,
    pub duration_secs: f64,
}

/// Execute the index command
///
/// When the tag file goes to stdout, the summary is written to stderr so
/// the two never mix.
pub fn execute(
    args: IndexArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut effective = config.clone();
    if let Some(base_dir) = args.base_dir {
        effective.indexing.base_dir = base_dir;
    }
    if let Some(output) = args.output {
        effective.output.tags_file = output;
    }
    if let Some(prefix) = args.prefix {
        effective.indexing.prefix = prefix;
    }
    if let Some(extension) = args.extension {
        effective.indexing.extension = extension;
    }
    if !args.exclude.is_empty() {
        effective.indexing.exclude_patterns = args.exclude;
    }
    if args.no_sort {
        effective.indexing.sort_documents = false;
    }

    // Overrides get the same checks as file and env settings
    effective.normalize();
    effective.validate()?;

    let base_dir = effective.indexing.base_dir.clone();
    let tags_file = effective.output.tags_file.clone();

    let indexer = TagIndexer::from_config(&effective.indexing)?;

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Indexing {}...",
            colors::file_path(&base_dir.display().to_string())
        );
    }

    let (table, stats) = indexer.build_index(&base_dir)?;

    let to_stdout = is_stdout(&tags_file);
    if to_stdout {
        table.write_to(io::stdout().lock())?;
    } else {
        table.write_file(&tags_file)?;
    }

    let response = IndexResponse {
        base_dir: base_dir.display().to_string(),
        tags_file: tags_file.display().to_string(),
        documents_scanned: stats.documents_scanned,
        anchors_emitted: stats.anchors_emitted,
        headings_detected: stats.headings_detected,
        grammar_rules_detected: stats.grammar_rules_detected,
        duration_secs: stats.duration_ms as f64 / 1000.0,
    };

    let summary = match format {
        OutputFormat::Human => {
            if args.quiet {
                return Ok(());
            }
            format!(
                "{} {} anchors from {} documents in {} -> {}",
                colors::success("Wrote"),
                colors::number(response.anchors_emitted),
                colors::number(response.documents_scanned),
                colors::number(format_elapsed(stats.duration_ms)),
                colors::file_path(&response.tags_file)
            )
        }
        OutputFormat::Json => serde_json::to_string_pretty(&response)?,
    };

    if to_stdout {
        eprintln!("{summary}");
    } else {
        println!("{summary}");
    }

    Ok(())
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}
