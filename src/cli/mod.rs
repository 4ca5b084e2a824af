//! CLI adapter for doctags
//!
//! Thin clap layer over `core/`: parses arguments, loads configuration,
//! runs the indexer and reports the outcome.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// doctags - tag files for Markdown documentation
///
/// Scans a documentation tree for chapter headings and writes a POSIX
/// tag file so editors can jump to any chapter by name.
#[derive(Parser, Debug)]
#[command(name = "doctags")]
#[command(version)]
#[command(about = "Tag-file indexer for Markdown documentation", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether the selected command asked for no progress output
    pub fn is_quiet(&self) -> bool {
        matches!(&self.command, Commands::Index(args) if args.quiet)
    }
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index a documentation tree and write a tag file
    Index(commands::IndexArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  doctags completions bash > ~/.local/share/bash-completion/completions/doctags
    ///   zsh:   doctags completions zsh > ~/.zfunc/_doctags
    ///   fish:  doctags completions fish > ~/.config/fish/completions/doctags.fish
    Completions(commands::CompletionsArgs),
}

/// Process exit status for a failed run
///
/// 2 for configuration defects, 3 for unusable input trees, 1 otherwise.
pub fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    use crate::core::error::DocTagsError;

    match err.downcast_ref::<DocTagsError>() {
        Some(e) if e.is_config_error() => 2,
        Some(e) if e.is_input_error() => 3,
        _ => 1,
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Completions don't need configuration
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    match cli.command {
        Commands::Index(args) => commands::index::execute(args, &config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
