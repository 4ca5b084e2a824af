//! doctags CLI - write editor tag files for documentation trees
//!
//! # Examples
//!
//! ```bash
//! # Index ./docs into ./tags
//! doctags index
//!
//! # Index another tree, print tags to stdout
//! doctags index source -o -
//!
//! # Show configuration
//! doctags show-config
//! ```

use clap::Parser;
use doctags::cli::{exit_code, output, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.is_quiet());

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(exit_code(e.as_ref()));
    }
}

/// Log to stderr; `RUST_LOG` overrides the default filter and
/// `DOCTAGS_LOG_FORMAT=json` switches to JSON lines
fn init_tracing(quiet: bool) {
    let default_filter = if quiet { "doctags=warn" } else { "doctags=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let json = std::env::var("DOCTAGS_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
