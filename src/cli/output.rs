//! Terminal rendering for doctags commands
//!
//! `colored` drops escape codes on its own when NO_COLOR is set or stdout
//! is not a terminal.

/// Styles shared by the index and show-config reports
pub mod colors {
    use colored::{ColoredString, Colorize};
    use std::fmt::Display;

    /// Section header in show-config
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Base directory, tag file and config file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Anchor and document counts, elapsed time
    pub fn number(value: impl Display) -> ColoredString {
        value.to_string().yellow()
    }

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }
}

/// Render an indexing pass duration: `850ms`, `2.40s`, `1m 5.5s`
pub fn format_elapsed(ms: u64) -> String {
    if ms < 1000 {
        return format!("{ms}ms");
    }

    let secs = ms as f64 / 1000.0;
    if secs < 60.0 {
        format!("{secs:.2}s")
    } else {
        let mins = ms / 60_000;
        let rest = (ms % 60_000) as f64 / 1000.0;
        format!("{mins}m {rest:.1}s")
    }
}

/// Report a fatal error on stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
