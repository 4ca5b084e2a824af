//! Line classification.
//!
//! Three independent predicates, tried in priority order by [`classify`]:
//! chapter heading (`# Title`), deeper heading (`## Title`, `### Title`,
//! ...) and grammar production (`> *rule-name* → ...`).

/// What a single document line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# Title`
    Chapter { title: &'a str },
    /// Two or more `#` followed by a space
    Heading { level: usize, title: &'a str },
    /// Formal grammar rule definition
    GrammarRule { name: &'a str },
    Other,
}

/// Classify a line, first match wins
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(title) = chapter_title(line) {
        return LineKind::Chapter { title };
    }
    if let Some((level, title)) = heading(line) {
        if level > 1 {
            return LineKind::Heading { level, title };
        }
    }
    if let Some(name) = grammar_rule(line) {
        return LineKind::GrammarRule { name };
    }
    LineKind::Other
}

/// Title of a level-1 heading: exactly one `#`, then a space
pub fn chapter_title(line: &str) -> Option<&str> {
    match heading(line) {
        Some((1, title)) => Some(title),
        _ => None,
    }
}

/// Level and title of any ATX heading: one or more `#`, then a space
pub fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 {
        return None;
    }
    line[level..].strip_prefix(' ').map(|title| (level, title))
}

/// Rule name of a grammar production line
///
/// Accepts an optional leading `>` (with optional spaces after it), then
/// `*name*` where name is lowercase ASCII letters and hyphens, then ` → `.
pub fn grammar_rule(line: &str) -> Option<&str> {
    let rest = match line.strip_prefix('>') {
        Some(quoted) => quoted.trim_start_matches(' '),
        None => line,
    };
    let rest = rest.strip_prefix('*')?;
    let end = rest.find('*')?;
    let name = &rest[..end];
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_lowercase() || b == b'-') {
        return None;
    }
    rest[end + 1..].starts_with(" → ").then_some(name)
}
