//! Tag table: anchors and POSIX tag-file serialization.
//!
//! Each record is `<name>\t<path>\t<pattern>\n`, where the pattern uses the
//! `/^line/` addressing form understood by vi-family editors. Tabs never
//! reach the name or pattern fields, so every record has three columns.

use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::core::error::Result;

/// A named jump target inside a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anchor {
    /// Tag name, e.g. `doc:Intro`
    pub name: String,
    /// Document path relative to the base directory, `/`-separated
    pub path: String,
    /// Search pattern relocating the line, e.g. `/^# Intro/`
    pub pattern: String,
}

impl Anchor {
    /// Build an anchor whose pattern matches `line` from its start
    ///
    /// Tabs in the name become spaces.
    pub fn new(name: impl Into<String>, path: impl Into<String>, line: &str) -> Self {
        Self {
            name: name.into().replace('\t', " "),
            path: path.into(),
            pattern: search_pattern(line),
        }
    }

    /// Render as a single tag-file record, without the trailing newline
    pub fn to_record(&self) -> String {
        format!("{}\t{}\t{}", self.name, self.path, self.pattern)
    }
}

/// Escape `/` so the line can sit inside a slash-delimited search, and
/// tabs as `\t` so they don't split the record
pub fn escape_pattern(line: &str) -> String {
    line.replace('/', "\\/").replace('\t', "\\t")
}

/// Wrap an escaped line as `/^<line>/`
pub fn search_pattern(line: &str) -> String {
    format!("/^{}/", escape_pattern(line))
}

/// Ordered sequence of anchors produced by one indexing pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagTable {
    anchors: Vec<Anchor>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, anchor: Anchor) {
        self.anchors.push(anchor);
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Write every anchor as one tag-file line
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for anchor in &self.anchors {
            writeln!(out, "{}", anchor.to_record())?;
        }
        out.flush()
    }

    /// Render the whole table as tag-file text
    pub fn to_tag_file(&self) -> String {
        let mut text = String::new();
        for anchor in &self.anchors {
            text.push_str(&anchor.to_record());
            text.push('\n');
        }
        text
    }

    /// Write the table to `path`, replacing it atomically
    ///
    /// The table is written to a sibling temporary file first and renamed
    /// over the target, so readers never observe a truncated tag file.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "tags".to_string());
        let tmp_path = path.with_file_name(format!(".{file_name}.tmp"));

        {
            let file = fs::File::create(&tmp_path)?;
            let mut writer = io::BufWriter::new(file);
            if let Err(e) = self.write_to(&mut writer) {
                drop(writer);
                let _ = fs::remove_file(&tmp_path);
                return Err(e.into());
            }
        }

        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!("Wrote {} tags to {:?}", self.anchors.len(), path);
        Ok(())
    }
}

impl FromIterator<Anchor> for TagTable {
    fn from_iter<I: IntoIterator<Item = Anchor>>(iter: I) -> Self {
        Self {
            anchors: iter.into_iter().collect(),
        }
    }
}
