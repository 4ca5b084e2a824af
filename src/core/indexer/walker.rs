//! Document walker with extension and exclusion filtering.
//!
//! Traverses a documentation tree and yields the qualifying documents:
//! files (or symlinks to files) whose name ends with the documentation
//! extension and whose relative path matches no exclusion pattern.
//! Nothing is opened here; files that fail the filters are never read.

use glob::Pattern;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{DocTagsError, Result};

/// A qualifying document found by the walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath {
    /// Path on disk
    pub absolute: PathBuf,
    /// Path relative to the base directory, `/`-separated
    pub relative: String,
}

/// Directory walker selecting documentation files
pub struct DocumentWalker {
    /// Required file-name suffix, including the dot (e.g. `.md`)
    suffix: String,

    /// Relative paths never opened (e.g. the raw grammar listing)
    exclude_patterns: Vec<Pattern>,

    /// Visit entries in file-name order at every level
    sort: bool,
}

impl DocumentWalker {
    /// Create a new document walker
    ///
    /// # Arguments
    ///
    /// * `extension` - Documentation extension without the dot
    /// * `exclude_patterns` - Glob patterns matched against relative paths
    /// * `sort` - Sort entries by file name for reproducible output
    ///
    /// # Returns
    ///
    /// A new `DocumentWalker` or a `PatternError` if a pattern is invalid
    pub fn new(extension: &str, exclude_patterns: Vec<String>, sort: bool) -> Result<Self> {
        let exclude = exclude_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    DocTagsError::PatternError(format!("Invalid exclude pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            suffix: format!(".{}", extension.trim_start_matches('.')),
            exclude_patterns: exclude,
            sort,
        })
    }

    /// Collect all qualifying documents beneath `root`
    ///
    /// Fails with `TraversalError` if `root` is missing, is not a
    /// directory, or an entry cannot be read while walking, and with
    /// `ReadError` if a qualifying name is not UTF-8, contains a tab, or
    /// is a dangling symlink.
    pub fn collect_documents(&self, root: &Path) -> Result<Vec<DocumentPath>> {
        if !root.exists() {
            return Err(DocTagsError::TraversalError(format!(
                "Base directory {} does not exist",
                root.display()
            )));
        }
        if !root.is_dir() {
            return Err(DocTagsError::TraversalError(format!(
                "Base directory {} is not a directory",
                root.display()
            )));
        }

        let mut walk = WalkDir::new(root).follow_links(false);
        if self.sort {
            walk = walk.sort_by_file_name();
        }

        let mut documents = Vec::new();

        for entry in walk
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            let entry = entry.map_err(|e| {
                DocTagsError::TraversalError(format!("Failed to walk {}: {e}", root.display()))
            })?;

            if entry.file_type().is_dir() || !self.has_suffix(&entry) {
                continue;
            }

            // A qualifying name that cannot be written into the tag file
            let Some(relative) = relative_path(entry.path(), root) else {
                return Err(DocTagsError::ReadError(format!(
                    "Document path is not valid UTF-8: {}",
                    entry.path().display()
                )));
            };

            if self.is_excluded(&relative) {
                tracing::debug!("Skipping excluded document: {}", relative);
                continue;
            }

            if relative.contains('\t') {
                return Err(DocTagsError::ReadError(format!(
                    "Document path contains a tab and cannot be tagged: {relative:?}"
                )));
            }

            if !is_regular_document(&entry, &relative)? {
                continue;
            }

            documents.push(DocumentPath {
                absolute: entry.path().to_path_buf(),
                relative,
            });
        }

        Ok(documents)
    }

    /// Prune excluded directory trees; never the root itself
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root || !entry.file_type().is_dir() {
            return true;
        }

        match relative_path(path, root) {
            Some(relative) if self.is_excluded(&relative) => {
                tracing::debug!("Skipping excluded directory: {}", relative);
                false
            }
            _ => true,
        }
    }

    fn has_suffix(&self, entry: &DirEntry) -> bool {
        entry.file_name().to_string_lossy().ends_with(&self.suffix)
    }

    fn is_excluded(&self, relative: &str) -> bool {
        self.exclude_patterns.iter().any(|p| p.matches(relative))
    }
}

/// Regular files qualify directly; symlinks qualify when they resolve
/// to a file. Directory links are not descended into.
fn is_regular_document(entry: &DirEntry, relative: &str) -> Result<bool> {
    if entry.file_type().is_file() {
        return Ok(true);
    }
    if !entry.path_is_symlink() {
        return Ok(false);
    }
    match fs::metadata(entry.path()) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) => Err(DocTagsError::ReadError(format!(
            "Broken symlink {relative}: {e}"
        ))),
    }
}

/// Render `path` relative to `root` with `/` separators
fn relative_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(parts.join("/"))
}
