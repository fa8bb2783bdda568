//! Turning the text of the search box into an ordered result list.

use crate::domain::{ResultAction, SearchResult, match_commands, rank};
use crate::infra::{DEFAULT_EXTENSION, DiskTree, NoteFinder, NoteTree};
use std::path::Path;
use tracing::debug;

/// Resolves queries against the command grammar or a notes tree.
///
/// Holds no state between calls: the same query over an unchanged tree
/// always yields the same list.
#[derive(Debug, Clone)]
pub struct QueryResolver<T: NoteTree> {
    tree: T,
    extension: String,
}

impl QueryResolver<DiskTree> {
    /// A resolver over the real file system with `.txt` notes.
    pub fn on_disk() -> Self {
        Self::new(DiskTree)
    }
}

impl<T: NoteTree> QueryResolver<T> {
    pub fn new(tree: T) -> Self {
        Self {
            tree,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Sets the note extension, given without the leading dot.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Resolves a query into a ranked result list.
    ///
    /// - blank query: no results
    /// - query starting with `/`: command mode, the file system is not touched
    /// - anything else: note search under `notes_root`
    ///
    /// Never fails; problems show up as hint results or as missing matches.
    pub fn resolve(&self, query: &str, notes_root: &Path, min_tab_size: i32) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let mut results = if query.starts_with('/') {
            debug!(query, "command mode");
            match_commands(&query.to_lowercase(), min_tab_size)
        } else {
            debug!(query, root = %notes_root.display(), "file mode");
            NoteFinder::new(&self.tree, notes_root, &self.extension).find(query)
        };

        rank(&mut results);
        results
    }
}

/// Resolves a query over the file system with `.txt` notes.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use voidnotes::domain::ResultKind;
///
/// let results = voidnotes::resolve("/tab 3", Path::new("/notes"), 1);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].kind(), ResultKind::SetTabSize);
/// assert_eq!(results[0].argument().as_deref(), Some("3"));
/// ```
pub fn resolve(query: &str, notes_root: &Path, min_tab_size: i32) -> Vec<SearchResult> {
    QueryResolver::on_disk().resolve(query, notes_root, min_tab_size)
}

/// The text Tab should put into the search box for a selected result.
///
/// Only existing notes complete, to their label.
pub fn completion(result: &SearchResult) -> Option<&str> {
    match result.action() {
        ResultAction::OpenNote { .. } => Some(result.label()),
        _ => None,
    }
}
