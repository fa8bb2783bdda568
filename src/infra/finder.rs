//! Note search over the notes directory.

use super::fs::{MAX_SEARCH_DEPTH, NoteTree};
use crate::domain::{ResultAction, SearchResult};
use std::path::Path;
use tracing::{debug, warn};

/// Extension of note files when none is configured.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Finds notes whose path contains a query.
pub struct NoteFinder<'a, T: NoteTree> {
    tree: &'a T,
    root: &'a Path,
    extension: &'a str,
}

impl<'a, T: NoteTree> NoteFinder<'a, T> {
    /// `extension` is given without the leading dot.
    pub fn new(tree: &'a T, root: &'a Path, extension: &'a str) -> Self {
        Self {
            tree,
            root,
            extension,
        }
    }

    /// Returns matching notes plus, unless some note is an exact match, a
    /// result that creates a note named after the query. Unranked.
    ///
    /// A note matches when its path relative to the root, without the
    /// extension, contains the query case-insensitively. It is an exact
    /// match when that stem equals the query case-insensitively.
    ///
    /// A failed listing is logged and counts as no matches.
    pub fn find(&self, query: &str) -> Vec<SearchResult> {
        let needle = query.to_lowercase();
        let suffix = format!(".{}", self.extension.to_lowercase());

        let files = match self.tree.list_files(self.root, MAX_SEARCH_DEPTH) {
            Ok(files) => files,
            Err(err) => {
                warn!(root = %self.root.display(), error = %err, "note search failed");
                Vec::new()
            }
        };

        let mut results = Vec::new();
        let mut exact_match = false;
        for path in files {
            let Ok(relative) = path.strip_prefix(self.root) else {
                continue;
            };
            let relative = relative.to_string_lossy();
            let lower = relative.to_lowercase();
            let Some(stem) = lower.strip_suffix(&suffix) else {
                continue;
            };

            if stem == needle {
                exact_match = true;
            }
            if !stem.contains(&needle) {
                continue;
            }

            let label = relative
                .rfind('.')
                .map_or(relative.as_ref(), |dot| &relative[..dot])
                .to_string();
            results.push(SearchResult::new(label, ResultAction::OpenNote { target: path }));
        }

        debug!(query, matches = results.len(), exact_match, "note search");

        if !exact_match {
            results.insert(0, self.create_result(query));
        }
        results
    }

    fn create_result(&self, query: &str) -> SearchResult {
        let target = self.root.join(format!("{query}.{}", self.extension));
        SearchResult::new(
            format!("Create note \"{query}\""),
            ResultAction::CreateNote { target },
        )
    }
}
