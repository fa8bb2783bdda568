//! Command handlers for the CLI.

mod complete;
mod open;
mod resolve;


use anyhow::{Result, bail};

use crate::cli::config::Config;
use crate::domain::SearchResult;
use crate::infra::DiskTree;
use crate::resolver::QueryResolver;

// Re-export public items
pub use complete::handle_complete;
pub use open::{Dispatched, handle_open};
pub use resolve::handle_resolve;

// Re-export for tests
#[cfg(test)]
pub(crate) use complete::completed_text;
#[cfg(test)]
pub(crate) use open::{EditorLauncher, handle_open_impl};

// ===========================================
// Shared Utilities
// ===========================================

/// Builds a resolver over the file system using the configured extension.
pub(crate) fn disk_resolver(config: &Config) -> QueryResolver<DiskTree> {
    QueryResolver::on_disk().with_extension(config.extension())
}

/// Returns the result at `pick`, the way a list selection would.
pub(crate) fn pick_result<'a>(
    results: &'a [SearchResult],
    pick: usize,
    query: &str,
) -> Result<&'a SearchResult> {
    match results.get(pick) {
        Some(result) => Ok(result),
        None if results.is_empty() => bail!("no results for '{}'", query),
        None => bail!(
            "no result at position {} for '{}' ({} results)",
            pick,
            query,
            results.len()
        ),
    }
}
