//! Complete command handler.

use anyhow::Result;
use std::path::Path;

use super::disk_resolver;
use crate::cli::CompleteArgs;
use crate::cli::config::Config;
use crate::resolver::completion;

pub fn handle_complete(args: &CompleteArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    println!("{}", completed_text(args, notes_dir, config));
    Ok(())
}

/// The search text after pressing Tab on the selected result.
///
/// Unchanged when nothing is selected or the selection does not complete.
pub(crate) fn completed_text(args: &CompleteArgs, notes_dir: &Path, config: &Config) -> String {
    let results = disk_resolver(config).resolve(&args.query, notes_dir, config.min_tab_size());
    results
        .get(args.pick)
        .and_then(completion)
        .unwrap_or(args.query.as_str())
        .to_string()
}
