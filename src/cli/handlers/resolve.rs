//! Resolve command handler.

use anyhow::Result;
use std::path::Path;

use super::disk_resolver;
use crate::cli::ResolveArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, ResultListing};
use crate::domain::SearchResult;

pub fn handle_resolve(args: &ResolveArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    let results = disk_resolver(config).resolve(&args.query, notes_dir, config.min_tab_size());
    print!("{}", format_results(&results, args.format)?);
    Ok(())
}

/// Renders results in the requested format, one line per result.
pub(crate) fn format_results(results: &[SearchResult], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Human => {
            if results.is_empty() {
                out.push_str("No results.\n");
            } else {
                for result in results {
                    out.push_str(&format!("{:<8}{}\n", result.kind().to_string(), result.label()));
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<ResultListing> = results.iter().map(ResultListing::from).collect();
            out.push_str(&serde_json::to_string_pretty(&Output::new(listings))?);
            out.push('\n');
        }
        OutputFormat::Paths => {
            for target in results.iter().filter_map(SearchResult::target) {
                out.push_str(&format!("{}\n", target.display()));
            }
        }
    }
    Ok(out)
}
