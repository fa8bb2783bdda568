//! Prefix resolution of command-mode queries against the grammar.

use super::argument::{parse_bounded_int, parse_switch};
use super::grammar::{CommandEntry, CommandShape, GRAMMAR};
use super::result::{SearchResult, Switch};
use tracing::debug;

/// Matches a lowercased command query against every grammar row.
///
/// Results are concatenated in grammar order, unranked.
pub fn match_commands(query: &str, min_tab_size: i32) -> Vec<SearchResult> {
    GRAMMAR
        .iter()
        .filter_map(|entry| match_entry(entry, query, min_tab_size))
        .collect()
}

/// Matches one grammar row.
///
/// - query extends past the prefix: the remainder is the argument. Commands
///   without an argument slot contribute nothing here.
/// - query equals the prefix, or is still a prefix of it: commands without an
///   argument resolve directly, the others show their hint.
pub fn match_entry(entry: &CommandEntry, query: &str, min_tab_size: i32) -> Option<SearchResult> {
    if let Some(argument) = query.strip_prefix(entry.prefix) {
        if argument.is_empty() {
            return pending(entry, min_tab_size);
        }
        return with_argument(entry, argument, min_tab_size);
    }

    if entry.prefix.starts_with(query) {
        return pending(entry, min_tab_size);
    }

    None
}

fn pending(entry: &CommandEntry, min_tab_size: i32) -> Option<SearchResult> {
    entry
        .plain_result()
        .or_else(|| entry.hint(min_tab_size))
}

fn with_argument(entry: &CommandEntry, argument: &str, min_tab_size: i32) -> Option<SearchResult> {
    let resolved = match entry.shape {
        CommandShape::Plain { .. } => return None,
        CommandShape::Switch {
            action,
            on_label,
            off_label,
            ..
        } => parse_switch(argument).map(|switch| {
            let label = match switch {
                Switch::On => on_label,
                Switch::Off => off_label,
            };
            SearchResult::new(label, action(switch))
        }),
        CommandShape::BoundedInt {
            action, describe, ..
        } => parse_bounded_int(argument, min_tab_size)
            .map(|value| SearchResult::new(describe(value), action(value))),
    };

    match resolved {
        Ok(result) => Some(result),
        Err(err) => {
            debug!(command = entry.prefix.trim_end(), %err, "rejected command argument");
            entry.hint(min_tab_size)
        }
    }
}
