//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{ResultKind, SearchResult};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain note paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single result in listing output.
#[derive(Debug, Serialize)]
pub struct ResultListing {
    pub kind: ResultKind,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl From<&SearchResult> for ResultListing {
    fn from(result: &SearchResult) -> Self {
        Self {
            kind: result.kind(),
            label: result.label().to_string(),
            argument: result.argument(),
            target: result
                .target()
                .map(|path| path.to_string_lossy().to_string()),
        }
    }
}
