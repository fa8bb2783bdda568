//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// voidnotes - open, create and configure notes from a single search box
#[derive(Parser, Debug)]
#[command(name = "voidnotes", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show what a query resolves to, best match first
    Resolve(ResolveArgs),

    /// Act on one result of a query (open or create a note, apply a command)
    Open(OpenArgs),

    /// Print the text Tab completion would put in the search box
    Complete(CompleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Search text; a leading `/` selects commands
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `open` command
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Search text; a leading `/` selects commands
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    /// Position of the result to act on (0 is the first)
    #[arg(short, long, default_value_t = 0)]
    pub pick: usize,

    /// Print the note path instead of launching the editor
    #[arg(long)]
    pub print: bool,
}

/// Arguments for the `complete` command
#[derive(Parser, Debug)]
pub struct CompleteArgs {
    /// Search text
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    /// Position of the selected result (0 is the first)
    #[arg(short, long, default_value_t = 0)]
    pub pick: usize,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
