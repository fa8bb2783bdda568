//! voidnotes - a search box that opens notes and runs commands

pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod resolver;

pub use resolver::{QueryResolver, completion, resolve};

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_complete, handle_open, handle_resolve},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let notes_dir = config.notes_dir(cli.dir.as_ref());
    tracing::debug!(notes_dir = %notes_dir.display(), "resolved notes directory");

    match &cli.command {
        Command::Resolve(args) => handle_resolve(args, &notes_dir, &config),
        Command::Open(args) => handle_open(args, &notes_dir, &config),
        Command::Complete(args) => handle_complete(args, &notes_dir, &config),
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "voidnotes",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
