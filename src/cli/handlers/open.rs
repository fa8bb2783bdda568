//! Open command handler: acts on a selected result.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{disk_resolver, pick_result};
use crate::cli::OpenArgs;
use crate::cli::config::Config;
use crate::domain::{ResultAction, Settings};
use crate::infra::create_note_file;

/// What acting on a result did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// A note was opened, or created first when `created` is set.
    Note { path: PathBuf, created: bool },
    /// The user asked to pick another notes directory.
    ChooseDirectory { current: PathBuf },
    /// The user asked to browse the notes directory.
    FileManager { dir: PathBuf },
    /// A setting command, applied to the configured settings.
    Settings(Settings),
}

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_open_impl<E: EditorLauncher>(
    args: &OpenArgs,
    notes_dir: &Path,
    config: &Config,
    editor: &E,
) -> Result<Dispatched> {
    let min_tab_size = config.min_tab_size();
    let results = disk_resolver(config).resolve(&args.query, notes_dir, min_tab_size);
    let result = pick_result(&results, args.pick, &args.query)?;

    let dispatched = match result.action() {
        ResultAction::Invalid => bail!("incomplete command: {}", result.label()),
        ResultAction::CreateNote { target } => {
            let created = create_note_file(target)
                .with_context(|| format!("failed to create note: {}", target.display()))?;
            Dispatched::Note {
                path: target.clone(),
                created,
            }
        }
        ResultAction::OpenNote { target } => Dispatched::Note {
            path: target.clone(),
            created: false,
        },
        ResultAction::ChooseDirectory => Dispatched::ChooseDirectory {
            current: notes_dir.to_path_buf(),
        },
        ResultAction::OpenFileManager => Dispatched::FileManager {
            dir: notes_dir.to_path_buf(),
        },
        action => {
            let mut settings = config.settings.clone();
            settings.apply(action, min_tab_size);
            Dispatched::Settings(settings)
        }
    };

    if let Dispatched::Note { path, .. } = &dispatched
        && !args.print
    {
        editor.open(path)?;
    }

    Ok(dispatched)
}

pub fn handle_open(args: &OpenArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    struct RealEditor<'a>(&'a Config);
    impl EditorLauncher for RealEditor<'_> {
        fn open(&self, path: &Path) -> Result<()> {
            open_in_editor(path, self.0)
        }
    }

    match handle_open_impl(args, notes_dir, config, &RealEditor(config))? {
        Dispatched::Note { path, created } => {
            if args.print {
                println!("{}", path.display());
            } else if created {
                println!("Created: {}", path.display());
            } else {
                println!("Opened: {}", path.display());
            }
        }
        Dispatched::ChooseDirectory { current } => {
            println!("Notes directory: {}", current.display());
            println!(
                "Set `dir` in {} or pass --dir to choose another.",
                Config::config_path().display()
            );
        }
        Dispatched::FileManager { dir } => {
            println!("{}", dir.display());
        }
        Dispatched::Settings(settings) => {
            let rendered = toml::to_string(&settings).context("failed to render settings")?;
            println!("[settings]");
            print!("{}", rendered);
        }
    }
    Ok(())
}

/// Opens a file in the configured editor and waits for it to exit.
pub(crate) fn open_in_editor(path: &Path, config: &Config) -> Result<()> {
    let editor = config.editor();

    // Parse editor command (may include args like "code --wait")
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    let status = Command::new(cmd)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}
