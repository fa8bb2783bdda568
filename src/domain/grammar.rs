//! The table of commands recognized in command mode.
//!
//! Every command is one row of [`GRAMMAR`]. The matcher walks the rows in
//! order, so adding a command means adding a row, not new control flow.

use super::result::{ResultAction, SearchResult, Switch};

/// The argument a command expects after its prefix, with the constructors
/// for the concrete result.
#[derive(Debug, Clone, Copy)]
pub enum CommandShape {
    /// No argument; the command is complete as soon as it is recognized.
    Plain {
        action: fn() -> ResultAction,
        label: &'static str,
    },
    /// An `on`/`off` argument.
    Switch {
        action: fn(Switch) -> ResultAction,
        on_label: &'static str,
        off_label: &'static str,
        hint: &'static str,
    },
    /// An integer argument bounded below by the caller's minimum.
    BoundedInt {
        action: fn(i32) -> ResultAction,
        describe: fn(i32) -> String,
        hint: &'static str,
    },
}

/// One recognized command.
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    /// Lowercase prefix, including the trailing space for argument commands.
    pub prefix: &'static str,
    pub shape: CommandShape,
}

impl CommandEntry {
    pub fn takes_argument(&self) -> bool {
        !matches!(self.shape, CommandShape::Plain { .. })
    }

    /// The hint shown while the argument is missing or malformed.
    ///
    /// Returns `None` for commands without an argument.
    pub fn hint(&self, min_tab_size: i32) -> Option<SearchResult> {
        match self.shape {
            CommandShape::Plain { .. } => None,
            CommandShape::Switch { hint, .. } => Some(SearchResult::invalid(hint)),
            CommandShape::BoundedInt { hint, .. } => Some(SearchResult::invalid(format!(
                "{hint}, minimum {min_tab_size}"
            ))),
        }
    }

    /// The concrete result of a command without an argument.
    pub fn plain_result(&self) -> Option<SearchResult> {
        match self.shape {
            CommandShape::Plain { action, label } => Some(SearchResult::new(label, action())),
            _ => None,
        }
    }
}

/// All commands, in the order their results are listed.
pub static GRAMMAR: &[CommandEntry] = &[
    CommandEntry {
        prefix: "/files",
        shape: CommandShape::Plain {
            action: open_file_manager,
            label: "/files - open system file manager",
        },
    },
    CommandEntry {
        prefix: "/dir",
        shape: CommandShape::Plain {
            action: choose_directory,
            label: "/dir - choose notes base directory",
        },
    },
    CommandEntry {
        prefix: "/dark ",
        shape: CommandShape::Switch {
            action: ResultAction::SetDarkMode,
            on_label: "/dark on - enable dark mode",
            off_label: "/dark off - disable dark mode",
            hint: "/dark [on/off] - enable/disable dark mode",
        },
    },
    CommandEntry {
        prefix: "/top ",
        shape: CommandShape::Switch {
            action: ResultAction::SetAlwaysOnTop,
            on_label: "/top on - enable always on top mode",
            off_label: "/top off - disable always on top mode",
            hint: "/top [on/off] - enable/disable always on top mode",
        },
    },
    CommandEntry {
        prefix: "/tab ",
        shape: CommandShape::BoundedInt {
            action: ResultAction::SetTabSize,
            describe: describe_tab_size,
            hint: "/tab [number] - set tab size in spaces",
        },
    },
];

fn open_file_manager() -> ResultAction {
    ResultAction::OpenFileManager
}

fn choose_directory() -> ResultAction {
    ResultAction::ChooseDirectory
}

fn describe_tab_size(size: i32) -> String {
    format!("/tab {size} - set editor tab size to {size} spaces")
}
