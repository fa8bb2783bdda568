//! Search results produced by query resolution.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The closed set of result kinds a query can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Invalid,
    CreateNote,
    OpenNote,
    ChooseDirectory,
    OpenFileManager,
    SetDarkMode,
    SetAlwaysOnTop,
    SetTabSize,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultKind::Invalid => "invalid",
            ResultKind::CreateNote => "create",
            ResultKind::OpenNote => "open",
            ResultKind::ChooseDirectory => "dir",
            ResultKind::OpenFileManager => "files",
            ResultKind::SetDarkMode => "dark",
            ResultKind::SetAlwaysOnTop => "top",
            ResultKind::SetTabSize => "tab",
        };
        f.write_str(name)
    }
}

/// An on/off command argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    /// Returns the canonical lowercase spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Switch::On => "on",
            Switch::Off => "off",
        }
    }

    pub fn is_on(self) -> bool {
        self == Switch::On
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `on` nor `off`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSwitchError(String);

impl fmt::Display for ParseSwitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 'on' or 'off', got '{}'", self.0)
    }
}

impl std::error::Error for ParseSwitchError {}

impl FromStr for Switch {
    type Err = ParseSwitchError;

    /// Parses `on`/`off` case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on" => Ok(Switch::On),
            "off" => Ok(Switch::Off),
            _ => Err(ParseSwitchError(s.to_string())),
        }
    }
}

/// What confirming a result does. Each variant carries only its own data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    /// A hint for a partially typed or malformed command; not actionable.
    Invalid,
    CreateNote { target: PathBuf },
    OpenNote { target: PathBuf },
    ChooseDirectory,
    OpenFileManager,
    SetDarkMode(Switch),
    SetAlwaysOnTop(Switch),
    SetTabSize(i32),
}

impl ResultAction {
    pub fn kind(&self) -> ResultKind {
        match self {
            ResultAction::Invalid => ResultKind::Invalid,
            ResultAction::CreateNote { .. } => ResultKind::CreateNote,
            ResultAction::OpenNote { .. } => ResultKind::OpenNote,
            ResultAction::ChooseDirectory => ResultKind::ChooseDirectory,
            ResultAction::OpenFileManager => ResultKind::OpenFileManager,
            ResultAction::SetDarkMode(_) => ResultKind::SetDarkMode,
            ResultAction::SetAlwaysOnTop(_) => ResultKind::SetAlwaysOnTop,
            ResultAction::SetTabSize(_) => ResultKind::SetTabSize,
        }
    }
}

/// A single entry in the ordered result list shown under the search input.
///
/// # Examples
///
/// ```
/// use voidnotes::domain::{ResultAction, ResultKind, SearchResult, Switch};
///
/// let result = SearchResult::new("/dark on - enable dark mode", ResultAction::SetDarkMode(Switch::On));
/// assert_eq!(result.kind(), ResultKind::SetDarkMode);
/// assert_eq!(result.argument().as_deref(), Some("on"));
/// assert!(result.target().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    label: String,
    action: ResultAction,
}

impl SearchResult {
    pub fn new(label: impl Into<String>, action: ResultAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    /// Creates a hint result for a command that cannot be executed yet.
    pub fn invalid(hint: impl Into<String>) -> Self {
        Self::new(hint, ResultAction::Invalid)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> &ResultAction {
        &self.action
    }

    pub fn kind(&self) -> ResultKind {
        self.action.kind()
    }

    /// Returns true for everything except hint results.
    pub fn is_actionable(&self) -> bool {
        self.kind() != ResultKind::Invalid
    }

    /// Returns the validated command argument, for setting results only.
    ///
    /// Switches are lowercase `on`/`off`; tab sizes are decimal.
    pub fn argument(&self) -> Option<String> {
        match &self.action {
            ResultAction::SetDarkMode(switch) | ResultAction::SetAlwaysOnTop(switch) => {
                Some(switch.as_str().to_string())
            }
            ResultAction::SetTabSize(size) => Some(size.to_string()),
            _ => None,
        }
    }

    /// Returns the note file to open or create, for note results only.
    pub fn target(&self) -> Option<&Path> {
        match &self.action {
            ResultAction::CreateNote { target } | ResultAction::OpenNote { target } => {
                Some(target)
            }
            _ => None,
        }
    }
}
