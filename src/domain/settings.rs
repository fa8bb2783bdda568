//! Editor settings that command results can change.

use super::result::ResultAction;
use serde::{Deserialize, Serialize};

/// Tab size used when none is configured or a configured value is too small.
pub const DEFAULT_TAB_SIZE: i32 = 4;

/// Smallest tab size accepted by `/tab`.
pub const MIN_TAB_SIZE: i32 = 1;

/// User-facing settings toggled from the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    pub always_on_top: bool,
    pub tab_size: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            always_on_top: false,
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

impl Settings {
    /// Applies a confirmed setting result.
    ///
    /// A tab size below `min_tab_size` falls back to [`DEFAULT_TAB_SIZE`].
    /// Returns `false` when the action is not a setting change.
    pub fn apply(&mut self, action: &ResultAction, min_tab_size: i32) -> bool {
        match action {
            ResultAction::SetDarkMode(switch) => self.dark_mode = switch.is_on(),
            ResultAction::SetAlwaysOnTop(switch) => self.always_on_top = switch.is_on(),
            ResultAction::SetTabSize(size) => {
                self.tab_size = if *size < min_tab_size {
                    DEFAULT_TAB_SIZE
                } else {
                    *size
                };
            }
            _ => return false,
        }
        true
    }
}
