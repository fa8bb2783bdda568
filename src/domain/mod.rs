//! Core types and pure logic: results, command grammar, argument validation,
//! prefix matching and ranking.

mod argument;
mod grammar;
mod prefix;
mod rank;
mod result;
mod settings;

pub use argument::{ArgumentError, parse_bounded_int, parse_switch};
pub use grammar::{CommandEntry, CommandShape, GRAMMAR};
pub use prefix::{match_commands, match_entry};
pub use rank::rank;
pub use result::{ParseSwitchError, ResultAction, ResultKind, SearchResult, Switch};
pub use settings::{DEFAULT_TAB_SIZE, MIN_TAB_SIZE, Settings};
