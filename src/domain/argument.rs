//! Validation of command arguments typed after a command prefix.

use super::result::Switch;
use thiserror::Error;

/// Why a command argument was rejected.
///
/// Callers of the resolver never see these: every rejection becomes the
/// command's hint result. They exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("expected 'on' or 'off', got '{0}'")]
    NotASwitch(String),

    #[error("expected a whole number, got '{0}'")]
    NotAnInteger(String),

    #[error("{value} is below the minimum of {minimum}")]
    BelowMinimum { value: i32, minimum: i32 },
}

/// Validates an on/off argument.
///
/// The raw text is trimmed and lowercased; only `on` and `off` are accepted.
pub fn parse_switch(raw: &str) -> Result<Switch, ArgumentError> {
    raw.parse()
        .map_err(|_| ArgumentError::NotASwitch(raw.trim().to_string()))
}

/// Validates an integer argument with a lower bound.
///
/// Accepts an optional leading `-` followed by ASCII digits, after trimming
/// surrounding whitespace. No `+` sign, inner whitespace or separators.
/// Values that overflow `i32` are rejected like any other malformed number.
pub fn parse_bounded_int(raw: &str, minimum: i32) -> Result<i32, ArgumentError> {
    let trimmed = raw.trim();
    if !is_integer(trimmed) {
        return Err(ArgumentError::NotAnInteger(trimmed.to_string()));
    }

    let value: i32 = trimmed
        .parse()
        .map_err(|_| ArgumentError::NotAnInteger(trimmed.to_string()))?;

    if value < minimum {
        return Err(ArgumentError::BelowMinimum { value, minimum });
    }
    Ok(value)
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
