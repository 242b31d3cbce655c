//! Parsing of the user's window choice.

use crate::WindowHandle;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Only use numbers that are on the list!")]
    NotANumber { input: String },

    #[error("Only use numbers that are on the list! ({index} is not between 1 and {count})")]
    OutOfRange { index: i64, count: usize },

    #[error("No windows with a title are open")]
    NoWindows,

    #[error("'{input}' is not a window handle (expected hex like 0x1A2B or a decimal number)")]
    InvalidHandle { input: String },
}

/// Parses a 1-based list index and returns the 0-based position.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    if count == 0 {
        return Err(SelectionError::NoWindows);
    }

    let trimmed = input.trim();
    let index: i64 = trimmed.parse().map_err(|_| SelectionError::NotANumber {
        input: trimmed.to_string(),
    })?;

    if index < 1 || index as u64 > count as u64 {
        return Err(SelectionError::OutOfRange { index, count });
    }

    Ok(index as usize - 1)
}

/// Parses a window handle given as `0x`-prefixed hex or decimal.
pub fn parse_handle(input: &str) -> Result<WindowHandle, SelectionError> {
    let trimmed = input.trim();
    let invalid = || SelectionError::InvalidHandle {
        input: trimmed.to_string(),
    };

    let raw = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => usize::from_str_radix(hex, 16).map_err(|_| invalid())?,
        None => trimmed.parse::<usize>().map_err(|_| invalid())?,
    };

    if raw == 0 {
        return Err(invalid());
    }

    Ok(WindowHandle::from_raw(raw))
}
