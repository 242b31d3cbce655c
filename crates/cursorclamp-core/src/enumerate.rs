use std::fmt;

use crate::{ClampError, Platform, WindowHandle};

/// A window title cut to a fixed number of characters.
///
/// Used for display and as the liveness fingerprint of a session: a
/// window whose truncated title changes is treated as a different window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowTitle(String);

impl WindowTitle {
    /// Truncates `raw` to at most `max_len` characters.
    pub fn new(raw: &str, max_len: usize) -> Self {
        Self(raw.chars().take(max_len).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The title with every character outside the console-safe set removed.
    pub fn sanitized(&self) -> String {
        sanitize_title(&self.0)
    }
}

impl fmt::Display for WindowTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A window offered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub handle: WindowHandle,
    pub title: WindowTitle,
}

/// Lists the windows that can be selected, in platform order.
///
/// Windows without a title are skipped. The list is built fresh on
/// every call; a previous list may refer to windows that are gone.
pub fn list_candidate_windows<P: Platform + ?Sized>(
    platform: &P,
    title_max_len: usize,
) -> Result<Vec<Candidate>, ClampError> {
    let windows = platform
        .enumerate_windows()
        .map_err(ClampError::Enumerate)?;

    let candidates: Vec<Candidate> = windows
        .into_iter()
        .filter(|(_, title)| !title.is_empty())
        .map(|(handle, title)| Candidate {
            handle,
            title: WindowTitle::new(&title, title_max_len),
        })
        .collect();

    tracing::debug!(count = candidates.len(), "enumerated candidate windows");
    Ok(candidates)
}

/// Keeps ASCII letters, digits, `_`, `.`, space and `-`.
///
/// Titles can hold escape sequences or characters the console can't
/// render; only the displayed text is cleaned, never the fingerprint.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ' ' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlatform;

    #[test]
    fn title_is_truncated_by_characters() {
        let title = WindowTitle::new("Ünïcödé window title", 7);
        assert_eq!(title.as_str(), "Ünïcödé");
    }

    #[test]
    fn short_title_is_kept_whole() {
        let title = WindowTitle::new("Notepad", 50);
        assert_eq!(title.as_str(), "Notepad");
    }

    #[test]
    fn sanitize_strips_escapes_and_symbols() {
        assert_eq!(
            sanitize_title("\u{1b}[31mGame* (DX12) - v1.2_final\u{7}"),
            "31mGame DX12 - v1.2_final"
        );
    }

    #[test]
    fn candidates_skip_untitled_windows() {
        // Arrange
        let platform = FakePlatform::new();
        platform.add_window(0x10, "Editor");
        platform.add_window(0x20, "");
        platform.add_window(0x30, "Game");

        // Act
        let candidates = list_candidate_windows(&platform, 50).unwrap();

        // Assert
        let handles: Vec<usize> = candidates.iter().map(|c| c.handle.raw()).collect();
        assert_eq!(handles, vec![0x10, 0x30]);
        assert_eq!(candidates[1].title.as_str(), "Game");
    }

    #[test]
    fn candidates_truncate_titles() {
        // Arrange
        let platform = FakePlatform::new();
        platform.add_window(0x10, "A very long window title indeed");

        // Act
        let candidates = list_candidate_windows(&platform, 6).unwrap();

        // Assert
        assert_eq!(candidates[0].title.as_str(), "A very");
    }

    #[test]
    fn enumeration_failure_is_reported() {
        // Arrange
        let platform = FakePlatform::new();
        platform.fail_enumerate.set(true);

        // Act
        let result = list_candidate_windows(&platform, 50);

        // Assert
        assert!(matches!(result, Err(ClampError::Enumerate(_))));
    }
}
