use crate::{PlatformError, Rect, WindowHandle};

/// Errors that end a clamp session or prevent one from starting.
#[derive(Debug, thiserror::Error)]
pub enum ClampError {
    #[error("Get window rectangle failed for window {handle}: {source}")]
    WindowRect {
        handle: WindowHandle,
        #[source]
        source: PlatformError,
    },

    #[error("Clip cursor failed for rectangle ({rect}): {source}")]
    ApplyClip {
        rect: Rect,
        #[source]
        source: PlatformError,
    },

    #[error("The selected window {handle} doesn't exist anymore")]
    StaleSelection { handle: WindowHandle },

    #[error("Failed to enumerate windows: {0}")]
    Enumerate(#[source] PlatformError),
}

impl ClampError {
    /// Returns whether the error came from a failing platform call
    /// during a running session, as opposed to a stale selection.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ClampError::StaleSelection { .. })
    }
}
