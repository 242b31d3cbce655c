//! The window-system capabilities the clamp loop is built on.
//!
//! Each platform crate (e.g. `cursorclamp-windows`) provides its own
//! implementation. Tests drive the loop through a fake.

use std::fmt;

use crate::{Rect, WindowStyle};

/// Opaque identifier of a top-level window.
///
/// The handle is only referenced, never owned: the window behind it can
/// disappear at any moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(usize);

impl WindowHandle {
    /// Creates a handle from a raw pointer-sized value.
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// The fixed set of system metrics used to size window decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemMetric {
    /// Height of a standard title bar (`SM_CYCAPTION`).
    CaptionHeight,
    /// Width of a sizing border (`SM_CXSIZEFRAME`).
    ResizeFrameWidth,
    /// Height of a sizing border (`SM_CYSIZEFRAME`).
    ResizeFrameHeight,
    /// Width of a non-sizable border (`SM_CXFIXEDFRAME`).
    FixedFrameWidth,
    /// Height of a non-sizable border (`SM_CYFIXEDFRAME`).
    FixedFrameHeight,
}

/// A failed platform call, with the OS error code it reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{call} failed (error {code}): {message}")]
pub struct PlatformError {
    /// Name of the platform function that failed.
    pub call: &'static str,
    /// The OS error code (`GetLastError` / `HRESULT` on Windows).
    pub code: i32,
    pub message: String,
}

impl PlatformError {
    pub fn new(call: &'static str, code: i32, message: impl Into<String>) -> Self {
        Self {
            call,
            code,
            message: message.into(),
        }
    }
}

pub type PlatformResult<T> = Result<T, PlatformError>;

/// Window-system operations consumed by enumeration and the clamp loop.
///
/// All methods take `&self`: implementations hold no session state, and
/// the cursor clip they manipulate is global to the desktop.
pub trait Platform {
    /// Lists top-level windows with their full titles.
    fn enumerate_windows(&self) -> PlatformResult<Vec<(WindowHandle, String)>>;

    /// Returns the window's title.
    ///
    /// Fails if the handle is no longer valid or the title is empty.
    fn window_title(&self, handle: WindowHandle) -> PlatformResult<String>;

    /// Returns the window's current style word.
    fn window_style(&self, handle: WindowHandle) -> PlatformResult<WindowStyle>;

    /// Returns the window's full bounding rectangle in screen coordinates.
    fn window_rect(&self, handle: WindowHandle) -> PlatformResult<Rect>;

    /// Returns the window that currently has input focus, if any.
    fn foreground_window(&self) -> Option<WindowHandle>;

    /// Confines the cursor to `rect`, replacing any previous clip.
    fn apply_cursor_clip(&self, rect: &Rect) -> PlatformResult<()>;

    /// Removes any cursor clip so the pointer can move freely.
    fn release_cursor_clip(&self) -> PlatformResult<()>;

    fn system_metric(&self, metric: SystemMetric) -> i32;
}
