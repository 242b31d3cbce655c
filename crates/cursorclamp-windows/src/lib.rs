//! Win32 implementation of the Cursorclamp platform.
//!
//! Everything here only builds on Windows; other targets get an empty crate.
#![cfg(windows)]

/// Ctrl+C handling for the clamp loop.
pub mod ctrl_c;

/// Win32 window enumeration.
pub mod enumerate;

/// `Platform` implementation over user32.
pub mod platform;

/// Queries on a single `HWND`.
pub mod window;

pub use enumerate::enumerate_windows;
pub use platform::Win32Platform;
