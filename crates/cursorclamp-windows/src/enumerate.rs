use cursorclamp_core::PlatformResult;

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;
use windows::core::BOOL;

use crate::window::{Window, platform_error};

/// Enumerates all visible top-level windows, tool windows excluded.
///
/// Untitled windows are kept here; filtering them is the caller's job.
/// This calls the Win32 `EnumWindows` API, which iterates over every
/// top-level window and invokes a callback for each one.
pub fn enumerate_windows() -> PlatformResult<Vec<Window>> {
    let mut windows: Vec<Window> = Vec::new();

    // SAFETY: EnumWindows calls our callback for each top-level window.
    // We pass a pointer to our Vec as LPARAM (user data). The callback
    // casts it back to &mut Vec<Window> to collect results. This is safe
    // because EnumWindows runs synchronously, so the Vec outlives the call.
    let result = unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut windows as *mut _ as isize),
        )
    };
    result.map_err(|e| platform_error("EnumWindows", e))?;

    Ok(windows)
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec<Window>, cast from enumerate_windows().
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Window>) };

    let window = Window::new(hwnd);
    if window.is_visible() && !window.is_tool_window() {
        windows.push(window);
    }

    BOOL(1)
}
