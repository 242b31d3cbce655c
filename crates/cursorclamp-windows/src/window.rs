use cursorclamp_core::{PlatformError, PlatformResult, Rect, WindowHandle, WindowStyle};

use windows::Win32::Foundation::{GetLastError, HWND, RECT, SetLastError, WIN32_ERROR};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GWL_STYLE, GetWindowLongPtrW, GetWindowRect, GetWindowTextLengthW,
    GetWindowTextW, IsWindowVisible, WS_EX_TOOLWINDOW,
};

/// Converts a `windows` crate error into a platform error for `call`.
pub(crate) fn platform_error(call: &'static str, error: windows::core::Error) -> PlatformError {
    PlatformError::new(call, error.code().0, error.message())
}

/// Builds a platform error from the calling thread's last-error value.
fn last_error(call: &'static str) -> PlatformError {
    // SAFETY: GetLastError only reads thread-local state.
    let code = unsafe { GetLastError() };
    platform_error(call, windows::core::Error::from(code.to_hresult()))
}

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle: a number that identifies a window to the OS.
/// This struct holds that handle and queries the OS lazily for metadata.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    pub fn from_handle(handle: WindowHandle) -> Self {
        Self {
            hwnd: HWND(handle.raw() as *mut _),
        }
    }

    pub fn handle(&self) -> WindowHandle {
        WindowHandle::from_raw(self.hwnd.0 as usize)
    }

    /// Returns the window title, failing when it is empty or the handle
    /// is no longer valid.
    pub fn title(&self) -> PlatformResult<String> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW are safe to call
        // with any HWND. They read window text without modifying state.
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return Err(last_error("GetWindowTextLengthW"));
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            if copied == 0 {
                return Err(last_error("GetWindowTextW"));
            }
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    /// Returns the `GWL_STYLE` word.
    pub fn style(&self) -> PlatformResult<WindowStyle> {
        // SAFETY: GetWindowLongPtrW reads a window attribute. A zero
        // return is only an error if the last-error value was set.
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let style = GetWindowLongPtrW(self.hwnd, GWL_STYLE);
            if style == 0 && GetLastError() != WIN32_ERROR(0) {
                return Err(last_error("GetWindowLongPtrW"));
            }
            Ok(WindowStyle(style as u32))
        }
    }

    /// Returns the full window rectangle, borders and title bar included.
    pub fn rect(&self) -> PlatformResult<Rect> {
        let mut rect = RECT::default();
        // SAFETY: GetWindowRect writes into the RECT we own.
        let result = unsafe { GetWindowRect(self.hwnd, &mut rect) };
        result.map_err(|e| platform_error("GetWindowRect", e))?;

        Ok(Rect::new(rect.left, rect.top, rect.right, rect.bottom))
    }

    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    /// Returns whether this is a tool window (floating palettes,
    /// tooltips), which never makes sense as a clamp target.
    pub fn is_tool_window(&self) -> bool {
        // SAFETY: reading the extended style has no side effects.
        let ex_style = unsafe { GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) } as u32;
        (ex_style & WS_EX_TOOLWINDOW.0) == WS_EX_TOOLWINDOW.0
    }
}
