use cursorclamp_core::{Platform, PlatformResult, Rect, SystemMetric, WindowHandle, WindowStyle};

use windows::Win32::Foundation::RECT;
use windows::Win32::UI::WindowsAndMessaging::{
    ClipCursor, GetForegroundWindow, GetSystemMetrics, SM_CXFIXEDFRAME, SM_CXSIZEFRAME,
    SM_CYCAPTION, SM_CYFIXEDFRAME, SM_CYSIZEFRAME,
};

use crate::enumerate;
use crate::window::{Window, platform_error};

/// The user32-backed platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Platform;

impl Platform for Win32Platform {
    fn enumerate_windows(&self) -> PlatformResult<Vec<(WindowHandle, String)>> {
        let windows = enumerate::enumerate_windows()?;

        // A window can vanish between enumeration and the title query;
        // such windows simply drop out of the list.
        Ok(windows
            .into_iter()
            .filter_map(|w| match w.title() {
                Ok(title) => Some((w.handle(), title)),
                Err(e) => {
                    tracing::trace!(handle = %w.handle(), error = %e, "skipping untitled window");
                    None
                }
            })
            .collect())
    }

    fn window_title(&self, handle: WindowHandle) -> PlatformResult<String> {
        Window::from_handle(handle).title()
    }

    fn window_style(&self, handle: WindowHandle) -> PlatformResult<WindowStyle> {
        Window::from_handle(handle).style()
    }

    fn window_rect(&self, handle: WindowHandle) -> PlatformResult<Rect> {
        Window::from_handle(handle).rect()
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        // SAFETY: GetForegroundWindow takes no arguments and only reads state.
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_invalid() {
            return None;
        }
        Some(Window::new(hwnd).handle())
    }

    fn apply_cursor_clip(&self, rect: &Rect) -> PlatformResult<()> {
        let clip = RECT {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        };
        // SAFETY: ClipCursor copies the RECT; the pointer only needs to
        // be valid for the duration of the call.
        let result = unsafe { ClipCursor(Some(&clip as *const RECT)) };
        result.map_err(|e| {
            tracing::debug!(error = %e, "ClipCursor rejected ({rect})");
            platform_error("ClipCursor", e)
        })
    }

    fn release_cursor_clip(&self) -> PlatformResult<()> {
        // SAFETY: a null rectangle lifts the clip.
        let result = unsafe { ClipCursor(None) };
        result.map_err(|e| {
            tracing::debug!(error = %e, "ClipCursor(NULL) failed");
            platform_error("ClipCursor", e)
        })
    }

    fn system_metric(&self, metric: SystemMetric) -> i32 {
        let index = match metric {
            SystemMetric::CaptionHeight => SM_CYCAPTION,
            SystemMetric::ResizeFrameWidth => SM_CXSIZEFRAME,
            SystemMetric::ResizeFrameHeight => SM_CYSIZEFRAME,
            SystemMetric::FixedFrameWidth => SM_CXFIXEDFRAME,
            SystemMetric::FixedFrameHeight => SM_CYFIXEDFRAME,
        };
        // SAFETY: GetSystemMetrics is a pure query.
        unsafe { GetSystemMetrics(index) }
    }
}
