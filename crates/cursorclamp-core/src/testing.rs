//! In-memory platform for tests, here and in dependent crates
//! (behind the `test-support` feature).

use std::cell::{Cell, RefCell};

use crate::{
    FrameMetrics, Platform, PlatformError, PlatformResult, Rect, SystemMetric, WindowHandle,
    WindowStyle,
};

/// A platform call that changes or inspects the cursor clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipCall {
    Apply(Rect),
    Release,
}

/// Scriptable window system that records every clip call.
pub struct FakePlatform {
    pub windows: RefCell<Vec<(WindowHandle, String)>>,
    pub style: Cell<WindowStyle>,
    pub rect: Cell<Rect>,
    pub foreground: Cell<Option<WindowHandle>>,
    pub metrics: Cell<FrameMetrics>,
    pub fail_enumerate: Cell<bool>,
    pub fail_style: Cell<bool>,
    pub fail_rect: Cell<bool>,
    pub fail_clip: Cell<bool>,
    pub clip_calls: RefCell<Vec<ClipCall>>,
    pub title_queries: Cell<usize>,
    /// Title queries beyond this count fail as if the window was closed.
    pub title_budget: Cell<Option<usize>>,
    pub metric_queries: Cell<usize>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            windows: RefCell::new(Vec::new()),
            style: Cell::new(WindowStyle::CAPTION | WindowStyle::THICKFRAME),
            rect: Cell::new(Rect::new(0, 0, 800, 600)),
            foreground: Cell::new(None),
            metrics: Cell::new(FrameMetrics {
                caption_height: 23,
                resize_frame_width: 4,
                resize_frame_height: 4,
                fixed_frame_width: 3,
                fixed_frame_height: 3,
            }),
            fail_enumerate: Cell::new(false),
            fail_style: Cell::new(false),
            fail_rect: Cell::new(false),
            fail_clip: Cell::new(false),
            clip_calls: RefCell::new(Vec::new()),
            title_queries: Cell::new(0),
            title_budget: Cell::new(None),
            metric_queries: Cell::new(0),
        }
    }

    pub fn add_window(&self, raw: usize, title: &str) -> WindowHandle {
        let handle = WindowHandle::from_raw(raw);
        self.windows.borrow_mut().push((handle, title.to_string()));
        handle
    }

    /// Simulates the window being closed.
    pub fn close_window(&self, handle: WindowHandle) {
        self.windows.borrow_mut().retain(|(h, _)| *h != handle);
    }

    pub fn set_title(&self, handle: WindowHandle, title: &str) {
        for (h, t) in self.windows.borrow_mut().iter_mut() {
            if *h == handle {
                *t = title.to_string();
            }
        }
    }

    pub fn focus(&self, handle: Option<WindowHandle>) {
        self.foreground.set(handle);
    }

    pub fn calls(&self) -> Vec<ClipCall> {
        self.clip_calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.clip_calls.borrow_mut().clear();
    }

    fn invalid_handle(call: &'static str) -> PlatformError {
        PlatformError::new(call, 1400, "Invalid window handle.")
    }

    fn exists(&self, handle: WindowHandle) -> bool {
        self.windows.borrow().iter().any(|(h, _)| *h == handle)
    }
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for FakePlatform {
    fn enumerate_windows(&self) -> PlatformResult<Vec<(WindowHandle, String)>> {
        if self.fail_enumerate.get() {
            return Err(PlatformError::new("EnumWindows", 8, "Not enough memory."));
        }
        Ok(self.windows.borrow().clone())
    }

    fn window_title(&self, handle: WindowHandle) -> PlatformResult<String> {
        let queries = self.title_queries.get() + 1;
        self.title_queries.set(queries);
        if self.title_budget.get().is_some_and(|budget| queries > budget) {
            return Err(Self::invalid_handle("GetWindowTextW"));
        }
        self.windows
            .borrow()
            .iter()
            .find(|(h, t)| *h == handle && !t.is_empty())
            .map(|(_, t)| t.clone())
            .ok_or_else(|| Self::invalid_handle("GetWindowTextW"))
    }

    fn window_style(&self, handle: WindowHandle) -> PlatformResult<WindowStyle> {
        if self.fail_style.get() || !self.exists(handle) {
            return Err(Self::invalid_handle("GetWindowLongPtrW"));
        }
        Ok(self.style.get())
    }

    fn window_rect(&self, handle: WindowHandle) -> PlatformResult<Rect> {
        if self.fail_rect.get() || !self.exists(handle) {
            return Err(Self::invalid_handle("GetWindowRect"));
        }
        Ok(self.rect.get())
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        self.foreground.get()
    }

    fn apply_cursor_clip(&self, rect: &Rect) -> PlatformResult<()> {
        if self.fail_clip.get() {
            return Err(PlatformError::new("ClipCursor", 5, "Access is denied."));
        }
        self.clip_calls.borrow_mut().push(ClipCall::Apply(*rect));
        Ok(())
    }

    fn release_cursor_clip(&self) -> PlatformResult<()> {
        self.clip_calls.borrow_mut().push(ClipCall::Release);
        Ok(())
    }

    fn system_metric(&self, metric: SystemMetric) -> i32 {
        self.metric_queries.set(self.metric_queries.get() + 1);
        let m = self.metrics.get();
        match metric {
            SystemMetric::CaptionHeight => m.caption_height,
            SystemMetric::ResizeFrameWidth => m.resize_frame_width,
            SystemMetric::ResizeFrameHeight => m.resize_frame_height,
            SystemMetric::FixedFrameWidth => m.fixed_frame_width,
            SystemMetric::FixedFrameHeight => m.fixed_frame_height,
        }
    }
}
