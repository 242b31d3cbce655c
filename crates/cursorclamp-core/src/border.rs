//! Window decoration sizes.
//!
//! The clip region must land on the drawable client area, so the title
//! bar and frame are subtracted from the window rectangle. Their sizes
//! come from the window style and the system metrics, the same way the
//! window manager decorates the window.

use crate::{Platform, SystemMetric, WindowStyle};

/// Border inset on each side of a window, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderProfile {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Decoration sizes reported by the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameMetrics {
    pub caption_height: i32,
    pub resize_frame_width: i32,
    pub resize_frame_height: i32,
    pub fixed_frame_width: i32,
    pub fixed_frame_height: i32,
}

impl FrameMetrics {
    /// Reads the current decoration metrics from the platform.
    pub fn query<P: Platform + ?Sized>(platform: &P) -> Self {
        Self {
            caption_height: platform.system_metric(SystemMetric::CaptionHeight),
            resize_frame_width: platform.system_metric(SystemMetric::ResizeFrameWidth),
            resize_frame_height: platform.system_metric(SystemMetric::ResizeFrameHeight),
            fixed_frame_width: platform.system_metric(SystemMetric::FixedFrameWidth),
            fixed_frame_height: platform.system_metric(SystemMetric::FixedFrameHeight),
        }
    }
}

impl BorderProfile {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Computes the decoration inset for a window style.
    ///
    /// The caption adds to the top inset on its own. A sizing frame and
    /// a fixed frame are mutually exclusive: the sizing frame wins, and
    /// the fixed frame applies to any other bordered or captioned window.
    pub fn from_style(style: WindowStyle, metrics: &FrameMetrics) -> Self {
        let mut border = Self::default();

        if style.has_caption() {
            border.top += metrics.caption_height;
        }

        if style.has_thick_frame() {
            border.grow(metrics.resize_frame_width, metrics.resize_frame_height);
        } else if style.has_border() || style.has_caption() {
            border.grow(metrics.fixed_frame_width, metrics.fixed_frame_height);
        }

        border
    }

    fn grow(&mut self, cx: i32, cy: i32) {
        self.left += cx;
        self.right += cx;
        self.top += cy;
        self.bottom += cy;
    }
}
