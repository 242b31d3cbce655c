//! The cursor clamp loop.
//!
//! A [`ClampSession`] tracks one selected window. Every tick it refreshes
//! the border cache when the window style changes, clips the cursor to
//! the client area while the window has focus, releases the clip when
//! focus is lost, and periodically checks that the window still exists.
//!
//! The session never owns the window. Everything about it can change
//! between two ticks, so each tick re-queries what it needs.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::config::ClampConfig;
use crate::{
    BorderProfile, ClampError, FrameMetrics, Platform, Rect, WindowHandle, WindowStyle,
    WindowTitle,
};

/// Timing and sizing knobs of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampSettings {
    /// Pause between two ticks.
    pub tick: Duration,
    /// Extra pause after clipping while the window keeps focus.
    pub focus_hold: Duration,
    /// Check the window title every this many ticks.
    pub validate_every: u32,
    /// Characters of the title kept as the fingerprint.
    pub title_max_len: usize,
}

impl Default for ClampSettings {
    fn default() -> Self {
        Self::from(&ClampConfig::default())
    }
}

impl From<&ClampConfig> for ClampSettings {
    fn from(config: &ClampConfig) -> Self {
        Self {
            tick: Duration::from_millis(config.tick_ms),
            focus_hold: Duration::from_millis(config.focus_hold_ms),
            validate_every: config.validate_every.max(1),
            title_max_len: config.title_max_len.max(1),
        }
    }
}

/// What the loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Keep going after sleeping for the given duration.
    Continue(Duration),
    /// The window is gone; the clip has been released.
    WindowGone,
}

/// How a session ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The window was closed (or replaced by another with a different title).
    WindowGone,
    /// The host asked the loop to stop.
    Cancelled,
}

/// Live state of one clamp loop.
#[derive(Debug)]
pub struct ClampSession {
    handle: WindowHandle,
    fingerprint: WindowTitle,
    last_style: Option<WindowStyle>,
    border: BorderProfile,
    had_focus: bool,
    validate_count: u32,
    last_clip: Option<Rect>,
    clip_refused: bool,
    settings: ClampSettings,
}

impl ClampSession {
    /// Starts a session for `handle`, recording its title as fingerprint.
    ///
    /// Fails with [`ClampError::StaleSelection`] when the window is
    /// already gone by the time it was picked.
    pub fn start<P: Platform + ?Sized>(
        platform: &P,
        handle: WindowHandle,
        settings: ClampSettings,
    ) -> Result<Self, ClampError> {
        let title = platform.window_title(handle).map_err(|e| {
            tracing::debug!(%handle, error = %e, "selected window has no title");
            ClampError::StaleSelection { handle }
        })?;

        let fingerprint = WindowTitle::new(&title, settings.title_max_len);
        if fingerprint.is_empty() {
            return Err(ClampError::StaleSelection { handle });
        }

        Ok(Self {
            handle,
            fingerprint,
            last_style: None,
            border: BorderProfile::default(),
            had_focus: false,
            validate_count: 0,
            last_clip: None,
            clip_refused: false,
            settings,
        })
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    pub fn title(&self) -> &WindowTitle {
        &self.fingerprint
    }

    pub fn border(&self) -> BorderProfile {
        self.border
    }

    /// Whether the cursor is currently clipped by this session.
    pub fn had_focus(&self) -> bool {
        self.had_focus
    }

    /// Runs one step of the loop.
    ///
    /// Geometry and clip failures are returned as errors. The caller is
    /// responsible for releasing the clip in that case (see
    /// [`run_session`]).
    pub fn tick<P: Platform + ?Sized>(&mut self, platform: &P) -> Result<Tick, ClampError> {
        // Decorations can change while the window is in the background.
        self.refresh_border(platform);

        let mut sleep = self.settings.tick;

        if platform.foreground_window() == Some(self.handle) {
            if self.clip_to_client(platform)? {
                sleep += self.settings.focus_hold;
            }
        } else if self.had_focus {
            // Windows usually drops the clip on focus change, but not always.
            tracing::debug!(handle = %self.handle, "focus lost, releasing cursor");
            self.release_clip(platform);
        }

        if self.validation_due() && !self.is_alive(platform) {
            self.release_clip(platform);
            return Ok(Tick::WindowGone);
        }

        Ok(Tick::Continue(sleep))
    }

    /// Removes the cursor clip and forgets the focus state.
    ///
    /// A failing release is logged and otherwise ignored: there is
    /// nothing left to undo.
    pub fn release_clip<P: Platform + ?Sized>(&mut self, platform: &P) {
        if let Err(e) = platform.release_cursor_clip() {
            tracing::warn!(error = %e, "failed to release cursor clip");
        }
        self.had_focus = false;
        self.last_clip = None;
    }

    /// Recomputes the border inset when the style word changed.
    fn refresh_border<P: Platform + ?Sized>(&mut self, platform: &P) {
        let style = match platform.window_style(self.handle) {
            Ok(style) => style,
            Err(e) => {
                // Liveness validation decides whether the window is gone.
                tracing::debug!(handle = %self.handle, error = %e, "style query failed");
                return;
            }
        };

        if self.last_style == Some(style) {
            return;
        }

        self.border = BorderProfile::from_style(style, &FrameMetrics::query(platform));
        self.last_style = Some(style);
        tracing::debug!(
            handle = %self.handle,
            style = style.bits(),
            "border L:{} T:{} R:{} B:{}",
            self.border.left,
            self.border.top,
            self.border.right,
            self.border.bottom
        );
    }

    /// Clips the cursor to the client area. Returns `false` when the
    /// computed area is inverted and nothing was applied.
    fn clip_to_client<P: Platform + ?Sized>(&mut self, platform: &P) -> Result<bool, ClampError> {
        let handle = self.handle;
        let window = platform
            .window_rect(handle)
            .map_err(|source| ClampError::WindowRect { handle, source })?;

        let client = window.inset(&self.border);
        if !client.is_valid() {
            // A minimized window stays foreground with a tiny rect; warn once.
            if !self.clip_refused {
                tracing::warn!(%handle, "refusing inverted clip rectangle ({client}) for window ({window})");
                self.clip_refused = true;
            }
            if self.had_focus {
                self.release_clip(platform);
            }
            return Ok(false);
        }

        platform
            .apply_cursor_clip(&client)
            .map_err(|source| ClampError::ApplyClip {
                rect: client,
                source,
            })?;

        self.clip_refused = false;
        if self.last_clip != Some(client) {
            tracing::debug!(%handle, "cursor clipped to ({client})");
            self.last_clip = Some(client);
        }
        self.had_focus = true;
        Ok(true)
    }

    fn validation_due(&mut self) -> bool {
        self.validate_count += 1;
        if self.validate_count < self.settings.validate_every {
            return false;
        }
        self.validate_count = 0;
        true
    }

    /// A window is alive while its (truncated) title still matches.
    fn is_alive<P: Platform + ?Sized>(&self, platform: &P) -> bool {
        match platform.window_title(self.handle) {
            Ok(title) => WindowTitle::new(&title, self.settings.title_max_len) == self.fingerprint,
            Err(e) => {
                tracing::debug!(handle = %self.handle, error = %e, "title query failed");
                false
            }
        }
    }
}

/// Drives `session` until the window is gone, the host cancels, or a
/// platform call fails.
///
/// Sleeping happens on `stop`, so sending `()` (or dropping the sender)
/// wakes the loop between ticks. The cursor clip is released on every
/// exit path.
pub fn run_session<P: Platform + ?Sized>(
    platform: &P,
    session: &mut ClampSession,
    stop: &Receiver<()>,
) -> Result<SessionEnd, ClampError> {
    tracing::info!(
        handle = %session.handle,
        title = %session.fingerprint,
        "locking cursor"
    );

    loop {
        let sleep = match session.tick(platform) {
            Ok(Tick::Continue(sleep)) => sleep,
            Ok(Tick::WindowGone) => {
                tracing::info!(handle = %session.handle, "window no longer exists");
                return Ok(SessionEnd::WindowGone);
            }
            Err(e) => {
                tracing::error!(handle = %session.handle, error = %e, "clamp session aborted");
                session.release_clip(platform);
                return Err(e);
            }
        };

        match stop.recv_timeout(sleep) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                tracing::info!(handle = %session.handle, "clamp session cancelled");
                session.release_clip(platform);
                return Ok(SessionEnd::Cancelled);
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
