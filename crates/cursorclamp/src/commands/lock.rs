use std::io::{self, Write};
use std::sync::mpsc::Receiver;

use cursorclamp_core::selection::parse_handle;
use cursorclamp_core::{
    ClampError, ClampSession, ClampSettings, Platform, SessionEnd, WindowHandle, run_session,
};

use crate::host::{self, Host};

/// How a lock attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The window closed; the user may pick another one.
    WindowGone,
    /// Ctrl+C was pressed.
    Cancelled,
    /// The window was already gone, or a platform call failed.
    Failed,
}

/// Locks the cursor to the window with the given handle until it closes.
pub fn execute(handle: &str, settings: ClampSettings) {
    let handle = match parse_handle(handle) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let host = Host::require();
    let mut stdout = io::stdout();
    match lock(host.platform(), host.stop(), handle, settings, &mut stdout) {
        Ok(Outcome::Failed) | Err(_) => std::process::exit(1),
        Ok(_) => {}
    }
}

/// Runs one clamp session and reports how it ended.
pub fn lock(
    platform: &dyn Platform,
    stop: &Receiver<()>,
    handle: WindowHandle,
    settings: ClampSettings,
    out: &mut impl Write,
) -> io::Result<Outcome> {
    let mut session = match ClampSession::start(platform, handle, settings) {
        Ok(session) => session,
        Err(e) => {
            report(&e, out)?;
            return Ok(Outcome::Failed);
        }
    };

    writeln!(
        out,
        "Locking cursor to \"{}\" (press Ctrl+C to release)",
        session.title().sanitized()
    )?;
    out.flush()?;

    // Stop requests left over from before this session.
    while stop.try_recv().is_ok() {}

    host::set_session_active(true);
    let result = run_session(platform, &mut session, stop);
    host::set_session_active(false);

    match result {
        Ok(SessionEnd::WindowGone) => {
            writeln!(out, "The selected window doesn't exist anymore!")?;
            Ok(Outcome::WindowGone)
        }
        Ok(SessionEnd::Cancelled) => {
            writeln!(out, "Cursor released.")?;
            Ok(Outcome::Cancelled)
        }
        Err(e) => {
            report(&e, out)?;
            Ok(Outcome::Failed)
        }
    }
}

/// Platform failures go to stderr; a stale selection is ordinary output.
fn report(error: &ClampError, out: &mut impl Write) -> io::Result<()> {
    if error.is_fatal() {
        eprintln!("Error: {error}");
        Ok(())
    } else {
        writeln!(out, "{error}")
    }
}
