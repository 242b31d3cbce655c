//! Ctrl+C signal handler using `SetConsoleCtrlHandler`.
//!
//! While a clamp session runs, Ctrl+C is turned into a message on the
//! session's stop channel so the loop can lift the cursor clip before
//! exiting. Outside a session the default handler terminates the process.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;

use cursorclamp_core::PlatformResult;
use windows::Win32::System::Console::{CTRL_BREAK_EVENT, CTRL_C_EVENT, SetConsoleCtrlHandler};

use crate::window::platform_error;

/// Global sender, written once by `set_handler`, read by the callback.
static SENDER: OnceLock<Sender<()>> = OnceLock::new();

/// Whether a clamp session currently owns the cursor clip.
static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Registers a Ctrl+C handler that sends `()` on the given channel.
///
/// Only the first registration takes effect.
pub fn set_handler(tx: Sender<()>) -> PlatformResult<()> {
    if SENDER.set(tx).is_err() {
        tracing::debug!("Ctrl+C handler already registered");
        return Ok(());
    }
    let result = unsafe { SetConsoleCtrlHandler(Some(handler), true) };
    result.map_err(|e| platform_error("SetConsoleCtrlHandler", e))?;
    tracing::debug!("Ctrl+C handler registered");
    Ok(())
}

/// Marks whether Ctrl+C should stop a session or end the process.
pub fn set_session_active(active: bool) {
    SESSION_ACTIVE.store(active, Ordering::SeqCst);
}

unsafe extern "system" fn handler(ctrl_type: u32) -> windows::core::BOOL {
    if (ctrl_type == CTRL_C_EVENT || ctrl_type == CTRL_BREAK_EVENT)
        && SESSION_ACTIVE.load(Ordering::SeqCst)
        && let Some(tx) = SENDER.get()
    {
        let _ = tx.send(());
        return windows::core::BOOL(1);
    }
    // Not handled: fall through to the default handler.
    windows::core::BOOL(0)
}
