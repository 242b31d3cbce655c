//! The native window system and the Ctrl+C stop channel.

use std::sync::mpsc::Receiver;

use cursorclamp_core::Platform;

/// Everything a command needs to talk to the desktop.
#[cfg_attr(not(windows), allow(dead_code))]
pub struct Host {
    platform: Box<dyn Platform>,
    stop: Receiver<()>,
}

impl Host {
    /// Returns the host for this OS, or exits when the OS is unsupported.
    pub fn require() -> Host {
        match Host::native() {
            Some(host) => host,
            None => {
                eprintln!("Error: cursorclamp only supports Windows.");
                std::process::exit(1);
            }
        }
    }

    #[cfg(windows)]
    fn native() -> Option<Host> {
        let (tx, stop) = std::sync::mpsc::channel();
        if let Err(e) = cursorclamp_windows::ctrl_c::set_handler(tx) {
            tracing::warn!(error = %e, "Ctrl+C will not release the cursor");
        }
        Some(Host {
            platform: Box::new(cursorclamp_windows::Win32Platform),
            stop,
        })
    }

    #[cfg(not(windows))]
    fn native() -> Option<Host> {
        None
    }

    pub fn platform(&self) -> &dyn Platform {
        self.platform.as_ref()
    }

    /// Receives `()` when Ctrl+C is pressed during a session.
    pub fn stop(&self) -> &Receiver<()> {
        &self.stop
    }
}

/// Routes Ctrl+C to the stop channel while a session is running.
pub fn set_session_active(active: bool) {
    #[cfg(windows)]
    cursorclamp_windows::ctrl_c::set_session_active(active);
    #[cfg(not(windows))]
    let _ = active;
}
