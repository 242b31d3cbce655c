use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::Receiver;

use cursorclamp_core::selection::parse_selection;
use cursorclamp_core::{ClampSettings, Platform, list_candidate_windows};

use super::list::print_candidates;
use super::lock::{self, Outcome};
use crate::host::Host;

/// Interactive selection on the console.
pub fn execute(settings: ClampSettings) {
    let host = Host::require();
    let input = io::stdin().lock();
    let mut stdout = io::stdout();

    if let Err(e) = prompt_loop(host.platform(), host.stop(), settings, input, &mut stdout) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// List windows, read a number, lock the cursor, repeat.
///
/// Invalid input and stale selections re-prompt. A session that ends
/// because the window closed or a platform call failed returns to the
/// list. The loop ends when a session is cancelled or `input` reaches EOF.
pub fn prompt_loop(
    platform: &dyn Platform,
    stop: &Receiver<()>,
    settings: ClampSettings,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    loop {
        let candidates = list_candidate_windows(platform, settings.title_max_len)?;

        writeln!(out, "Available windows : ")?;
        print_candidates(out, &candidates, false)?;
        write!(out, "Select a window by entering its index number : ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let index = match parse_selection(&line, candidates.len()) {
            Ok(index) => index,
            Err(e) => {
                writeln!(out, "{e}\n")?;
                continue;
            }
        };

        let outcome = lock::lock(platform, stop, candidates[index].handle, settings, out)?;
        if outcome == Outcome::Cancelled {
            return Ok(());
        }
        writeln!(out)?;
    }
}
