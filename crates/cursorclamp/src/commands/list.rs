use std::io::{self, Write};

use cursorclamp_core::{Candidate, ClampSettings, list_candidate_windows};

use crate::host::Host;

/// Prints the selectable windows with their handles.
pub fn execute(settings: ClampSettings) {
    let host = Host::require();

    let candidates = match list_candidate_windows(host.platform(), settings.title_max_len) {
        Ok(candidates) => candidates,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    let _ = print_candidates(&mut stdout, &candidates, true);
    println!("\n{} windows found", candidates.len());
}

/// Writes a 1-based numbered list of candidate windows.
pub fn print_candidates(
    out: &mut impl Write,
    candidates: &[Candidate],
    show_handles: bool,
) -> io::Result<()> {
    for (i, candidate) in candidates.iter().enumerate() {
        let title = candidate.title.sanitized();
        if show_handles {
            writeln!(out, "({}) : {} [{}]", i + 1, title, candidate.handle)?;
        } else {
            writeln!(out, "({}) : {}", i + 1, title)?;
        }
    }
    Ok(())
}
