use std::path::Path;

use cursorclamp_core::config;

/// Creates the default configuration file at `~/.config/cursorclamp/`.
///
/// An existing file is not overwritten.
pub fn execute() {
    let Some(path) = config::config_path() else {
        eprintln!("Error: could not determine home directory.");
        std::process::exit(1);
    };

    if let Some(dir) = path.parent()
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        eprintln!("Error: could not create {}: {e}", dir.display());
        std::process::exit(1);
    }

    write_if_missing(&path, &config::generate_config());
}

/// Writes content to a file only if it doesn't already exist.
fn write_if_missing(path: &Path, content: &str) {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match std::fs::write(path, content) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => eprintln!("Error: could not write {}: {e}", path.display()),
    }
}
