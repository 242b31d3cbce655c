mod commands;
mod host;

use clap::{Args, Parser, Subcommand};

use cursorclamp_core::ClampSettings;
use cursorclamp_core::config::{self, Config};

#[derive(Parser)]
#[command(
    name = "cursorclamp",
    version,
    about = "Locks the mouse cursor inside the client area of a window"
)]
struct Cli {
    #[command(flatten)]
    timing: TimingArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Overrides for the `[clamp]` section of the config file.
#[derive(Args, Debug, Default)]
struct TimingArgs {
    /// Milliseconds between two refreshes of the cursor clip
    #[arg(long, global = true, value_name = "MS")]
    tick_ms: Option<u64>,
    /// Extra milliseconds to wait after clipping a focused window
    #[arg(long, global = true, value_name = "MS")]
    focus_hold_ms: Option<u64>,
    /// Check that the window still exists every N ticks
    #[arg(long, global = true, value_name = "N")]
    validate_every: Option<u32>,
}

impl TimingArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.tick_ms {
            config.clamp.tick_ms = ms;
        }
        if let Some(ms) = self.focus_hold_ms {
            config.clamp.focus_hold_ms = ms;
        }
        if let Some(n) = self.validate_every {
            config.clamp.validate_every = n;
        }
    }
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Pick a window from a numbered list and lock the cursor to it (default)
    Run,
    /// List the windows that can be selected
    List,
    /// Lock the cursor to a window given by its handle
    Lock {
        /// Window handle, as hex (0x1A2B) or decimal
        handle: String,
    },
    /// Create the default configuration file
    Init,
}

fn main() {
    let cli = Cli::parse();

    let mut config = config::load();
    cli.timing.apply(&mut config);
    config.validate();
    cursorclamp_core::log::init(&config.logging);

    let settings = ClampSettings::from(&config.clamp);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::execute(settings),
        Commands::List => commands::list::execute(settings),
        Commands::Lock { handle } => commands::lock::execute(&handle, settings),
        Commands::Init => commands::init::execute(),
    }
}
