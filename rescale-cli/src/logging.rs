// rescale-cli/src/logging.rs
//
// Logger initialization for the Rescale CLI.
//
// The application logs through the standard `log` facade with `env_logger`
// as the backend. Verbosity policy lives here in the CLI: the DEBUG
// environment variable is read once at startup and the resulting level is
// handed to `init` explicitly, so the core library never consults ambient
// process state. Records go to stderr, timestamped and level-tagged.

use log::LevelFilter;

/// Reads the DEBUG environment variable.
///
/// Unset or `"true"` selects debug verbosity; any other value selects
/// informational verbosity.
pub fn debug_requested() -> bool {
    std::env::var("DEBUG").map_or(true, |v| v == "true")
}

/// Initializes the global logger at the given verbosity.
///
/// A `RUST_LOG` setting still takes precedence, so targeted filtering
/// keeps working the usual way.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
