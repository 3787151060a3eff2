// rescale-cli/src/main.rs
//
// Binary entry point for the rescale tool.
//
// Responsibilities:
// - Parsing command-line arguments (`Cli`).
// - Initializing the logger at the verbosity selected by the DEBUG
//   environment variable.
// - Invoking the scale command and mapping its result to an exit code.

use clap::Parser;
use std::process;

use rescale_cli::{Cli, logging, run_scale};

fn main() {
    let cli = Cli::parse();
    logging::init(logging::debug_requested());

    if let Err(e) = run_scale(cli.scale) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
