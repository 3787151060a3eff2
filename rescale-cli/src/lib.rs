// rescale-cli/src/lib.rs
//
// Library portion of the Rescale CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, ScaleArgs};
pub use commands::scale::run_scale;
