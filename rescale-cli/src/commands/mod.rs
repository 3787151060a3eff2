//! Command implementations for the CLI.

/// Implementation of the scale command, the tool's single operation.
pub mod scale;
