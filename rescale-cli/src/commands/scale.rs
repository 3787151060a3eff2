//! Implementation of the scale command.
//!
//! This module resolves the three run parameters (prompting interactively
//! for any that were omitted on the command line), builds the core
//! configuration, and delegates to the rescale-core pipeline.

use crate::cli::ScaleArgs;

use rescale_core::{CoreConfig, ScaleReport};

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use log::{debug, info};

/// Runs one scaling pass with the given arguments.
///
/// Returns the pipeline's [`ScaleReport`] so the caller (and the
/// integration tests) can see how much work was done.
pub fn run_scale(args: ScaleArgs) -> anyhow::Result<ScaleReport> {
    let input_file = match args.input_file {
        Some(path) => path,
        None => PathBuf::from(prompt("Input filename")?),
    };
    let output_file = match args.output_file {
        Some(path) => path,
        None => PathBuf::from(prompt("Output filename")?),
    };
    let multiplier = match args.multiplier {
        Some(value) => value,
        None => {
            let raw = prompt("Multiplier")?;
            raw.parse::<f64>()
                .with_context(|| format!("invalid multiplier '{raw}'"))?
        }
    };

    info!("Rescale run started: {}", chrono::Local::now());
    debug!(
        "Input file: {} / output file: {} / multiplier: {}",
        input_file.display(),
        output_file.display(),
        multiplier
    );

    let config = CoreConfig::new(input_file, output_file, multiplier);
    config.validate()?;

    let report = rescale_core::process_settings(&config)?;

    info!(
        "Scaled {} keyframes across {} lines",
        report.keyframes_converted, report.lines_processed
    );
    Ok(report)
}

/// Prompts on stdout and reads one trimmed line from stdin.
fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut buf = String::new();
    io::stdin()
        .read_line(&mut buf)
        .context("failed to read from stdin")?;
    Ok(buf.trim().to_string())
}
