//! Pipeline orchestration: read, scale, write.

use log::info;

use crate::config::CoreConfig;
use crate::document;
use crate::error::CoreResult;
use crate::scaling::{self, ScaleReport};

/// Runs the full scaling pipeline described by `config`.
///
/// Reads the input file into memory, scales every keyframe entry inside
/// its KeyFrames block, and writes the transformed document to the output
/// file. The output file is only created after the whole document has been
/// scaled, so a malformed input never leaves a partially-scaled file
/// behind.
///
/// # Errors
///
/// Propagates I/O errors from reading or writing and any structural error
/// from [`scaling::scale_lines`].
pub fn process_settings(config: &CoreConfig) -> CoreResult<ScaleReport> {
    info!("Loading file {}", config.input_file.display());
    let lines = document::read_lines(&config.input_file)?;

    let (scaled, report) = scaling::scale_lines(&lines, config.multiplier)?;

    info!(
        "Writing {} lines with {} converted keyframes to {}",
        report.lines_processed,
        report.keyframes_converted,
        config.output_file.display()
    );
    document::write_lines(&config.output_file, &scaled)?;

    Ok(report)
}
