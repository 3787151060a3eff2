//! Keyframe block detection and scaling.
//!
//! This module implements the single-pass scan over a settings document.
//! The scan is a two-state machine: outside any KeyFrames block, lines pass
//! through untouched; inside a block, every line is either the closing brace
//! or a keyframe entry whose leading bracketed timestamp gets multiplied.
//! Block detection is purely textual and indentation-based, not a grammar
//! parse of the settings format.

use log::{debug, error, info};

use crate::error::{CoreError, CoreResult};

/// Literal substring that opens a KeyFrames block.
pub const BLOCK_START_MARKER: &str = "KeyFrames = {";

/// Statistics from one scaling pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaleReport {
    /// Total number of input lines scanned.
    pub lines_processed: usize,
    /// Number of keyframe entries whose value was rewritten.
    pub keyframes_converted: usize,
}

/// Scanner position within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside {
        /// Leading-tab count of the start marker line. Entries sit one
        /// level deeper.
        base_indent: usize,
        /// 1-based line number of the start marker, for error reporting.
        opened_at: usize,
    },
}

/// Scales every keyframe entry in `lines` by `multiplier`.
///
/// Returns the transformed line sequence (same length and order as the
/// input) together with a [`ScaleReport`]. Lines outside a KeyFrames block
/// are returned unchanged; if no block start marker exists the output
/// equals the input.
///
/// # Errors
///
/// * `CoreError::MalformedInput` - an in-block line with insufficient
///   indentation, not starting with `[`, or missing the closing `]`.
/// * `CoreError::InvalidKeyframe` - bracket content that is not a float.
/// * `CoreError::UnterminatedBlock` - end of input with a block still open.
pub fn scale_lines(lines: &[String], multiplier: f64) -> CoreResult<(Vec<String>, ScaleReport)> {
    let mut state = ScanState::Outside;
    let mut output = Vec::with_capacity(lines.len());
    let mut report = ScaleReport::default();

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        report.lines_processed = line_number;

        if line.contains(BLOCK_START_MARKER) {
            let base_indent = leading_tabs(line);
            info!("Found KeyFrames block start on line {line_number}");
            state = ScanState::Inside {
                base_indent,
                opened_at: line_number,
            };
            output.push(line.clone());
        } else if let ScanState::Inside { base_indent, .. } = state {
            if is_block_end(line, base_indent) {
                info!("Found KeyFrames block end on line {line_number}");
                state = ScanState::Outside;
                output.push(line.clone());
            } else {
                let scaled = scale_entry(line, base_indent, line_number, multiplier)
                    .inspect_err(|e| error!("{e}"))?;
                report.keyframes_converted += 1;
                output.push(scaled);
            }
        } else {
            output.push(line.clone());
        }
    }

    if let ScanState::Inside { opened_at, .. } = state {
        error!("Reached end of input with the KeyFrames block from line {opened_at} still open");
        return Err(CoreError::UnterminatedBlock { opened_at });
    }

    Ok((output, report))
}

/// Counts leading tab characters.
fn leading_tabs(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'\t').count()
}

/// A block ends on a line of tabs followed by a lone `}`. Resolve writes
/// the closing brace either at the block's own depth or at the entry
/// depth, so both tab counts are accepted.
fn is_block_end(line: &str, base_indent: usize) -> bool {
    let tabs = leading_tabs(line);
    (tabs == base_indent || tabs == base_indent + 1) && &line[tabs..] == "}"
}

/// Rewrites a single keyframe entry line.
///
/// The entry must start with `base_indent + 1` tabs followed by
/// `[<float>]`; only the first bracketed group is rewritten and the rest
/// of the line is preserved verbatim.
fn scale_entry(
    line: &str,
    base_indent: usize,
    line_number: usize,
    multiplier: f64,
) -> CoreResult<String> {
    let indent = "\t".repeat(base_indent + 1);
    let rest = line
        .strip_prefix(indent.as_str())
        .ok_or_else(|| CoreError::MalformedInput {
            line: line_number,
            reason: "not enough indentation for a keyframe entry".to_string(),
        })?;
    let body = rest
        .strip_prefix('[')
        .ok_or_else(|| CoreError::MalformedInput {
            line: line_number,
            reason: "keyframe entry does not start with '['".to_string(),
        })?;
    let end = body.find(']').ok_or_else(|| CoreError::MalformedInput {
        line: line_number,
        reason: "keyframe entry is missing a closing ']'".to_string(),
    })?;

    let raw = &body[..end];
    let value: f64 = raw.parse().map_err(|source| CoreError::InvalidKeyframe {
        line: line_number,
        value: raw.to_string(),
        source,
    })?;

    let rendered = format_keyframe(value * multiplier);
    debug!("Converted keyframe {raw} to {rendered} on line {line_number}");

    Ok(line.replacen(&format!("[{raw}]"), &format!("[{rendered}]"), 1))
}

/// Renders a scaled keyframe value. `f64`'s `Display` already prints
/// integral values without a trailing `.0` (`3`, not `3.0`).
fn format_keyframe(value: f64) -> String {
    value.to_string()
}
