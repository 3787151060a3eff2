//! Line-oriented file I/O for settings documents.
//!
//! A document is just an ordered sequence of lines. The whole file is read
//! into memory up front and written back in one buffered pass; nothing is
//! streamed, so a failure during scaling never leaves a partial output file
//! behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CoreResult;

/// Reads the file at `path` into one `String` per line.
///
/// Trailing newlines (and a trailing `\r` on CRLF input) are stripped; the
/// line content is otherwise untouched.
pub fn read_lines(path: &Path) -> CoreResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Writes `lines` to the file at `path`, one line per entry with a trailing
/// newline, overwriting any existing file.
pub fn write_lines(path: &Path, lines: &[String]) -> CoreResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
