//! Error types for the rescale-core library.

use thiserror::Error;

/// Errors produced while scaling a settings file.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An in-block line that does not have the shape of a keyframe entry.
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// Bracketed content on a keyframe entry that is not a float literal.
    #[error("Invalid keyframe value '{value}' on line {line}: {source}")]
    InvalidKeyframe {
        line: usize,
        value: String,
        source: std::num::ParseFloatError,
    },

    /// End of file reached while a KeyFrames block is still open.
    #[error("KeyFrames block opened on line {opened_at} is never closed")]
    UnterminatedBlock { opened_at: usize },
}

/// Result type for rescale-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
