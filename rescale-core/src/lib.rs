//! Core library for scaling keyframe timestamps in DaVinci Resolve
//! `.settings` files.
//!
//! This crate locates the `KeyFrames = { ... }` block inside a settings
//! document, multiplies every keyframe's bracketed timestamp by a given
//! factor, and re-emits every other line verbatim.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use rescale_core::{CoreConfig, process_settings};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(
//!     PathBuf::from("/path/to/clip.settings"),
//!     PathBuf::from("/path/to/clip_scaled.settings"),
//!     2.0,
//! );
//! config.validate().unwrap();
//!
//! let report = process_settings(&config).unwrap();
//! println!("converted {} keyframes", report.keyframes_converted);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod processing;
pub mod scaling;

// Re-exports for public API
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use processing::process_settings;
pub use scaling::{BLOCK_START_MARKER, ScaleReport, scale_lines};
