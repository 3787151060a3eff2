//! Configuration for the scaling pipeline.
//!
//! The configuration is created by the consumer of the library (e.g.
//! rescale-cli) and passed to [`process_settings`](crate::process_settings).

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

/// Main configuration structure for the rescale-core library.
///
/// Holds the two file paths and the multiplier applied to every keyframe
/// timestamp found in the input file's KeyFrames block.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// The .settings file to read.
    pub input_file: PathBuf,
    /// The .settings file to write. Overwritten if it already exists.
    pub output_file: PathBuf,
    /// Scalar factor applied to every keyframe value.
    ///
    /// A zero multiplier collapses all keyframes onto timestamp 0; that is
    /// rarely useful but deliberately not rejected.
    pub multiplier: f64,
}

impl CoreConfig {
    pub fn new(input_file: PathBuf, output_file: PathBuf, multiplier: f64) -> Self {
        Self {
            input_file,
            output_file,
            multiplier,
        }
    }

    /// Validates the configuration before processing starts.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` if the input path does not exist or is
    /// not a regular file.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.input_file.exists() {
            return Err(CoreError::Config(format!(
                "input file '{}' does not exist",
                self.input_file.display()
            )));
        }
        if !self.input_file.is_file() {
            return Err(CoreError::Config(format!(
                "input path '{}' is not a file",
                self.input_file.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_missing_input() {
        let config = CoreConfig::new(
            PathBuf::from("surely/this/does/not/exist.settings"),
            PathBuf::from("out.settings"),
            2.0,
        );
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_directory_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig::new(
            dir.path().to_path_buf(),
            PathBuf::from("out.settings"),
            2.0,
        );
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("clip.settings");
        std::fs::write(&input, "Tools = ordered() {\n").unwrap();
        let config = CoreConfig::new(input, dir.path().join("out.settings"), 0.5);
        assert!(config.validate().is_ok());
    }
}
