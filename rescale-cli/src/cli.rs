// rescale-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Rescale: keyframe scaler for DaVinci Resolve .settings files",
    long_about = "Scales every keyframe timestamp inside a .settings file's \
                  KeyFrames block by a given multiplier, via the rescale-core library."
)]
pub struct Cli {
    #[command(flatten)]
    pub scale: ScaleArgs,
}

#[derive(Parser, Debug)]
pub struct ScaleArgs {
    /// The settings file to be read (prompted for when omitted)
    #[arg(long = "input_file", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// The settings file to be written (prompted for when omitted)
    #[arg(long = "output_file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// The multiplier applied to every keyframe timestamp (prompted for when omitted)
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub multiplier: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "rescale",
            "--input_file",
            "clip.settings",
            "--output_file",
            "clip_scaled.settings",
            "--multiplier",
            "2.5",
        ]);

        assert_eq!(cli.scale.input_file, Some(PathBuf::from("clip.settings")));
        assert_eq!(
            cli.scale.output_file,
            Some(PathBuf::from("clip_scaled.settings"))
        );
        assert_eq!(cli.scale.multiplier, Some(2.5));
    }

    #[test]
    fn test_parse_no_flags_leaves_everything_unset() {
        let cli = Cli::parse_from(["rescale"]);

        assert!(cli.scale.input_file.is_none());
        assert!(cli.scale.output_file.is_none());
        assert!(cli.scale.multiplier.is_none());
    }

    #[test]
    fn test_parse_negative_multiplier() {
        let cli = Cli::parse_from(["rescale", "--multiplier", "-0.5"]);
        assert_eq!(cli.scale.multiplier, Some(-0.5));
    }

    #[test]
    fn test_parse_rejects_non_numeric_multiplier() {
        let result = Cli::try_parse_from(["rescale", "--multiplier", "fast"]);
        assert!(result.is_err());
    }
}
