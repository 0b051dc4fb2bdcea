// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::palette::DEFAULT_TOLERANCE;
use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Detections format (one JSON array per image):
    [{"class_name": "red", "confidence": 0.91, "bbox": [x1, y1, x2, y2]}, ...]

Examples:
    resistor-inference predict --source detections.json
    resistor-inference predict --source runs/detect/ --conf 0.6
    cat detections.json | resistor-inference predict --source - --json
    resistor-inference decode brown black red gold
    resistor-inference decode gold yellow violet red --orient"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read resistor values from band detections
    Predict(PredictArgs),
    /// Decode band colors given in reading order
    Decode(DecodeArgs),
}

/// Arguments for the predict command.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Detections source (JSON file, directory of JSON files, or - for stdin)
    #[arg(short, long)]
    pub source: String,

    /// Confidence threshold
    #[arg(long, default_value_t = 0.5)]
    pub conf: f32,

    /// Tolerance reported when no tolerance band is read
    #[arg(long, default_value = DEFAULT_TOLERANCE)]
    pub default_tolerance: String,

    /// Print one JSON object per image instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Arguments for the decode command.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Band colors in reading order
    #[arg(required = true, num_args = 1..)]
    pub bands: Vec<String>,

    /// Reverse the bands first if they start with gold or silver
    #[arg(long, default_value_t = false)]
    pub orient: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_predict_args_defaults() {
        let args = Cli::parse_from(["app", "predict", "--source", "bands.json"]);
        match args.command {
            Commands::Predict(predict_args) => {
                assert_eq!(predict_args.source, "bands.json");
                assert!((predict_args.conf - 0.5).abs() < f32::EPSILON);
                assert_eq!(predict_args.default_tolerance, "±20%");
                assert!(!predict_args.json);
                assert!(predict_args.verbose);
            }
            Commands::Decode(_) => panic!("expected predict"),
        }
    }

    #[test]
    fn test_predict_args_custom() {
        let args = Cli::parse_from([
            "app",
            "predict",
            "-s",
            "-",
            "--conf",
            "0.8",
            "--json",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Predict(predict_args) => {
                assert_eq!(predict_args.source, "-");
                assert!((predict_args.conf - 0.8).abs() < f32::EPSILON);
                assert!(predict_args.json);
                assert!(!predict_args.verbose);
            }
            Commands::Decode(_) => panic!("expected predict"),
        }
    }

    #[test]
    fn test_decode_args() {
        let args = Cli::parse_from(["app", "decode", "gold", "red", "red", "--orient"]);
        match args.command {
            Commands::Decode(decode_args) => {
                assert_eq!(decode_args.bands, ["gold", "red", "red"]);
                assert!(decode_args.orient);
                assert!(!decode_args.json);
            }
            Commands::Predict(_) => panic!("expected decode"),
        }
    }

    #[test]
    fn test_decode_requires_bands() {
        assert!(Cli::try_parse_from(["app", "decode"]).is_err());
    }
}
