// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use resistor_inference::cli::args::{Cli, Commands};
use resistor_inference::cli::decode::run_decode;
use resistor_inference::cli::predict::run_prediction;

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Predict(args) => run_prediction(args),
        Commands::Decode(args) => run_decode(args),
    }
}
