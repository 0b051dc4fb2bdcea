// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use serde_json::json;

use crate::cli::args::DecodeArgs;
use crate::cli::logging::paint_bands;
use crate::decoder::decode;
use crate::orderer::correct_orientation;
use crate::palette::{BandColor, ColorParseError};
use crate::{error, info, success, warn};

/// Decode band colors typed on the command line.
pub fn run_decode(args: &DecodeArgs) {
    let bands = if args.orient {
        correct_orientation(args.bands.clone())
    } else {
        args.bands.clone()
    };

    for unknown in unknown_bands(&bands) {
        warn!("{unknown}");
    }

    match decode(bands.as_slice()) {
        Ok(resistance) if args.json => {
            info!("{}", json!({ "bands": bands, "resistance": resistance }));
        }
        Ok(resistance) => success!("{} {resistance}", paint_bands(&bands)),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

/// Labels that are not palette colors, in input order.
#[must_use]
pub fn unknown_bands<S: AsRef<str>>(bands: &[S]) -> Vec<ColorParseError> {
    bands
        .iter()
        .filter_map(|band| band.as_ref().parse::<BandColor>().err())
        .collect()
}
