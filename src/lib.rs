// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Resistor Inference
//!
//! Reads axial resistor values from color band detections. A detector (for
//! example a YOLO model trained on band colors) locates each band and labels
//! its color; this crate works out which way the resistor is facing and
//! decodes the color code into ohms and a tolerance.
//!
//! ## Pipeline
//!
//! 1. Low-confidence detections are dropped and each remaining box is reduced
//!    to an [`Observation`] at its center.
//! 2. [`order`] sorts the bands left-to-right, right-to-left, top-to-bottom
//!    and bottom-to-top, in that priority, and keeps the first sort that
//!    starts with a gold or silver tolerance band.
//! 3. [`BandOrder::into_reading_order`] reverses that sort once so the
//!    significant digits come first.
//! 4. [`decode`] turns the first two bands into digits, the third into a
//!    multiplier and the fourth into a tolerance.
//!
//! ## Quick Start (Library)
//!
//! ```
//! use resistor_inference::{decode, Observation, ResistorReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Bands already in reading order
//! let value = decode(&["red", "red", "orange", "green"])?;
//! assert_eq!(value.ohms, 22_000.0);
//! assert_eq!(value.tolerance, "±0.5%");
//!
//! // Bands as detected, gold on the left of the image
//! let observations = vec![
//!     Observation::new("gold", 12.0, 40.0),
//!     Observation::new("yellow", 30.0, 40.0),
//!     Observation::new("violet", 48.0, 40.0),
//!     Observation::new("red", 66.0, 40.0),
//! ];
//! let reading = ResistorReader::new().read_observations(&observations)?;
//! println!("{}", reading.verbose());
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Read every detections file in a directory
//! resistor-inference predict --source runs/detect/
//!
//! # Pipe detections from stdin and print JSON
//! cat bands.json | resistor-inference predict --source - --json
//!
//! # Decode colors typed in reading order
//! resistor-inference decode brown black red gold
//! ```
//!
//! Detections are JSON arrays:
//!
//! ```json
//! [{"class_name": "red", "confidence": 0.91, "bbox": [10, 4, 18, 40]}]
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`palette`] | Color code tables ([`BandColor`]) |
//! | [`orientation`] | Reading directions ([`Orientation`]) |
//! | [`orderer`] | Band ordering ([`order`], [`correct_orientation`]) |
//! | [`decoder`] | Resistance decoding ([`decode`], [`Resistance`]) |
//! | [`reader`] | End-to-end [`ResistorReader`] |
//! | [`results`] | Output type ([`Reading`]) |
//! | [`config`] | [`ReaderConfig`] for filtering and defaults |
//! | [`source`] | Detection loading ([`Source`]) |
//! | [`error`] | Error types ([`ResistorError`], [`Result`]) |

// Modules
pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod observation;
pub mod orderer;
pub mod orientation;
pub mod palette;
pub mod reader;
pub mod results;
pub mod source;
pub mod utils;

// Re-export main types for convenience
pub use config::ReaderConfig;
pub use decoder::{Resistance, decode, decode_with_default};
pub use error::{ResistorError, Result};
pub use observation::{Detection, Observation};
pub use orderer::{BandOrder, correct_orientation, order};
pub use orientation::Orientation;
pub use palette::{BandColor, DEFAULT_TOLERANCE};
pub use reader::ResistorReader;
pub use results::Reading;
pub use source::{Source, SourceEntry};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
