// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Resistance decoding from bands in reading order.
//!
//! Bands one and two are significant digits, band three the multiplier and
//! band four, when present, the tolerance. Bands past the fourth are ignored.

use std::fmt;

use serde::Serialize;

use crate::error::{ResistorError, Result};
use crate::palette::{DEFAULT_TOLERANCE, digit_value, multiplier_value, tolerance_value};
use crate::utils::format_ohms;

/// A decoded resistance value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resistance {
    /// Resistance in ohms.
    pub ohms: f64,
    /// Tolerance string (e.g. `"±5%"`).
    pub tolerance: String,
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resistance: {} {}", format_ohms(self.ohms), self.tolerance)
    }
}

/// Decode bands already in reading order, defaulting to `±20%` when the
/// tolerance band is missing or unmapped.
///
/// The bands must already be orientation-corrected; see
/// [`crate::orderer::correct_orientation`].
///
/// # Errors
///
/// * [`ResistorError::NotEnoughBands`] for fewer than three bands.
/// * [`ResistorError::InvalidColorBands`] if a digit or the multiplier is absent.
pub fn decode<S: AsRef<str>>(bands: &[S]) -> Result<Resistance> {
    decode_with_default(bands, DEFAULT_TOLERANCE)
}

/// Decode bands already in reading order with a custom default tolerance.
///
/// # Arguments
///
/// * `bands` - Color labels in reading order.
/// * `default_tolerance` - Used when there is no fourth band, or its color
///   has no tolerance.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_with_default<S: AsRef<str>>(
    bands: &[S],
    default_tolerance: &str,
) -> Result<Resistance> {
    let [first, second, third, rest @ ..] = bands else {
        return Err(ResistorError::NotEnoughBands(bands.len()));
    };

    let (Some(d0), Some(d1), Some(multiplier)) = (
        digit_value(first.as_ref()),
        digit_value(second.as_ref()),
        multiplier_value(third.as_ref()),
    ) else {
        return Err(ResistorError::InvalidColorBands);
    };

    let ohms = f64::from(d0 * 10 + d1) * multiplier;
    let tolerance = rest
        .first()
        .and_then(|band| tolerance_value(band.as_ref()))
        .unwrap_or(default_tolerance)
        .to_string();

    Ok(Resistance { ohms, tolerance })
}
