// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Band ordering.
//!
//! The tolerance band (gold or silver) is the last band of a correctly read
//! resistor. Observations are sorted along each [`Orientation`] in priority
//! order and the first sort that puts a tolerance band in front is taken. The
//! result is then reversed once so the significant digits come first.
//!
//! Resistors without a gold or silver band cannot be oriented this way and
//! yield [`ResistorError::NoValidOrdering`].

use crate::error::{ResistorError, Result};
use crate::observation::Observation;
use crate::orientation::Orientation;
use crate::palette::is_tolerance_color;

/// Bands as sorted by the winning orientation, tolerance band first.
///
/// The sequence is not yet in reading order. [`BandOrder::into_reading_order`]
/// consumes it and applies the orientation correction, so the correction can
/// only happen once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandOrder {
    orientation: Orientation,
    colors: Vec<String>,
}

impl BandOrder {
    /// Orientation whose sort placed a tolerance band first.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Colors in sorted order, tolerance band first.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Consume the ordering and return the colors in reading order.
    #[must_use]
    pub fn into_reading_order(self) -> Vec<String> {
        correct_orientation(self.colors)
    }
}

/// Determine the reading direction of a set of observations.
///
/// # Arguments
///
/// * `observations` - Detected bands in detector order. Ties along a sort
///   axis keep this order.
///
/// # Errors
///
/// Returns [`ResistorError::NoValidOrdering`] if `observations` is empty or
/// no orientation starts with a gold or silver band.
pub fn order(observations: &[Observation]) -> Result<BandOrder> {
    if observations.is_empty() {
        return Err(ResistorError::NoValidOrdering);
    }

    Orientation::PRIORITY
        .into_iter()
        .find_map(|orientation| {
            let sorted = orientation.sorted(observations);
            sorted
                .first()
                .is_some_and(|first| is_tolerance_color(&first.color))
                .then(|| BandOrder {
                    orientation,
                    colors: sorted.iter().map(|o| o.color.clone()).collect(),
                })
        })
        .ok_or(ResistorError::NoValidOrdering)
}

/// Reverse a sequence that starts with a gold or silver band.
///
/// Apply this exactly once between ordering and decoding: a second call on a
/// sequence that also ends in gold or silver would undo the first.
#[must_use]
pub fn correct_orientation(mut colors: Vec<String>) -> Vec<String> {
    if colors.first().is_some_and(|c| is_tolerance_color(c)) {
        colors.reverse();
    }
    colors
}
