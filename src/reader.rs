// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! End-to-end resistor reading.
//!
//! This module provides the [`ResistorReader`] struct, which turns the band
//! detections for one image into a [`Reading`]: low-confidence detections are
//! dropped, the rest are ordered, the orientation is corrected once and the
//! bands are decoded.

use crate::config::ReaderConfig;
use crate::decoder::decode_with_default;
use crate::error::Result;
use crate::observation::{Detection, Observation, observations_above};
use crate::orderer::order;
use crate::results::Reading;

/// Reads resistor values from band detections.
///
/// # Example
///
/// ```
/// use resistor_inference::{Detection, ResistorReader};
///
/// let detections = vec![
///     Detection::new("gold", 0.9, [0.0, 0.0, 4.0, 20.0]),
///     Detection::new("yellow", 0.9, [10.0, 0.0, 14.0, 20.0]),
///     Detection::new("violet", 0.9, [20.0, 0.0, 24.0, 20.0]),
///     Detection::new("red", 0.9, [30.0, 0.0, 34.0, 20.0]),
/// ];
/// let reading = ResistorReader::new().read(&detections)?;
/// assert_eq!(reading.bands, ["red", "violet", "yellow", "gold"]);
/// assert_eq!(reading.formatted_resistance(), "270kΩ");
/// assert_eq!(reading.tolerance, "±5%");
/// # Ok::<(), resistor_inference::ResistorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResistorReader {
    config: ReaderConfig,
}

impl ResistorReader {
    /// Create a reader with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Filter detections by confidence and reduce them to observations.
    #[must_use]
    pub fn observations(&self, detections: &[Detection]) -> Vec<Observation> {
        observations_above(detections, self.config.confidence_threshold)
    }

    /// Read a resistor from the detections of one image.
    ///
    /// # Errors
    ///
    /// Returns a reading error if no orientation can be found or the ordered
    /// bands do not decode.
    pub fn read(&self, detections: &[Detection]) -> Result<Reading> {
        self.read_observations(&self.observations(detections))
    }

    /// Read a resistor from observations that are already filtered.
    ///
    /// # Errors
    ///
    /// Same as [`ResistorReader::read`].
    pub fn read_observations(&self, observations: &[Observation]) -> Result<Reading> {
        let ordering = order(observations)?;
        let orientation = ordering.orientation();
        let bands = ordering.into_reading_order();
        let resistance = decode_with_default(bands.as_slice(), &self.config.default_tolerance)?;
        Ok(Reading::new(bands, orientation, resistance))
    }
}
