// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Reader configuration.
//!
//! This module defines the [`ReaderConfig`] struct, which controls how raw band
//! detections are filtered before ordering and what tolerance is reported when
//! a resistor has no readable tolerance band.

use crate::palette::DEFAULT_TOLERANCE;

/// Configuration for reading resistors from band detections.
///
/// It uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use resistor_inference::ReaderConfig;
///
/// let config = ReaderConfig::new()
///     .with_confidence(0.6)
///     .with_default_tolerance("±20%");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Confidence threshold for band detections (0.0 to 1.0).
    /// Detections scoring below this value are dropped before ordering.
    pub confidence_threshold: f32,
    /// Tolerance reported when the fourth band is missing or carries no
    /// tolerance. Unmarked resistors are conventionally ±20%.
    pub default_tolerance: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            default_tolerance: DEFAULT_TOLERANCE.to_string(),
        }
    }
}

impl ReaderConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - The minimum detection confidence (0.0 to 1.0).
    #[must_use]
    pub const fn with_confidence(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Set the tolerance reported for resistors without a tolerance band.
    #[must_use]
    pub fn with_default_tolerance(mut self, tolerance: impl Into<String>) -> Self {
        self.default_tolerance = tolerance.into();
        self
    }
}
