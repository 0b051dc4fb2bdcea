// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Detected bands.
//!
//! A [`Detection`] is one record from the band detector: a class label, a
//! confidence and an `[x1, y1, x2, y2]` box in pixels. The orderer only needs
//! the label and a position, so each detection is reduced to an
//! [`Observation`] at its box center.

use serde::{Deserialize, Serialize};

/// One detected band, reduced to its color label and center position.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Color label as emitted by the detector.
    pub color: String,
    /// Horizontal center in pixels.
    pub x: f64,
    /// Vertical center in pixels.
    pub y: f64,
}

impl Observation {
    /// Create a new observation.
    #[must_use]
    pub fn new(color: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            color: color.into(),
            x,
            y,
        }
    }
}

impl From<&Detection> for Observation {
    fn from(detection: &Detection) -> Self {
        let (x, y) = detection.center();
        Self::new(detection.class_name.clone(), f64::from(x), f64::from(y))
    }
}

const fn default_confidence() -> f32 {
    1.0
}

/// Band detection as produced by the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Color class name (e.g. `"red"`).
    pub class_name: String,
    /// Detection confidence (0.0 - 1.0). Defaults to 1.0 when absent.
    #[serde(default = "default_confidence")]
    pub confidence: f32,
    /// Bounding box [x1, y1, x2, y2] in pixels
    pub bbox: [f32; 4],
}

impl Detection {
    /// Create a new detection.
    ///
    /// # Arguments
    ///
    /// * `class_name` - Color label.
    /// * `confidence` - Detector confidence.
    /// * `bbox` - Box as `[x1, y1, x2, y2]`.
    #[must_use]
    pub fn new(class_name: impl Into<String>, confidence: f32, bbox: [f32; 4]) -> Self {
        Self {
            class_name: class_name.into(),
            confidence,
            bbox,
        }
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        let [x1, y1, x2, y2] = self.bbox;
        ((x1 + x2) / 2.0, (y1 + y2) / 2.0)
    }
}

/// Keep detections at or above `threshold` and convert them to observations,
/// preserving detector order.
#[must_use]
pub fn observations_above(detections: &[Detection], threshold: f32) -> Vec<Observation> {
    detections
        .iter()
        .filter(|d| d.confidence >= threshold)
        .map(Observation::from)
        .collect()
}
