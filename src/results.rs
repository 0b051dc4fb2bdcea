// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Results of reading one resistor.

use serde::Serialize;

use crate::decoder::Resistance;
use crate::orientation::Orientation;
use crate::utils::{format_ohms, pluralize};

/// Successful reading of one resistor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    /// Band colors in reading order, significant digits first.
    pub bands: Vec<String>,
    /// Orientation the bands were read in.
    pub orientation: Orientation,
    /// Resistance in ohms.
    pub resistance: f64,
    /// Tolerance string.
    pub tolerance: String,
}

impl Reading {
    /// Build a reading from ordered bands and their decoded value.
    #[must_use]
    pub fn new(bands: Vec<String>, orientation: Orientation, resistance: Resistance) -> Self {
        Self {
            bands,
            orientation,
            resistance: resistance.ohms,
            tolerance: resistance.tolerance,
        }
    }

    /// Resistance formatted with an SI prefix (e.g. `"4.7kΩ"`).
    #[must_use]
    pub fn formatted_resistance(&self) -> String {
        format_ohms(self.resistance)
    }

    /// Return a one-line summary of the reading.
    ///
    /// # Returns
    ///
    /// * A string like `"4 bands (red, violet, yellow, gold) left-to-right: 470kΩ ±5%"`.
    #[must_use]
    pub fn verbose(&self) -> String {
        let count = self.bands.len();
        format!(
            "{count} {} ({}) {}: {} {}",
            pluralize("band", count),
            self.bands.join(", "),
            self.orientation,
            self.formatted_resistance(),
            self.tolerance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reading {
        Reading::new(
            ["red", "violet", "yellow", "gold"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            Orientation::RightToLeft,
            Resistance {
                ohms: 470_000.0,
                tolerance: "±5%".to_string(),
            },
        )
    }

    #[test]
    fn test_serializes_orientation_kebab_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["orientation"], "right-to-left");
        assert_eq!(json["bands"][0], "red");
        assert_eq!(json["resistance"], 470_000.0);
        assert_eq!(json["tolerance"], "±5%");
    }

    #[test]
    fn test_verbose() {
        assert_eq!(
            sample().verbose(),
            "4 bands (red, violet, yellow, gold) right-to-left: 470kΩ ±5%"
        );
    }
}
