// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Reading directions for a photographed resistor.
//!
//! A resistor can appear at any rotation, so bands are tried along both image
//! axes in both directions. The order of [`Orientation::PRIORITY`] decides
//! which direction wins when several of them start with a tolerance band.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::observation::Observation;

/// Direction along which detected bands are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Sorted by x ascending.
    LeftToRight,
    /// Sorted by x descending.
    RightToLeft,
    /// Sorted by y ascending.
    TopToBottom,
    /// Sorted by y descending.
    BottomToTop,
}

impl Orientation {
    /// Candidate directions in the order they are tried.
    pub const PRIORITY: [Self; 4] = [
        Self::LeftToRight,
        Self::RightToLeft,
        Self::TopToBottom,
        Self::BottomToTop,
    ];

    /// Returns the kebab-case name of this orientation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftToRight => "left-to-right",
            Self::RightToLeft => "right-to-left",
            Self::TopToBottom => "top-to-bottom",
            Self::BottomToTop => "bottom-to-top",
        }
    }

    /// Compare two observations along this direction.
    ///
    /// Equal keys compare as equal so that a stable sort keeps input order.
    #[must_use]
    pub fn compare(&self, a: &Observation, b: &Observation) -> Ordering {
        match self {
            Self::LeftToRight => a.x.total_cmp(&b.x),
            Self::RightToLeft => b.x.total_cmp(&a.x),
            Self::TopToBottom => a.y.total_cmp(&b.y),
            Self::BottomToTop => b.y.total_cmp(&a.y),
        }
    }

    /// Return the observations stably sorted along this direction.
    #[must_use]
    pub fn sorted<'a>(&self, observations: &'a [Observation]) -> Vec<&'a Observation> {
        let mut sorted: Vec<&Observation> = observations.iter().collect();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(sorted: &[&Observation]) -> Vec<String> {
        sorted.iter().map(|o| o.color.clone()).collect()
    }

    #[test]
    fn test_orientation_display() {
        assert_eq!(Orientation::LeftToRight.to_string(), "left-to-right");
        assert_eq!(Orientation::BottomToTop.to_string(), "bottom-to-top");
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(Orientation::PRIORITY[0], Orientation::LeftToRight);
        assert_eq!(Orientation::PRIORITY[3], Orientation::BottomToTop);
        assert_eq!(Orientation::PRIORITY[1], Orientation::RightToLeft);
        assert_eq!(Orientation::PRIORITY[2], Orientation::TopToBottom);
    }

    #[test]
    fn test_sorted_along_each_axis() {
        let obs = vec![
            Observation::new("red", 2.0, 10.0),
            Observation::new("gold", 0.0, 30.0),
            Observation::new("blue", 1.0, 20.0),
        ];
        assert_eq!(
            labels(&Orientation::LeftToRight.sorted(&obs)),
            ["gold", "blue", "red"]
        );
        assert_eq!(
            labels(&Orientation::RightToLeft.sorted(&obs)),
            ["red", "blue", "gold"]
        );
        assert_eq!(
            labels(&Orientation::TopToBottom.sorted(&obs)),
            ["red", "blue", "gold"]
        );
        assert_eq!(
            labels(&Orientation::BottomToTop.sorted(&obs)),
            ["gold", "blue", "red"]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let obs = vec![
            Observation::new("brown", 5.0, 0.0),
            Observation::new("black", 5.0, 0.0),
            Observation::new("gold", 1.0, 0.0),
        ];
        assert_eq!(
            labels(&Orientation::LeftToRight.sorted(&obs)),
            ["gold", "brown", "black"]
        );
        assert_eq!(
            labels(&Orientation::RightToLeft.sorted(&obs)),
            ["brown", "black", "gold"]
        );
        assert_eq!(
            labels(&Orientation::TopToBottom.sorted(&obs)),
            ["brown", "black", "gold"]
        );
    }
}
