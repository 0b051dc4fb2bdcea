// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Resistor color code palette.
//!
//! Each of the 12 recognized band colors maps independently to a significant
//! digit, a multiplier and a tolerance. The three tables are partial: gold and
//! silver have no digit, and only eight colors carry a tolerance. A missing
//! entry is reported as `None`, never as zero, since black's digit is a real 0.
//!
//! Lookups by label (`digit_value`, `multiplier_value`, `tolerance_value`)
//! treat any string outside the palette as absent from all three tables.

use std::fmt;
use std::str::FromStr;

/// Tolerance assumed when the tolerance band is missing or unmapped.
pub const DEFAULT_TOLERANCE: &str = "±20%";

/// A recognized resistor band color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
    Gold,
    Silver,
}

impl BandColor {
    /// All palette colors, digit colors first in digit order.
    pub const ALL: [Self; 12] = [
        Self::Black,
        Self::Brown,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Violet,
        Self::Gray,
        Self::White,
        Self::Gold,
        Self::Silver,
    ];

    /// Returns the detector class label for this color.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Gray => "gray",
            Self::White => "white",
            Self::Gold => "gold",
            Self::Silver => "silver",
        }
    }

    /// Look up a detector label. Matching is exact, as detector labels are.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }

    /// Significant digit value, defined for black through white only.
    #[must_use]
    pub const fn digit(&self) -> Option<u8> {
        match self {
            Self::Black => Some(0),
            Self::Brown => Some(1),
            Self::Red => Some(2),
            Self::Orange => Some(3),
            Self::Yellow => Some(4),
            Self::Green => Some(5),
            Self::Blue => Some(6),
            Self::Violet => Some(7),
            Self::Gray => Some(8),
            Self::White => Some(9),
            Self::Gold | Self::Silver => None,
        }
    }

    /// Multiplier value. Every palette color has one; gold and silver
    /// divide rather than multiply.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Black => 1.0,
            Self::Brown => 10.0,
            Self::Red => 100.0,
            Self::Orange => 1_000.0,
            Self::Yellow => 10_000.0,
            Self::Green => 100_000.0,
            Self::Blue => 1_000_000.0,
            Self::Violet => 10_000_000.0,
            Self::Gray => 100_000_000.0,
            Self::White => 1_000_000_000.0,
            Self::Gold => 0.1,
            Self::Silver => 0.01,
        }
    }

    /// Tolerance string, defined for eight colors.
    #[must_use]
    pub const fn tolerance(&self) -> Option<&'static str> {
        match self {
            Self::Brown => Some("±1%"),
            Self::Red => Some("±2%"),
            Self::Green => Some("±0.5%"),
            Self::Blue => Some("±0.25%"),
            Self::Violet => Some("±0.1%"),
            Self::Gray => Some("±0.05%"),
            Self::Gold => Some("±5%"),
            Self::Silver => Some("±10%"),
            Self::Black | Self::Orange | Self::Yellow | Self::White => None,
        }
    }

    /// Gold and silver only ever mark tolerance, so they sit at the end of a
    /// correctly read resistor.
    #[must_use]
    pub const fn is_tolerance_only(&self) -> bool {
        matches!(self, Self::Gold | Self::Silver)
    }

    /// RGB swatch used when printing bands to a terminal.
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::Brown => (139, 69, 19),
            Self::Red => (220, 20, 60),
            Self::Orange => (255, 140, 0),
            Self::Yellow => (255, 215, 0),
            Self::Green => (34, 139, 34),
            Self::Blue => (30, 90, 220),
            Self::Violet => (148, 0, 211),
            Self::Gray => (128, 128, 128),
            Self::White => (245, 245, 245),
            Self::Gold => (212, 175, 55),
            Self::Silver => (192, 192, 192),
        }
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BandColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ColorParseError(s.to_string()))
    }
}

/// Error returned when parsing a label outside the palette.
#[derive(Debug, Clone)]
pub struct ColorParseError(String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown band color '{}'", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// Digit value for a label, `None` if the label has none.
#[must_use]
pub fn digit_value(label: &str) -> Option<u8> {
    BandColor::from_label(label).and_then(|c| c.digit())
}

/// Multiplier for a label, `None` if the label is outside the palette.
#[must_use]
pub fn multiplier_value(label: &str) -> Option<f64> {
    BandColor::from_label(label).map(|c| c.multiplier())
}

/// Tolerance string for a label, `None` if the label has none.
#[must_use]
pub fn tolerance_value(label: &str) -> Option<&'static str> {
    BandColor::from_label(label).and_then(|c| c.tolerance())
}

/// Whether a label is gold or silver.
#[must_use]
pub fn is_tolerance_color(label: &str) -> bool {
    BandColor::from_label(label).is_some_and(|c| c.is_tolerance_only())
}
