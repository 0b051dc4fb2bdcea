// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for band ordering, decoding and detection loading.

use std::fmt;

/// Result type alias for resistor reading operations.
pub type Result<T> = std::result::Result<T, ResistorError>;

/// Main error type for the resistor reading library.
#[derive(Debug)]
pub enum ResistorError {
    /// No sort axis placed a gold or silver band first, so the reading
    /// direction could not be determined.
    NoValidOrdering,
    /// Fewer than three bands remained after ordering.
    NotEnoughBands(usize),
    /// One of the first three bands lacks the digit or multiplier it needs.
    InvalidColorBands,
    /// Detection source could not be resolved.
    SourceError(String),
    /// Detection file could not be parsed.
    ParseError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl ResistorError {
    /// Whether this error describes the detections themselves rather than
    /// a failure to load them.
    ///
    /// Reading errors are expected outcomes for ambiguous or insufficient
    /// input; the caller recovers by supplying a new image.
    #[must_use]
    pub const fn is_reading_error(&self) -> bool {
        matches!(
            self,
            Self::NoValidOrdering | Self::NotEnoughBands(_) | Self::InvalidColorBands
        )
    }
}

impl fmt::Display for ResistorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValidOrdering => write!(f, "No color bands detected"),
            Self::NotEnoughBands(n) => write!(
                f,
                "Invalid resistor reading (not enough bands detected: {n})"
            ),
            Self::InvalidColorBands => write!(f, "Invalid resistor color bands"),
            Self::SourceError(msg) => write!(f, "Source error: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ResistorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ResistorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ResistorError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ResistorError::NoValidOrdering.to_string(),
            "No color bands detected"
        );
        assert_eq!(
            ResistorError::NotEnoughBands(2).to_string(),
            "Invalid resistor reading (not enough bands detected: 2)"
        );
        assert_eq!(
            ResistorError::InvalidColorBands.to_string(),
            "Invalid resistor color bands"
        );
    }

    #[test]
    fn test_reading_error_classification() {
        assert!(ResistorError::NoValidOrdering.is_reading_error());
        assert!(ResistorError::NotEnoughBands(0).is_reading_error());
        assert!(ResistorError::InvalidColorBands.is_reading_error());
        assert!(!ResistorError::SourceError("missing".into()).is_reading_error());
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = ResistorError::from(err);
        assert!(matches!(err, ResistorError::ParseError(_)));
        assert!(!err.is_reading_error());
    }
}
