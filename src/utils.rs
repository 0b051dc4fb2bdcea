// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Utility functions for formatting readings

/// Format a resistance with an SI prefix.
///
/// Values keep at most two decimals with trailing zeros removed.
///
/// # Arguments
///
/// * `ohms` - Resistance in ohms.
///
/// # Returns
///
/// A string such as `"4.7kΩ"`, `"1MΩ"` or `"0.47Ω"`.
#[must_use]
pub fn format_ohms(ohms: f64) -> String {
    const PREFIXES: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];

    let (scaled, prefix) = PREFIXES
        .iter()
        .find(|(scale, _)| ohms.abs() >= *scale)
        .map_or((ohms, ""), |(scale, prefix)| (ohms / scale, *prefix));

    format!("{}{prefix}Ω", trim_decimals(scaled))
}

/// Render with two decimals, dropping trailing zeros and a bare point.
fn trim_decimals(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Get the plural form of a word
///
/// # Arguments
///
/// * `word` - The word to pluralize
/// * `count` - How many of it there are
///
/// # Returns
///
/// The word unchanged for a count of one, otherwise with an `s` appended.
#[must_use]
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ohms() {
        assert_eq!(format_ohms(0.0), "0Ω");
        assert_eq!(format_ohms(10.0), "10Ω");
        assert_eq!(format_ohms(4.7), "4.7Ω");
        assert_eq!(format_ohms(47.0 * 0.01), "0.47Ω");
        assert_eq!(format_ohms(1000.0), "1kΩ");
        assert_eq!(format_ohms(4700.0), "4.7kΩ");
        assert_eq!(format_ohms(22_000.0), "22kΩ");
        assert_eq!(format_ohms(470_000.0), "470kΩ");
        assert_eq!(format_ohms(1_000_000.0), "1MΩ");
        assert_eq!(format_ohms(99e9), "99GΩ");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("band", 1), "band");
        assert_eq!(pluralize("band", 4), "bands");
        assert_eq!(pluralize("reading", 0), "readings");
        assert_eq!(pluralize("source", 2), "sources");
        assert_eq!(pluralize("resistor", 2), "resistors");
    }
}
