// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use serde_json::{Value, json};

use crate::cli::args::PredictArgs;
use crate::cli::logging::{paint_bands, set_verbose};
use crate::error::Result;
use crate::utils::pluralize;
use crate::{ReaderConfig, Reading, ResistorReader, Source, SourceEntry, VERSION};
use crate::{error, info, section, success, verbose, warn};

/// Read resistor values from band detections.
pub fn run_prediction(args: &PredictArgs) {
    set_verbose(args.verbose && !args.json);

    let config = ReaderConfig::new()
        .with_confidence(args.conf)
        .with_default_tolerance(args.default_tolerance.clone());
    let reader = ResistorReader::with_config(config);

    let source = Source::from(args.source.as_str());
    let entries = match source.load() {
        Ok(entries) => entries,
        Err(e) => {
            error!("Error loading detections: {e}");
            process::exit(1);
        }
    };

    section!("Resistor Inference {VERSION} 🚀 conf={}", args.conf);

    let total = entries.len();
    let mut read_count = 0;
    for (i, SourceEntry { path, detections }) in entries.into_iter().enumerate() {
        let result = detections.and_then(|detections| {
            let observations = reader.observations(&detections);
            verbose!(
                "detections {}/{} {}: {} kept of {}",
                i + 1,
                total,
                path,
                observations.len(),
                detections.len()
            );
            reader.read_observations(&observations)
        });
        if result.is_ok() {
            read_count += 1;
        }

        if args.json {
            info!("{}", prediction_record(&path, &result));
            continue;
        }
        match result {
            Ok(reading) => success!("{path}: {}", format_reading(&reading)),
            Err(e) if e.is_reading_error() => warn!("{path}: {e}"),
            Err(e) => error!("{path}: {e}"),
        }
    }

    verbose!(
        "Read {read_count}/{total} {}",
        pluralize("resistor", total)
    );
}

/// Format a reading like `"[red, violet, yellow, gold] 270kΩ ±5% (right-to-left)"`.
#[must_use]
pub fn format_reading(reading: &Reading) -> String {
    format!(
        "{} {} {} ({})",
        paint_bands(&reading.bands),
        reading.formatted_resistance(),
        reading.tolerance,
        reading.orientation
    )
}

/// JSON record for one detections file, carrying either the reading or the
/// error message. Files that failed to load are recorded the same way.
#[must_use]
pub fn prediction_record(path: &str, result: &Result<Reading>) -> Value {
    match result {
        Ok(reading) => json!({ "path": path, "reading": reading }),
        Err(e) => json!({ "path": path, "error": e.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResistorError;
    use crate::observation::Observation;

    fn reading() -> Reading {
        ResistorReader::new()
            .read_observations(&[
                Observation::new("gold", 0.0, 0.0),
                Observation::new("yellow", 1.0, 0.0),
                Observation::new("violet", 2.0, 0.0),
                Observation::new("red", 3.0, 0.0),
            ])
            .unwrap()
    }

    #[test]
    fn test_format_reading() {
        colored::control::set_override(false);
        assert_eq!(
            format_reading(&reading()),
            "[red, violet, yellow, gold] 270kΩ ±5% (left-to-right)"
        );
    }

    #[test]
    fn test_prediction_record_success() {
        let record = prediction_record("a.json", &Ok(reading()));
        assert_eq!(record["path"], "a.json");
        assert_eq!(record["reading"]["tolerance"], "±5%");
        assert_eq!(record["reading"]["orientation"], "left-to-right");
        assert!(record.get("error").is_none());
    }

    #[test]
    fn test_prediction_record_error() {
        let record = prediction_record("b.json", &Err(ResistorError::NoValidOrdering));
        assert_eq!(record["error"], "No color bands detected");
        assert!(record.get("reading").is_none());
    }

    #[test]
    fn test_prediction_record_load_error() {
        let error = crate::source::parse_detections("[{").unwrap_err();
        assert!(!error.is_reading_error());
        let record = prediction_record("c.json", &Err(error));
        assert_eq!(record["path"], "c.json");
        assert!(
            record["error"]
                .as_str()
                .is_some_and(|msg| msg.starts_with("Parse error:"))
        );
    }
}
