// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Detection source handling.
//!
//! Band detections arrive as JSON arrays of [`Detection`] records, one array
//! per image. A source is a single file, a directory of `.json` files, or
//! stdin. A file that cannot be read or parsed fails only its own entry.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{ResistorError, Result};
use crate::observation::Detection;

/// Represents the places band detections can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Path to a JSON detections file.
    File(PathBuf),
    /// Directory containing JSON detections files.
    Directory(PathBuf),
    /// Standard input.
    Stdin,
}

/// Detections loaded for one image.
#[derive(Debug)]
pub struct SourceEntry {
    /// Path or identifier of the detections file.
    pub path: String,
    /// Detections in file order, or why this file could not be loaded.
    pub detections: Result<Vec<Detection>>,
}

impl Source {
    /// Load all detections from this source.
    ///
    /// Directory entries are read in file name order; files without a
    /// `.json` extension are skipped. Read and parse failures are reported
    /// in the affected [`SourceEntry`].
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not exist, a directory holds no
    /// `.json` files, or stdin cannot be read.
    pub fn load(&self) -> Result<Vec<SourceEntry>> {
        match self {
            Self::File(path) => {
                if !path.exists() {
                    return Err(ResistorError::SourceError(format!(
                        "Detections file not found: {}",
                        path.display()
                    )));
                }
                Ok(vec![load_file(path)])
            }
            Self::Directory(dir) => {
                let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
                    .filter_map(std::result::Result::ok)
                    .map(|entry| entry.path())
                    .filter(|p| p.is_file() && is_json(p))
                    .collect();
                paths.sort();

                if paths.is_empty() {
                    return Err(ResistorError::SourceError(format!(
                        "No .json detection files found in {}",
                        dir.display()
                    )));
                }

                Ok(paths.iter().map(|p| load_file(p)).collect())
            }
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(vec![SourceEntry {
                    path: "stdin".to_string(),
                    detections: parse_detections(&text),
                }])
            }
        }
    }
}

/// Convert from a string path to Source.
impl From<&str> for Source {
    fn from(s: &str) -> Self {
        if s == "-" {
            return Self::Stdin;
        }

        let path = PathBuf::from(s);
        if path.is_dir() {
            Self::Directory(path)
        } else {
            Self::File(path)
        }
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Self::from(path.to_string_lossy().as_ref())
    }
}

/// Parse a JSON array of detections.
///
/// # Errors
///
/// Returns [`ResistorError::ParseError`] for malformed input.
pub fn parse_detections(text: &str) -> Result<Vec<Detection>> {
    Ok(serde_json::from_str(text)?)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn load_file(path: &Path) -> SourceEntry {
    let detections = fs::read_to_string(path)
        .map_err(ResistorError::from)
        .and_then(|text| parse_detections(&text));

    SourceEntry {
        path: path.display().to_string(),
        detections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
    }

    #[test]
    fn test_source_from_string() {
        assert_eq!(Source::from("-"), Source::Stdin);
        assert!(matches!(
            Source::from("missing_detections.json"),
            Source::File(_)
        ));
        assert!(matches!(
            Source::from(fixtures().as_path()),
            Source::Directory(_)
        ));
    }

    #[test]
    fn test_parse_detections() {
        let text = r#"[
            {"class_name": "red", "confidence": 0.91, "bbox": [10, 4, 18, 40]},
            {"class_name": "gold", "bbox": [40, 4, 46, 40]}
        ]"#;
        let detections = parse_detections(text).unwrap();
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].class_name, "red");
        assert!((detections[1].confidence - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_detections_malformed() {
        let err = parse_detections(r#"[{"class_name": "red"}]"#).unwrap_err();
        assert!(matches!(err, ResistorError::ParseError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Source::File(PathBuf::from("does/not/exist.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, ResistorError::SourceError(_)));
    }

    #[test]
    fn test_load_directory_sorted() {
        let entries = Source::Directory(fixtures()).load().unwrap();
        let names: Vec<String> = entries
            .iter()
            .map(|e| {
                Path::new(&e.path)
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"horizontal_gold_left.json".to_string()));
    }

    #[test]
    fn test_malformed_file_fails_only_its_entry() {
        let entries = Source::Directory(fixtures().join("mixed")).load().unwrap();
        assert_eq!(entries.len(), 2);

        assert!(entries[0].path.ends_with("a_gold_left.json"));
        assert_eq!(entries[0].detections.as_ref().unwrap().len(), 4);

        assert!(entries[1].path.ends_with("b_truncated.json"));
        assert!(matches!(
            entries[1].detections,
            Err(ResistorError::ParseError(_))
        ));
    }

    #[test]
    fn test_malformed_single_file_is_an_entry_error() {
        let entries = Source::File(fixtures().join("mixed/b_truncated.json"))
            .load()
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].detections.is_err());
    }
}
