//! # Error Handling
//!
//! This module defines the centralized error type for the `pack-models`
//! library. It uses the `thiserror` library to build a single `Error` enum
//! covering every failure the library can report, each with enough context
//! to produce a useful message for the user.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Resolution failures, model file problems,
//!   settings problems and wrapped I/O / serialization errors all live here.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library.
//!
//! The resolver itself reports `resolver::Unresolvable`, which converts into
//! `Error::UnresolvableReferenceSet` so callers only have to match one type.

use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::Unresolvable;

/// Main error type for pack-models operations
#[derive(Error, Debug)]
pub enum Error {
    /// The model set contains parent references that can never be attached:
    /// either a parent that does not exist or a cycle of parents.
    #[error(
        "{unresolved} models could not be attached ({queued} still queued); check for missing or cyclic parent references"
    )]
    UnresolvableReferenceSet {
        unresolved: usize,
        queued: usize,
        /// Qualified names of the models left in the queue, sorted.
        pending: Vec<String>,
    },

    /// Two model files map to the same qualified name.
    #[error("Duplicate model {name}: {first} and {second}")]
    DuplicateModel {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A model file could not be parsed.
    #[error("Failed to parse model {path}: {message}")]
    ModelParse { path: PathBuf, message: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An error occurred while parsing the settings file.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A directory walk error, wrapped from `walkdir::Error`.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl From<Unresolvable> for Error {
    fn from(err: Unresolvable) -> Self {
        Error::UnresolvableReferenceSet {
            unresolved: err.unresolved,
            queued: err.queued,
            pending: err.pending,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unresolvable() {
        let error = Error::UnresolvableReferenceSet {
            unresolved: 2,
            queued: 2,
            pending: vec!["ns:a".to_string(), "ns:b".to_string()],
        };
        let display = format!("{}", error);
        assert!(display.contains("2 models could not be attached"));
        assert!(display.contains("missing or cyclic"));
    }

    #[test]
    fn test_error_from_unresolvable() {
        let err = Unresolvable {
            unresolved: 1,
            queued: 1,
            pending: vec!["ns:item/b".to_string()],
        };
        match Error::from(err) {
            Error::UnresolvableReferenceSet {
                unresolved,
                queued,
                pending,
            } => {
                assert_eq!(unresolved, 1);
                assert_eq!(queued, 1);
                assert_eq!(pending, vec!["ns:item/b".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_display_duplicate_model() {
        let error = Error::DuplicateModel {
            name: "ns:item/sword".to_string(),
            first: PathBuf::from("a/sword.json"),
            second: PathBuf::from("b/sword.json"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Duplicate model ns:item/sword"));
        assert!(display.contains("a/sword.json"));
    }

    #[test]
    fn test_error_display_config_parse_with_hint() {
        let error = Error::ConfigParse {
            message: "unknown field `colour`".to_string(),
            hint: Some("Check the spelling of the key".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("Configuration parsing error"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(format!("{}", error).contains("JSON error"));
    }
}
