//! Flat model paths.
//!
//! Evaluation exports and similar single-stream layouts write each model
//! directly under the base: `{base_path}/{timestamp}`.
//!
//! ```text
//! gs://your-bucket/eval/   # base_path
//!   1582072718/            # UTC timestamp in seconds
//!     (model artifacts)
//! ```

use serde::Serialize;

use crate::error::{Error, Result};
use crate::paths::{is_timestamp_segment, parse_timestamp_segment};
use crate::storage::DirectoryLister;

const LAYOUT: &str = "flat";

/// Components of a flat model path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatModelPath {
    pub base_path: String,
    pub timestamp: u64,
}

impl FlatModelPath {
    /// The joined path string for these components.
    pub fn path(&self) -> String {
        model_path(&self.base_path, self.timestamp)
    }
}

/// Build the model path for a timestamped export under a base.
pub fn model_path(base_path: &str, timestamp: u64) -> String {
    format!("{}/{}", base_path, timestamp)
}

/// Find all model paths under a base path.
///
/// Keeps the children of `base_path` that are all-digit directory names.
/// Everything else is skipped. Lister failures propagate untranslated.
pub fn find_model_paths<L: DirectoryLister + ?Sized>(
    lister: &L,
    base_path: &str,
) -> Result<Vec<String>> {
    let mut found = Vec::new();

    for child in lister.list_children(base_path)? {
        if !is_timestamp_segment(&child) {
            tracing::debug!("Skipping non-timestamp entry: {}/{}", base_path, child);
            continue;
        }
        let model_path = format!("{}/{}", base_path, child);
        if lister.is_directory(&model_path) {
            found.push(model_path);
        }
    }

    Ok(found)
}

/// Find the single model path under a base path.
///
/// Same contract as the exporter flavor: zero matches is `NoModelFound`,
/// more than one is `MultipleModelsFound`.
pub fn find_only_model_path<L: DirectoryLister + ?Sized>(
    lister: &L,
    base_path: &str,
) -> Result<String> {
    let mut found = find_model_paths(lister, base_path)?;
    match found.len() {
        0 => Err(Error::NoModelFound(base_path.to_string())),
        1 => Ok(found.remove(0)),
        _ => Err(Error::MultipleModelsFound {
            base: base_path.to_string(),
            found,
        }),
    }
}

/// Parse a path as a flat model path.
///
/// Everything before the final `/` is the base; the trailing segment must be
/// all digits.
pub fn parse_model_path(path: &str) -> Result<FlatModelPath> {
    split_model_path(path).ok_or_else(|| Error::InvalidModelPath {
        layout: LAYOUT,
        path: path.to_string(),
    })
}

fn split_model_path(path: &str) -> Option<FlatModelPath> {
    let (base_path, timestamp_segment) = path.rsplit_once('/')?;
    let timestamp = parse_timestamp_segment(timestamp_segment)?;

    Some(FlatModelPath {
        base_path: base_path.to_string(),
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryLister;

    #[test]
    fn test_model_path() {
        assert_eq!(
            model_path("gs://bucket/eval", 1582072718),
            "gs://bucket/eval/1582072718"
        );
    }

    #[test]
    fn test_parse_model_path() {
        let parsed = parse_model_path("gs://bucket/eval/1582072718").unwrap();
        assert_eq!(
            parsed,
            FlatModelPath {
                base_path: "gs://bucket/eval".to_string(),
                timestamp: 1582072718,
            }
        );
        assert_eq!(parsed.path(), "gs://bucket/eval/1582072718");
    }

    #[test]
    fn test_parse_model_path_round_trip() {
        let cases = [("gs://bucket/eval", 1582072718), ("/tmp/eval", 0), ("", 1)];
        for (base_path, timestamp) in cases {
            let parsed = parse_model_path(&model_path(base_path, timestamp)).unwrap();
            assert_eq!(parsed.base_path, base_path);
            assert_eq!(parsed.timestamp, timestamp);
        }
    }

    #[test]
    fn test_parse_model_path_rejects_malformed() {
        let malformed = [
            // No separator at all
            "1582072718",
            // Empty timestamp segment
            "gs://bucket/eval/",
            // Non-digit timestamp segment
            "gs://bucket/eval/latest",
            // Whitespace in the timestamp segment
            "gs://bucket/eval/1582072718 ",
            "gs://bucket/eval/ 1582072718",
        ];
        for path in malformed {
            let result = parse_model_path(path);
            assert!(
                matches!(result, Err(Error::InvalidModelPath { .. })),
                "expected rejection for {:?}",
                path
            );
        }
    }

    #[test]
    fn test_find_model_paths_filters_children() {
        let lister = MemoryLister::new()
            .dir("gs://bucket/eval")
            .dir("gs://bucket/eval/1582072718")
            .dir("gs://bucket/eval/notadigit")
            .file("gs://bucket/eval/1582072719");

        let found = find_model_paths(&lister, "gs://bucket/eval").unwrap();
        assert_eq!(found, vec!["gs://bucket/eval/1582072718"]);
    }

    #[test]
    fn test_find_model_paths_missing_base_propagates() {
        let lister = MemoryLister::new();
        assert!(matches!(
            find_model_paths(&lister, "gs://bucket/eval"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_find_only_model_path() {
        let lister = MemoryLister::new()
            .dir("/eval")
            .dir("/eval/1582072718");
        assert_eq!(
            find_only_model_path(&lister, "/eval").unwrap(),
            "/eval/1582072718"
        );
    }

    #[test]
    fn test_find_only_model_path_none_found() {
        let lister = MemoryLister::new().dir("/eval").dir("/eval/not_a_model");
        let result = find_only_model_path(&lister, "/eval");
        assert!(matches!(result, Err(Error::NoModelFound(base)) if base == "/eval"));
    }

    #[test]
    fn test_find_only_model_path_multiple_found() {
        let lister = MemoryLister::new()
            .dir("/eval")
            .dir("/eval/1582072718")
            .dir("/eval/1582858365");

        match find_only_model_path(&lister, "/eval") {
            Err(Error::MultipleModelsFound { base, found }) => {
                assert_eq!(base, "/eval");
                assert_eq!(
                    found,
                    vec!["/eval/1582072718".to_string(), "/eval/1582858365".to_string()]
                );
            }
            other => panic!("expected MultipleModelsFound, got {:?}", other),
        }
    }
}
