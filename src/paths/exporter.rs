//! Exporter-flavored model paths.
//!
//! Training jobs that run one or more named exporters write each model under
//! `{export_path}/export/{exporter_name}/{timestamp}`:
//!
//! ```text
//! gs://your-bucket/training-run/   # export_path
//!   export/                        # constant segment
//!     my_exporter/                 # exporter_name
//!       1582798459/                # UTC timestamp in seconds
//!         (model artifacts)
//! ```

use serde::Serialize;

use crate::error::{Error, Result};
use crate::paths::{is_timestamp_segment, parse_timestamp_segment};
use crate::storage::DirectoryLister;

/// The constant directory segment between the export path and the exporter
/// name. Case-sensitive.
pub const EXPORT_SEGMENT: &str = "export";

const LAYOUT: &str = "exporter-flavored";

/// Components of an exporter-flavored model path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExporterModelPath {
    pub export_path: String,
    pub exporter_name: String,
    pub timestamp: u64,
}

impl ExporterModelPath {
    /// The joined path string for these components.
    pub fn path(&self) -> String {
        model_path(&self.export_path, &self.exporter_name, self.timestamp)
    }
}

/// Build the model path for an exporter run.
///
/// The timestamp is rendered as an unpadded, unsigned decimal. The caller is
/// responsible for `exporter_name` being a single non-empty path segment
/// (no `/`); `parse_model_path` cannot invert paths built from names that
/// violate this.
pub fn model_path(export_path: &str, exporter_name: &str, timestamp: u64) -> String {
    format!(
        "{}/{}/{}/{}",
        export_path, EXPORT_SEGMENT, exporter_name, timestamp
    )
}

/// Find all model paths under an export path.
///
/// Lists `{export_path}/export`, then each exporter directory beneath it,
/// and keeps the grandchildren that are all-digit directory names. Entries
/// that do not fit the layout are not malformed, they are simply not models,
/// and are skipped. Lister failures (e.g. a missing `export` directory)
/// propagate untranslated.
pub fn find_model_paths<L: DirectoryLister + ?Sized>(
    lister: &L,
    export_path: &str,
) -> Result<Vec<String>> {
    let export_dir = format!("{}/{}", export_path, EXPORT_SEGMENT);
    let mut found = Vec::new();

    for exporter_name in lister.list_children(&export_dir)? {
        let exporter_dir = format!("{}/{}", export_dir, exporter_name);
        if !lister.is_directory(&exporter_dir) {
            tracing::debug!("Skipping non-directory entry: {}", exporter_dir);
            continue;
        }

        for child in lister.list_children(&exporter_dir)? {
            if !is_timestamp_segment(&child) {
                tracing::debug!("Skipping non-timestamp entry: {}/{}", exporter_dir, child);
                continue;
            }
            let model_path = format!("{}/{}", exporter_dir, child);
            if lister.is_directory(&model_path) {
                found.push(model_path);
            }
        }
    }

    Ok(found)
}

/// Find the single model path under an export path.
///
/// Returns `NoModelFound` when nothing matches. More than one match means
/// the caller's uniqueness assumption was false; that is reported as
/// `MultipleModelsFound` carrying every match, never resolved by picking
/// one.
pub fn find_only_model_path<L: DirectoryLister + ?Sized>(
    lister: &L,
    export_path: &str,
) -> Result<String> {
    let mut found = find_model_paths(lister, export_path)?;
    match found.len() {
        0 => Err(Error::NoModelFound(export_path.to_string())),
        1 => Ok(found.remove(0)),
        _ => Err(Error::MultipleModelsFound {
            base: export_path.to_string(),
            found,
        }),
    }
}

/// Parse a path as an exporter-flavored model path.
///
/// Matches `{export_path}/export/{exporter_name}/{digits}` from the right,
/// so an export path that itself contains an `/export/<x>/<digits>`
/// substring keeps the longest possible base: the last matching suffix wins.
pub fn parse_model_path(path: &str) -> Result<ExporterModelPath> {
    split_model_path(path).ok_or_else(|| Error::InvalidModelPath {
        layout: LAYOUT,
        path: path.to_string(),
    })
}

fn split_model_path(path: &str) -> Option<ExporterModelPath> {
    let (rest, timestamp_segment) = path.rsplit_once('/')?;
    let timestamp = parse_timestamp_segment(timestamp_segment)?;

    let (rest, exporter_name) = rest.rsplit_once('/')?;
    if exporter_name.is_empty() {
        return None;
    }

    let (export_path, export_segment) = rest.rsplit_once('/')?;
    if export_segment != EXPORT_SEGMENT {
        return None;
    }

    Some(ExporterModelPath {
        export_path: export_path.to_string(),
        exporter_name: exporter_name.to_string(),
        timestamp,
    })
}
