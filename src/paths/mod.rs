//! Model path layout conventions.
//!
//! Provides:
//! - Exporter-flavored layout: `{export_path}/export/{exporter_name}/{timestamp}`
//! - Flat layout: `{base_path}/{timestamp}`
//!
//! Paths are plain strings joined with `/`, so object-store locations
//! (`gs://bucket/...`) work the same as local paths. Building a path never
//! fails; parsing rejects anything that does not match the layout exactly.

pub mod exporter;
pub mod flat;

pub use exporter::ExporterModelPath;
pub use flat::FlatModelPath;

/// Whether a directory name is a well-formed timestamp segment: one or more
/// ASCII digits and nothing else.
pub(crate) fn is_timestamp_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a timestamp segment into unix seconds.
///
/// Digit runs that overflow `u64` do not denote a representable timestamp
/// and are rejected along with non-digit segments.
pub(crate) fn parse_timestamp_segment(segment: &str) -> Option<u64> {
    if !is_timestamp_segment(segment) {
        return None;
    }
    segment.parse().ok()
}
