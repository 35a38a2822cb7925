//! Rendering of discovery results.

use chrono::DateTime;
use serde::Serialize;

use crate::error::Result;

/// One discovered model path with the components recovered from it.
#[derive(Debug, Clone, Serialize)]
pub struct ModelEntry {
    pub path: String,
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter_name: Option<String>,
}

/// Render a unix-seconds timestamp as a UTC datetime string.
pub fn format_utc(timestamp: u64) -> String {
    DateTime::from_timestamp(timestamp as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "out of range".to_string())
}

/// Print entries as a human-readable listing.
pub fn print_listing(entries: &[ModelEntry], show_timestamps: bool) {
    for entry in entries {
        if show_timestamps {
            println!("  {}  ({})", entry.path, format_utc(entry.timestamp));
        } else {
            println!("  {}", entry.path);
        }
    }
}

/// Print entries as a JSON array.
pub fn print_listing_json(entries: &[ModelEntry]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(entries)?);
    Ok(())
}

/// Print any serializable value as JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_utc() {
        assert_eq!(format_utc(1582798459), "2020-02-27 10:14:19 UTC");
        assert_eq!(format_utc(0), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_model_entry_json_shape() {
        let entry = ModelEntry {
            path: "/eval/1582072718".to_string(),
            timestamp: 1582072718,
            exporter_name: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["path"], "/eval/1582072718");
        assert_eq!(json["timestamp"], 1582072718u64);
        // Absent for flat-flavored entries rather than null
        assert!(json.get("exporter_name").is_none());
    }
}
