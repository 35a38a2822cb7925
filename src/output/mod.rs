//! Output module for console output and result rendering.
//!
//! Provides:
//! - Colored console output
//! - Discovery listing and JSON rendering

pub mod console;
pub mod report;

pub use console::{print_banner, print_error, print_info, print_scan_summary, print_success, print_warning};
pub use report::{format_utc, print_json, print_listing, print_listing_json, ModelEntry};
