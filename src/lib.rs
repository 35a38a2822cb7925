//! Model Scout - discovery and naming of exported model directories.
//!
//! This library builds, discovers, and parses the directory paths that
//! training pipelines use for exported models.
//!
//! # Features
//!
//! - Exporter-flavored layout: `{base}/export/{name}/{timestamp}`
//! - Flat layout: `{base}/{timestamp}`
//! - Deterministic path construction and its exact inverse parser
//! - Directory scanning through a pluggable `DirectoryLister`
//! - Unique-model resolution with distinct not-found and multiple-found
//!   errors
//!
//! # Example
//!
//! ```
//! use model_scout::paths::exporter;
//! use model_scout::storage::MemoryLister;
//!
//! let lister = MemoryLister::new()
//!     .dir("/srv/models/run1/export")
//!     .dir("/srv/models/run1/export/wide_and_deep")
//!     .dir("/srv/models/run1/export/wide_and_deep/1582798459");
//!
//! let found = exporter::find_model_paths(&lister, "/srv/models/run1").unwrap();
//! assert_eq!(found, vec!["/srv/models/run1/export/wide_and_deep/1582798459".to_string()]);
//!
//! let parsed = exporter::parse_model_path(&found[0]).unwrap();
//! assert_eq!(parsed.exporter_name, "wide_and_deep");
//! assert_eq!(parsed.timestamp, 1582798459);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod storage;

// Re-exports for convenience
pub use config::{Config, Flavor};
pub use error::{Error, Result};
pub use paths::{ExporterModelPath, FlatModelPath};
pub use storage::{DirectoryLister, LocalLister, MemoryLister};
