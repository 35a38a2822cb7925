//! Local filesystem lister backed by `std::fs`.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::storage::DirectoryLister;

/// Directory lister over the local filesystem.
///
/// Model paths are handed to `std::fs` as-is; no normalization is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalLister;

impl LocalLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalLister {
    fn list_children(&self, path: &str) -> Result<Vec<String>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            children.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(children)
    }

    fn is_directory(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }
}
