//! In-memory directory tree.
//!
//! Used as the test double for discovery logic and usable by embedders that
//! already hold a listing in memory (a manifest, a cached bucket listing).

use std::collections::BTreeSet;
use std::io;

use crate::error::Result;
use crate::storage::DirectoryLister;

/// In-memory `DirectoryLister` over an explicit set of directory and leaf
/// paths.
///
/// Every directory must be registered explicitly, including intermediate
/// ones; nothing is inferred from child paths. Listing an unregistered
/// directory fails with a not-found IO error, matching what a real
/// filesystem lister reports.
#[derive(Debug, Clone, Default)]
pub struct MemoryLister {
    dirs: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl MemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory path.
    pub fn dir(mut self, path: &str) -> Self {
        self.dirs.insert(path.to_string());
        self
    }

    /// Register a leaf (non-directory) path.
    pub fn file(mut self, path: &str) -> Self {
        self.files.insert(path.to_string());
        self
    }
}

impl DirectoryLister for MemoryLister {
    fn list_children(&self, path: &str) -> Result<Vec<String>> {
        if !self.dirs.contains(path) {
            return Err(
                io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path)).into(),
            );
        }

        let prefix = format!("{}/", path);
        let children: BTreeSet<&str> = self
            .dirs
            .iter()
            .chain(self.files.iter())
            .filter_map(|entry| entry.strip_prefix(&prefix))
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
            .collect();

        Ok(children.into_iter().map(str::to_string).collect())
    }

    fn is_directory(&self, path: &str) -> bool {
        self.dirs.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_list_children_immediate_only() {
        let lister = MemoryLister::new()
            .dir("/base")
            .dir("/base/a")
            .dir("/base/a/nested")
            .file("/base/b.txt");

        let children = lister.list_children("/base").unwrap();
        assert_eq!(children, vec!["a", "b.txt"]);
    }

    #[test]
    fn test_list_children_unregistered_dir() {
        let lister = MemoryLister::new().dir("/base");
        assert!(matches!(
            lister.list_children("/base/missing"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_is_directory() {
        let lister = MemoryLister::new().dir("/base").file("/base/leaf");
        assert!(lister.is_directory("/base"));
        assert!(!lister.is_directory("/base/leaf"));
        assert!(!lister.is_directory("/elsewhere"));
    }

    #[test]
    fn test_sibling_prefix_is_not_a_child() {
        let lister = MemoryLister::new().dir("/base").dir("/basement/a");
        let children = lister.list_children("/base").unwrap();
        assert!(children.is_empty());
    }
}
