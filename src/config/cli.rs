use crate::core::{CorpusTree, TreeEntry};
use crate::utils::error::{HarnessError, Result};
use std::fs;
use std::path::Path;

/// The corpus on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTree;

impl LocalTree {
    pub fn new() -> Self {
        Self
    }
}

impl CorpusTree for LocalTree {
    fn list_dir(&self, path: &Path) -> Result<Vec<TreeEntry>> {
        let listing = |source| HarnessError::Listing {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(listing)? {
            let entry = entry.map_err(listing)?;
            let is_dir = entry.file_type().map_err(listing)?.is_dir();
            entries.push(TreeEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_dir_marks_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("refactored")).unwrap();
        fs::write(temp_dir.path().join("1.tests.rs"), "").unwrap();

        let mut entries = LocalTree.list_dir(temp_dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![TreeEntry::file("1.tests.rs"), TreeEntry::dir("refactored")]
        );
    }

    #[test]
    fn test_missing_dir_is_listing_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = LocalTree.list_dir(&temp_dir.path().join("missing"));
        assert!(matches!(result, Err(HarnessError::Listing { .. })));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports/results.json");

        LocalTree.write_file(&path, "{}").unwrap();

        assert_eq!(LocalTree.read_file(&path).unwrap(), "{}");
    }
}
