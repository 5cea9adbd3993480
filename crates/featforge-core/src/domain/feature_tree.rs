use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Planned output of one generation step, ready for materialization.
///
/// Strategies build a `FeatureTree` in memory; the materializer walks it and
/// create-once writes every entry. The tree contains no business logic, only
/// data, which also makes `--dry-run` trivial (print the plan, skip the
/// write).
#[derive(Debug, Clone, Default)]
pub struct FeatureTree {
    pub(crate) entries: Vec<TreeEntry>,
}

impl FeatureTree {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(TreeEntry::Directory(DirToEnsure {
            path: path.into(),
        }));
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(TreeEntry::File(FileToEnsure {
            path: path.into(),
            content,
        }));
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_dir(path);
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    /// Append all entries of another tree, preserving order.
    pub fn extend(&mut self, other: FeatureTree) {
        self.entries.extend(other.entries);
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidConfig(
                "feature tree is empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            if path.is_absolute() {
                return Err(DomainError::InvalidConfig(format!(
                    "absolute path in feature tree: {}",
                    path.display()
                )));
            }

            // Directories may legitimately repeat (nested strategies ensure
            // the same parents); duplicate *files* are a plan bug.
            if let TreeEntry::File(f) = entry {
                let key = f.path.display().to_string();
                if !seen.insert(key.clone()) {
                    return Err(DomainError::InvalidConfig(format!(
                        "duplicate file in feature tree: {key}"
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToEnsure> {
        self.entries.iter().filter_map(|e| match e {
            TreeEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirToEnsure> {
        self.entries.iter().filter_map(|e| match e {
            TreeEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum TreeEntry {
    File(FileToEnsure),
    Directory(DirToEnsure),
}

impl TreeEntry {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

/// A file to create-once: written only when absent, never overwritten.
#[derive(Debug, Clone)]
pub struct FileToEnsure {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct DirToEnsure {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_builds_in_order() {
        let tree = FeatureTree::new()
            .with_dir("domain/model")
            .with_file("domain/model/Cart.kt", "class Cart".into());

        assert_eq!(tree.entry_count(), 2);
        assert_eq!(tree.files().count(), 1);
        assert_eq!(tree.directories().count(), 1);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn duplicate_files_fail_validation() {
        let tree = FeatureTree::new()
            .with_file("a.kt", "one".into())
            .with_file("a.kt", "two".into());
        assert!(tree.validate().is_err());
    }

    #[test]
    fn duplicate_directories_are_allowed() {
        let tree = FeatureTree::new()
            .with_dir("core/di")
            .with_dir("core/di")
            .with_file("core/di/NetworkModule.kt", "x".into());
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn absolute_paths_fail_validation() {
        let tree = FeatureTree::new().with_file("/etc/passwd", "nope".into());
        assert!(tree.validate().is_err());
    }

    #[test]
    fn empty_tree_fails_validation() {
        assert!(FeatureTree::new().validate().is_err());
    }
}
