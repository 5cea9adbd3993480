//! File tree materialization with create-once semantics.
//!
//! The materializer is the only component that turns a planned
//! [`FeatureTree`] into filesystem effects. Its one hard rule: **an existing
//! file is never overwritten**, even when the planned content differs:
//! regenerating a feature must never clobber a developer's hand edits to
//! previously generated files.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{FeatureTree, TreeEntry},
    error::ForgeResult,
};

/// Idempotent directory/file materializer over a [`Filesystem`] port.
pub struct FileTreeMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileTreeMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Ensure a file exists with the given content.
    ///
    /// Returns `true` when the file was created, `false` when it already
    /// existed (in which case its content is left untouched; calling twice
    /// with different content the second time yields the first content,
    /// unchanged).
    pub fn ensure_file(&self, path: &Path, content: &str) -> ForgeResult<bool> {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "file exists, leaving untouched");
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        self.filesystem.write_file(path, content)?;
        Ok(true)
    }

    /// Ensure a directory (and its parents) exists. Never fails on existing.
    pub fn ensure_dir(&self, path: &Path) -> ForgeResult<()> {
        self.filesystem.create_dir_all(path)
    }

    /// Materialize a whole tree under `root`, in plan order.
    ///
    /// Returns the number of newly created files.
    #[instrument(skip_all, fields(root = %root.display(), entries = tree.entry_count()))]
    pub fn write_tree(&self, root: &Path, tree: &FeatureTree) -> ForgeResult<usize> {
        let mut created = 0;

        for entry in tree.entries() {
            match entry {
                TreeEntry::Directory(dir) => {
                    self.ensure_dir(&root.join(&dir.path))?;
                }
                TreeEntry::File(file) => {
                    if self.ensure_file(&root.join(&file.path), &file.content)? {
                        created += 1;
                    }
                }
            }
        }

        Ok(created)
    }
}
