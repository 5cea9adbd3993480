//! Minimal in-memory [`Filesystem`] fake for core unit tests.
//!
//! The full-featured adapter lives in `featforge-adapters`; this one exists
//! so the core crate's own tests stay dependency-free.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crate::{application::ports::Filesystem, error::ForgeResult};

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeFilesystem {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl FakeFilesystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().files.get(path).cloned()
    }

    pub(crate) fn seed(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path.into(), content.into());
    }

    pub(crate) fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> ForgeResult<Option<String>> {
        Ok(self.read(path))
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}
