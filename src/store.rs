//! Reads and writes files beneath the configured files directory.
//!
//! Filenames are joined onto the root as given. No traversal checks are made;
//! [`FileStore::resolve`] is the only place a path is built, so validation
//! belongs there if it is ever needed.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Reads the whole file. A missing file is [`StoreError::NotFound`].
    pub fn read(&self, filename: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(filename);
        std::fs::read(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path),
            _ => StoreError::Io { path, source },
        })
    }

    /// Creates or truncates the file and writes all of `bytes`.
    pub fn write(&self, filename: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(filename);
        std::fs::write(&path, bytes).map_err(|source| StoreError::Io { path, source })
    }
}
