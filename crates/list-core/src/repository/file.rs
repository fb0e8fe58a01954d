//! File-backed blob store
//!
//! One `<key>.json` file per key inside a directory, for native hosts.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::BlobStore;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> DomainResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(DomainError::InvalidInput(format!("storage key {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!("read {}: {}", path.display(), e))),
        }
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)
            .map_err(|e| DomainError::Storage(format!("create {}: {}", self.dir.display(), e)))?;

        // Write to a sibling first so a failed write leaves the old board intact
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .map_err(|e| DomainError::Storage(format!("write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| DomainError::Storage(format!("rename {}: {}", path.display(), e)))?;
        log::debug!("saved {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
