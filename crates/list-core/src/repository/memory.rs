//! In-memory blob store
//!
//! Test double for the browser storage primitive.

use std::cell::RefCell;
use std::collections::HashMap;

use super::traits::BlobStore;
use crate::domain::DomainResult;

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-existing raw text under `key`
    pub fn with_blob(key: &str, raw: &str) -> Self {
        let store = Self::new();
        store.blobs.borrow_mut().insert(key.to_string(), raw.to_string());
        store
    }

    /// Raw text currently stored under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.blobs.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
