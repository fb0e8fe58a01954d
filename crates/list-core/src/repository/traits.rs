//! Repository Layer - Core Traits
//!
//! Defines the storage primitive the board repository is built on.
//! Implementations can use memory, files, browser localStorage, etc.

use crate::domain::DomainResult;

/// Key-value blob storage
///
/// Values are whole serialized documents; there are no partial writes.
pub trait BlobStore {
    /// Fetch the blob stored under `key`, `None` if nothing was stored
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `value` under `key`, replacing any prior value
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }
}
