//! Browser Storage
//!
//! localStorage-backed blob store and the `ListApi` the page works through.

use list_core::{
    BlobStore, BoardConfig, BoardRepository, DomainError, DomainResult, IdGenerator, ItemId,
    ListApi, ID_SPACE,
};

/// `window.localStorage`, looked up on every call
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBlobStore;

impl LocalStorageBlobStore {
    fn storage(&self) -> DomainResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| DomainError::Storage(format!("localStorage denied: {:?}", e)))?
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
    }
}

impl BlobStore for LocalStorageBlobStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| DomainError::Storage(format!("getItem({}): {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| DomainError::Storage(format!("setItem({}): {:?}", key, e)))
    }
}

/// Random ids from `Math.random`
#[derive(Debug, Default, Clone, Copy)]
pub struct JsRandomIds;

impl IdGenerator for JsRandomIds {
    fn next_id(&mut self) -> ItemId {
        ItemId::new((js_sys::Math::random() * ID_SPACE as f64).floor() as u32)
    }
}

pub type BoardApi = ListApi<LocalStorageBlobStore, JsRandomIds>;

pub fn board_api(config: BoardConfig) -> BoardApi {
    ListApi::new(
        BoardRepository::with_config(LocalStorageBlobStore, config),
        JsRandomIds,
    )
}
