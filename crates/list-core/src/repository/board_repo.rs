//! Board Repository
//!
//! Reads and writes the whole board as one JSON blob.

use super::traits::BlobStore;
use crate::config::BoardConfig;
use crate::domain::{Board, DomainError, DomainResult};

/// Whole-board persistence over a blob store
pub struct BoardRepository<B> {
    blobs: B,
    config: BoardConfig,
}

impl<B: BlobStore> BoardRepository<B> {
    pub fn new(blobs: B) -> Self {
        Self::with_config(blobs, BoardConfig::default())
    }

    pub fn with_config(blobs: B, config: BoardConfig) -> Self {
        Self { blobs, config }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Persisted board, or the default empty columns if nothing is stored
    pub fn read(&self) -> DomainResult<Board> {
        match self.blobs.get(&self.config.storage_key)? {
            Some(json) if !json.is_empty() => serde_json::from_str(&json).map_err(|e| {
                log::warn!("board blob {:?} is malformed: {}", self.config.storage_key, e);
                DomainError::Corrupt(e.to_string())
            }),
            _ => Ok(self.config.default_board()),
        }
    }

    /// Replace the persisted board
    pub fn save(&self, board: &Board) -> DomainResult<()> {
        let json = serde_json::to_string(board)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        self.blobs.set(&self.config.storage_key, &json)
    }
}
