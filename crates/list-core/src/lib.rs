//! List Board Core
//!
//! Layered architecture:
//! - domain: board entities, ids and errors
//! - repository: blob storage and whole-board persistence
//! - list_api: item CRUD over the persisted board
//! - reorder: drag-and-drop gestures mapped to item moves

pub mod config;
pub mod domain;
pub mod id_gen;
pub mod list_api;
pub mod reorder;
pub mod repository;

pub use config::{BoardConfig, ColumnDef, DEFAULT_STORAGE_KEY};
pub use domain::{Board, Column, ColumnId, DomainError, DomainResult, Entity, Item, ItemId, ItemPatch};
#[cfg(not(target_arch = "wasm32"))]
pub use id_gen::RandomIds;
pub use id_gen::{IdGenerator, SequentialIds, ID_SPACE};
pub use list_api::ListApi;
pub use reorder::{DropOutcome, DropZone, IgnoreReason, ReorderSession};
pub use repository::{BlobStore, BoardRepository, FileBlobStore, MemoryBlobStore};
