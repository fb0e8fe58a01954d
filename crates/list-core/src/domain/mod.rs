//! Domain Layer
//!
//! Contains the board entities and core abstractions.
//! This layer has no storage or UI dependencies.

mod board;
mod entity;
mod ids;

pub use board::{Board, Column, Item, ItemPatch};
pub use entity::{position_of, DomainError, DomainResult, Entity};
pub use ids::{ColumnId, ItemId};
