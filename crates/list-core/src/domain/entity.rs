//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for board entities.
//! Columns and items are both addressed by id, never by reference.

use thiserror::Error;

use super::ids::{ColumnId, ItemId};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Index of the first entity in `entities` whose id equals `id`
pub fn position_of<T: Entity>(entities: &[T], id: T::Id) -> Option<usize> {
    entities.iter().position(|entity| entity.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Column {0} does not exist")]
    ColumnNotFound(ColumnId),
    #[error("Item {0} not found")]
    ItemNotFound(ItemId),
    #[error("Target column {0} not found")]
    TargetColumnNotFound(ColumnId),
    #[error("Corrupt board data: {0}")]
    Corrupt(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No free item id after {0} attempts")]
    IdSpaceExhausted(u32),
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Named(u32);

    impl Entity for Named {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_position_of_returns_first_match() {
        let entities = vec![Named(4), Named(9), Named(9)];
        assert_eq!(position_of(&entities, 9), Some(1));
        assert_eq!(position_of(&entities, 5), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DomainError::ColumnNotFound(ColumnId::new(7)).to_string(),
            "Column 7 does not exist"
        );
        assert_eq!(
            DomainError::ItemNotFound(ItemId::new(12)).to_string(),
            "Item 12 not found"
        );
    }
}
