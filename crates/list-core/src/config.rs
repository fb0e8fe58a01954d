//! Board configuration
//!
//! Storage key and the static column list. Column titles are never persisted.

use serde::{Deserialize, Serialize};

use crate::domain::{Board, Column, ColumnId, DomainError, DomainResult};

/// Key of the board blob in localStorage
pub const DEFAULT_STORAGE_KEY: &str = "listData";

/// A column as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub id: ColumnId,
    pub title: String,
}

impl ColumnDef {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(id),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Key of the single blob holding the board
    pub storage_key: String,
    /// Fixed columns, in display order
    pub columns: Vec<ColumnDef>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            columns: vec![
                ColumnDef::new(1, "Not Started"),
                ColumnDef::new(2, "In Progress"),
                ColumnDef::new(3, "Completed"),
            ],
        }
    }
}

impl BoardConfig {
    /// Parse a JSON config document; missing fields take their defaults
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidInput(format!("board config: {}", e)))?;
        if config.storage_key.trim().is_empty() {
            return Err(DomainError::InvalidInput("board config: empty storage_key".to_string()));
        }
        Ok(config)
    }

    /// Board used when nothing has been persisted yet
    pub fn default_board(&self) -> Board {
        Board::new(self.columns.iter().map(|def| Column::empty(def.id)).collect())
    }

    pub fn title_of(&self, id: ColumnId) -> Option<&str> {
        self.columns
            .iter()
            .find(|def| def.id == id)
            .map(|def| def.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        let config = BoardConfig::default();
        let board = config.default_board();
        let ids: Vec<u32> = board.columns.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(board.columns.iter().all(|c| c.items.is_empty()));
        assert_eq!(config.title_of(ColumnId::new(2)), Some("In Progress"));
        assert_eq!(config.storage_key, "listData");
    }

    #[test]
    fn test_from_json_partial() {
        let config = BoardConfig::from_json(r#"{"storage_key":"board"}"#).unwrap();
        assert_eq!(config.storage_key, "board");
        assert_eq!(config.columns.len(), 3);
    }

    #[test]
    fn test_from_json_rejects_unknown_and_empty() {
        assert!(BoardConfig::from_json(r#"{"colour":"red"}"#).is_err());
        assert!(matches!(
            BoardConfig::from_json(r#"{"storage_key":"  "}"#),
            Err(DomainError::InvalidInput(_))
        ));
    }
}
