//! Board, Column and Item entities
//!
//! The board is persisted as a bare JSON array of columns.

use serde::{Deserialize, Serialize};

use super::entity::{position_of, Entity};
use super::ids::{ColumnId, ItemId};

/// A single user-entered text entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub content: String,
}

impl Item {
    pub fn new(id: ItemId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A fixed-identity bucket of ordered items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Column {
    pub fn empty(id: ColumnId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }
}

impl Entity for Column {
    type Id = ColumnId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Entire persisted state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn column_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == id)
    }

    /// Column index and item index of the first item with `id`
    pub fn locate(&self, id: ItemId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, column)| position_of(&column.items, id).map(|ii| (ci, ii)))
    }

    pub fn contains_item(&self, id: ItemId) -> bool {
        self.locate(id).is_some()
    }

    pub fn item_count(&self) -> usize {
        self.columns.iter().map(|column| column.items.len()).sum()
    }
}

/// Partial update applied by `ListApi::update_item`
///
/// A move only happens when both `column_id` and `position` are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub content: Option<String>,
    pub column_id: Option<ColumnId>,
    pub position: Option<usize>,
}

impl ItemPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn move_to(column_id: ColumnId, position: usize) -> Self {
        Self {
            column_id: Some(column_id),
            position: Some(position),
            ..Default::default()
        }
    }

    /// Target column and index, if this patch describes a move
    pub fn destination(&self) -> Option<(ColumnId, usize)> {
        self.column_id.zip(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::new(vec![
            Column {
                id: ColumnId::new(1),
                items: vec![Item::new(ItemId::new(10), "a"), Item::new(ItemId::new(11), "b")],
            },
            Column {
                id: ColumnId::new(2),
                items: vec![Item::new(ItemId::new(20), "c")],
            },
        ])
    }

    #[test]
    fn test_locate_item() {
        let board = sample();
        assert_eq!(board.locate(ItemId::new(11)), Some((0, 1)));
        assert_eq!(board.locate(ItemId::new(20)), Some((1, 0)));
        assert_eq!(board.locate(ItemId::new(99)), None);
        assert_eq!(board.item_count(), 3);
    }

    #[test]
    fn test_wire_shape() {
        let board = sample();
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["items"][1]["content"], "b");
        assert_eq!(json[1]["items"][0]["id"], 20);
    }

    #[test]
    fn test_string_ids_are_normalized() {
        let board: Board =
            serde_json::from_str(r#"[{"id":"1","items":[{"id":"5","content":"x"}]}]"#).unwrap();
        assert_eq!(board.locate(ItemId::new(5)), Some((0, 0)));
        assert!(board.column(ColumnId::new(1)).is_some());
    }

    #[test]
    fn test_patch_destination_needs_both_fields() {
        let only_column = ItemPatch {
            column_id: Some(ColumnId::new(2)),
            ..Default::default()
        };
        assert_eq!(only_column.destination(), None);
        assert_eq!(
            ItemPatch::move_to(ColumnId::new(2), 0).destination(),
            Some((ColumnId::new(2), 0))
        );
    }
}
