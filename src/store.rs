//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds the last board read from storage; storage stays the source of truth.

use leptos::prelude::*;
use list_core::{Column, ColumnId, Item};
use reactive_stores::Store;

/// Rendered board state
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Columns in display order
    pub columns: Vec<Column>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace all columns after a reload
pub fn store_set_columns(store: &BoardStore, columns: Vec<Column>) {
    store.columns().set(columns);
}

/// Items of one column (tracked)
pub fn store_column_items(store: &BoardStore, column_id: ColumnId) -> Vec<Item> {
    store
        .columns()
        .read()
        .iter()
        .find(|column| column.id == column_id)
        .map(|column| column.items.clone())
        .unwrap_or_default()
}
