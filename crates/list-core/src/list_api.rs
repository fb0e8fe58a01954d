//! List API
//!
//! CRUD over the board's columns and items. Every call reads the whole board,
//! mutates it in memory and writes it back.

use crate::domain::{
    position_of, ColumnId, DomainError, DomainResult, Item, ItemId, ItemPatch,
};
use crate::id_gen::IdGenerator;
use crate::repository::{BlobStore, BoardRepository};

/// Candidate ids tried before an insert gives up
pub const MAX_ID_ATTEMPTS: u32 = 64;

pub struct ListApi<B, G> {
    repo: BoardRepository<B>,
    ids: G,
}

impl<B: BlobStore, G: IdGenerator> ListApi<B, G> {
    pub fn new(repo: BoardRepository<B>, ids: G) -> Self {
        Self { repo, ids }
    }

    pub fn repository(&self) -> &BoardRepository<B> {
        &self.repo
    }

    /// Items of `column_id`, empty if the column does not exist
    pub fn get_items(&self, column_id: ColumnId) -> DomainResult<Vec<Item>> {
        let board = self.repo.read()?;
        Ok(board
            .column(column_id)
            .map(|column| column.items.clone())
            .unwrap_or_default())
    }

    /// Append a new item to the end of `column_id`
    pub fn insert_item(&mut self, column_id: ColumnId, content: &str) -> DomainResult<Item> {
        let mut board = self.repo.read()?;
        if board.column(column_id).is_none() {
            log::warn!("insert into missing column {}", column_id);
            return Err(DomainError::ColumnNotFound(column_id));
        }

        let mut attempts = 0;
        let id = loop {
            if attempts == MAX_ID_ATTEMPTS {
                return Err(DomainError::IdSpaceExhausted(MAX_ID_ATTEMPTS));
            }
            attempts += 1;
            let candidate = self.ids.next_id();
            if !board.contains_item(candidate) {
                break candidate;
            }
            log::debug!("item id {} already taken, drawing again", candidate);
        };

        let item = Item::new(id, content);
        if let Some(column) = board.column_mut(column_id) {
            column.items.push(item.clone());
        }
        self.repo.save(&board)?;
        log::debug!("inserted item {} into column {}", item.id, column_id);
        Ok(item)
    }

    /// Apply `patch` to the item with `item_id`
    ///
    /// Content is replaced when set. The item moves only when both a column and
    /// a position are given; a position past the end appends.
    pub fn update_item(&mut self, item_id: ItemId, patch: ItemPatch) -> DomainResult<()> {
        let mut board = self.repo.read()?;
        let (ci, ii) = board.locate(item_id).ok_or_else(|| {
            log::warn!("update of missing item {}", item_id);
            DomainError::ItemNotFound(item_id)
        })?;

        if let Some(content) = patch.content.as_ref() {
            board.columns[ci].items[ii].content = content.clone();
        }

        if let Some((target_id, position)) = patch.destination() {
            let target = position_of(&board.columns, target_id).ok_or_else(|| {
                log::warn!("move of item {} to missing column {}", item_id, target_id);
                DomainError::TargetColumnNotFound(target_id)
            })?;

            let item = board.columns[ci].items.remove(ii);
            let items = &mut board.columns[target].items;
            let position = position.min(items.len());
            items.insert(position, item);
            log::debug!(
                "moved item {} to column {} at {}",
                item_id,
                target_id,
                position
            );
        }

        self.repo.save(&board)
    }

    /// Remove the first item with `item_id`; missing items are ignored
    pub fn delete_item(&mut self, item_id: ItemId) -> DomainResult<()> {
        let mut board = self.repo.read()?;
        match board.locate(item_id) {
            Some((ci, ii)) => {
                board.columns[ci].items.remove(ii);
                log::debug!("deleted item {}", item_id);
            }
            None => log::debug!("delete of missing item {} ignored", item_id),
        }
        self.repo.save(&board)
    }

    /// Column and index currently holding `item_id`
    pub fn locate(&self, item_id: ItemId) -> DomainResult<Option<(ColumnId, usize)>> {
        let board = self.repo.read()?;
        Ok(board
            .locate(item_id)
            .map(|(ci, ii)| (board.columns[ci].id, ii)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Board;
    use crate::id_gen::SequentialIds;
    use crate::repository::MemoryBlobStore;

    fn api() -> ListApi<MemoryBlobStore, SequentialIds> {
        ListApi::new(
            BoardRepository::new(MemoryBlobStore::new()),
            SequentialIds::default(),
        )
    }

    fn col(id: u32) -> ColumnId {
        ColumnId::new(id)
    }

    fn contents(api: &ListApi<MemoryBlobStore, SequentialIds>, column: u32) -> Vec<String> {
        api.get_items(col(column))
            .unwrap()
            .into_iter()
            .map(|item| item.content)
            .collect()
    }

    fn stored(api: &ListApi<MemoryBlobStore, SequentialIds>) -> Option<String> {
        api.repository().blobs().raw("listData")
    }

    #[test]
    fn test_get_items_missing_column_is_empty() {
        let api = api();
        assert!(api.get_items(col(1)).unwrap().is_empty());
        assert!(api.get_items(col(42)).unwrap().is_empty());
    }

    #[test]
    fn test_insert_appends_with_fresh_id() {
        let mut api = api();
        let first = api.insert_item(col(1), "one").unwrap();
        let second = api.insert_item(col(1), "two").unwrap();

        assert_ne!(first.id, second.id);
        let items = api.get_items(col(1)).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.last(), Some(&second));
    }

    #[test]
    fn test_insert_missing_column_leaves_state_unchanged() {
        let mut api = api();
        api.insert_item(col(2), "kept").unwrap();
        let before = stored(&api);

        let err = api.insert_item(col(9), "lost").unwrap_err();
        assert_eq!(err, DomainError::ColumnNotFound(col(9)));
        assert_eq!(stored(&api), before);
    }

    #[test]
    fn test_insert_skips_taken_ids() {
        let mut ids = vec![ItemId::new(3), ItemId::new(3), ItemId::new(8)].into_iter();
        let mut api = ListApi::new(
            BoardRepository::new(MemoryBlobStore::new()),
            move || ids.next().unwrap_or(ItemId::new(0)),
        );
        let a = api.insert_item(col(1), "a").unwrap();
        let b = api.insert_item(col(1), "b").unwrap();
        assert_eq!(a.id, ItemId::new(3));
        assert_eq!(b.id, ItemId::new(8));
    }

    #[test]
    fn test_insert_gives_up_when_ids_keep_colliding() {
        let mut api = ListApi::new(
            BoardRepository::new(MemoryBlobStore::new()),
            || ItemId::new(1),
        );
        api.insert_item(col(1), "only").unwrap();
        assert_eq!(
            api.insert_item(col(1), "again"),
            Err(DomainError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
        );
        assert_eq!(api.get_items(col(1)).unwrap().len(), 1);
    }

    #[test]
    fn test_update_content_only() {
        let mut api = api();
        api.insert_item(col(1), "a").unwrap();
        let target = api.insert_item(col(1), "b").unwrap();
        api.insert_item(col(1), "c").unwrap();

        api.update_item(target.id, ItemPatch::content("x")).unwrap();
        assert_eq!(contents(&api, 1), vec!["a", "x", "c"]);
        assert_eq!(api.locate(target.id).unwrap(), Some((col(1), 1)));
    }

    #[test]
    fn test_update_moves_across_columns() {
        let mut api = api();
        let moved = api.insert_item(col(1), "a").unwrap();
        api.insert_item(col(1), "b").unwrap();
        api.insert_item(col(2), "c").unwrap();

        api.update_item(moved.id, ItemPatch::move_to(col(2), 0)).unwrap();
        assert_eq!(contents(&api, 1), vec!["b"]);
        assert_eq!(contents(&api, 2), vec!["a", "c"]);

        let board = api.repository().read().unwrap();
        assert_eq!(board.item_count(), 3);
    }

    #[test]
    fn test_update_position_past_end_appends() {
        let mut api = api();
        let moved = api.insert_item(col(1), "a").unwrap();
        api.insert_item(col(3), "b").unwrap();

        api.update_item(moved.id, ItemPatch::move_to(col(3), 50)).unwrap();
        assert_eq!(contents(&api, 3), vec!["b", "a"]);
    }

    #[test]
    fn test_update_content_and_move_together() {
        let mut api = api();
        let item = api.insert_item(col(1), "draft").unwrap();
        let patch = ItemPatch {
            content: Some("final".to_string()),
            column_id: Some(col(3)),
            position: Some(0),
        };
        api.update_item(item.id, patch).unwrap();
        assert_eq!(contents(&api, 3), vec!["final"]);
        assert!(contents(&api, 1).is_empty());
    }

    #[test]
    fn test_update_without_position_does_not_move() {
        let mut api = api();
        let item = api.insert_item(col(1), "a").unwrap();

        let column_only = ItemPatch {
            column_id: Some(col(2)),
            ..Default::default()
        };
        api.update_item(item.id, column_only).unwrap();
        assert_eq!(contents(&api, 1), vec!["a"]);

        let position_only = ItemPatch {
            content: Some("b".to_string()),
            position: Some(0),
            ..Default::default()
        };
        api.update_item(item.id, position_only).unwrap();
        assert_eq!(contents(&api, 1), vec!["b"]);
        assert!(contents(&api, 2).is_empty());
    }

    #[test]
    fn test_update_missing_item() {
        let mut api = api();
        assert_eq!(
            api.update_item(ItemId::new(5), ItemPatch::content("x")),
            Err(DomainError::ItemNotFound(ItemId::new(5)))
        );
    }

    #[test]
    fn test_update_missing_target_column() {
        let mut api = api();
        let item = api.insert_item(col(1), "a").unwrap();
        let before = stored(&api);
        assert_eq!(
            api.update_item(item.id, ItemPatch::move_to(col(7), 0)),
            Err(DomainError::TargetColumnNotFound(col(7)))
        );
        assert_eq!(stored(&api), before);
    }

    #[test]
    fn test_update_without_changes_still_persists() {
        let mut api = api();
        let item = api.insert_item(col(1), "a").unwrap();
        api.repository().blobs().set("listData", "[{\"id\":1,\"items\":[{\"id\":\"1\",\"content\":\"a\"}]}]").unwrap();

        api.update_item(item.id, ItemPatch::default()).unwrap();
        let raw = stored(&api).unwrap();
        assert!(raw.contains("\"id\":1,\"content\""));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut api = api();
        let gone = api.insert_item(col(1), "a").unwrap();
        api.insert_item(col(1), "b").unwrap();

        api.delete_item(gone.id).unwrap();
        assert_eq!(contents(&api, 1), vec!["b"]);

        api.delete_item(gone.id).unwrap();
        assert_eq!(contents(&api, 1), vec!["b"]);
    }

    #[test]
    fn test_delete_missing_item_persists_default_board() {
        let mut api = api();
        assert_eq!(stored(&api), None);
        api.delete_item(ItemId::new(1)).unwrap();
        let board: Board = serde_json::from_str(&stored(&api).unwrap()).unwrap();
        assert_eq!(board.columns.len(), 3);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut api = api();
        let item = api.insert_item(col(1), "Buy milk").unwrap();
        assert_eq!(item.content, "Buy milk");
        assert_eq!(api.get_items(col(1)).unwrap(), vec![item.clone()]);

        api.update_item(item.id, ItemPatch::move_to(col(2), 0)).unwrap();
        assert!(api.get_items(col(1)).unwrap().is_empty());
        assert_eq!(api.get_items(col(2)).unwrap(), vec![item]);
    }
}
