//! Reorder Protocol
//!
//! Turns drag-and-drop gestures into item moves. The session holds the
//! transient drag state explicitly instead of reading it back from the page.
//!
//! Every column has `items + 1` drop zones: zone 0 sits above the first item
//! and zone `k` sits inside item `k - 1`, right after its content.

use crate::domain::{ColumnId, DomainResult, ItemId, ItemPatch};
use crate::id_gen::IdGenerator;
use crate::list_api::ListApi;
use crate::repository::BlobStore;

/// An insertion point inside a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropZone {
    pub column_id: ColumnId,
    /// Position among the column's drop zones, 0-based
    pub index: usize,
    /// Item whose element contains the zone, `None` for the top zone
    pub owner: Option<ItemId>,
}

impl DropZone {
    pub fn top(column_id: ColumnId) -> Self {
        Self {
            column_id,
            index: 0,
            owner: None,
        }
    }

    /// Zone right after the item at `item_index`
    pub fn after(column_id: ColumnId, item_index: usize, owner: ItemId) -> Self {
        Self {
            column_id,
            index: item_index + 1,
            owner: Some(owner),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Drop arrived without a drag in progress
    NotDragging,
    /// Zone belongs to the dragged item itself
    InsideDraggedItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved {
        item_id: ItemId,
        column_id: ColumnId,
        position: usize,
    },
    Ignored(IgnoreReason),
}

/// Drag state: idle when `dragged` is `None`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderSession {
    dragged: Option<ItemId>,
    active_zone: Option<DropZone>,
}

impl ReorderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragged(&self) -> Option<ItemId> {
        self.dragged
    }

    pub fn active_zone(&self) -> Option<DropZone> {
        self.active_zone
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn drag_start(&mut self, item_id: ItemId) {
        log::debug!("drag start {}", item_id);
        self.dragged = Some(item_id);
        self.active_zone = None;
    }

    pub fn drag_over(&mut self, zone: DropZone) {
        if self.is_dragging() {
            self.active_zone = Some(zone);
        }
    }

    pub fn drag_leave(&mut self, zone: DropZone) {
        if self.active_zone == Some(zone) {
            self.active_zone = None;
        }
    }

    /// Abandon the gesture without touching the board
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Resolve a drop on `zone` and apply the move through `api`
    ///
    /// The session is idle afterwards whatever the outcome.
    pub fn drop<B: BlobStore, G: IdGenerator>(
        &mut self,
        zone: DropZone,
        api: &mut ListApi<B, G>,
    ) -> DomainResult<DropOutcome> {
        let dragged = self.dragged.take();
        self.active_zone = None;

        let Some(item_id) = dragged else {
            return Ok(DropOutcome::Ignored(IgnoreReason::NotDragging));
        };
        if zone.owner == Some(item_id) {
            log::debug!("drop of {} onto its own zone ignored", item_id);
            return Ok(DropOutcome::Ignored(IgnoreReason::InsideDraggedItem));
        }

        let position = match api.locate(item_id)? {
            // Removing the item first shifts later zones up by one
            Some((column_id, current)) if column_id == zone.column_id && current < zone.index => {
                zone.index - 1
            }
            _ => zone.index,
        };

        api.update_item(item_id, ItemPatch::move_to(zone.column_id, position))?;
        Ok(DropOutcome::Moved {
            item_id,
            column_id: zone.column_id,
            position,
        })
    }
}
