//! Item id generation
//!
//! Generators only propose candidates; `ListApi` rejects ids already on the board.

use crate::domain::ItemId;

/// Ids are drawn from `0..ID_SPACE`
pub const ID_SPACE: u32 = 100_000;

/// Source of candidate item ids
pub trait IdGenerator {
    fn next_id(&mut self) -> ItemId;
}

impl<F: FnMut() -> ItemId> IdGenerator for F {
    fn next_id(&mut self) -> ItemId {
        self()
    }
}

/// Uniformly random ids in `0..ID_SPACE`
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

#[cfg(not(target_arch = "wasm32"))]
impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> ItemId {
        use rand::Rng;
        ItemId::new(rand::rng().random_range(0..ID_SPACE))
    }
}

/// Deterministic ids counting up from a start value, wrapping inside the id space
#[derive(Debug, Clone, Copy)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    pub fn starting_at(start: u32) -> Self {
        Self {
            next: start % ID_SPACE,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = self.next;
        self.next = (self.next + 1) % ID_SPACE;
        ItemId::new(id)
    }
}
