//! Before/after comparison of two stores.
//!
//! Deltas describe which items and blocks a committed move created, removed or
//! relocated, so callers can refresh only what changed.

use std::collections::HashMap;
use std::hash::Hash;

use super::{BlockId, InventoryStore, ItemDefId, ItemId};

/// Generic collection delta capturing additions, removals, and updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionDelta<Id, T> {
    pub added: Vec<T>,
    pub removed: Vec<Id>,
    /// New value of entries present on both sides but changed.
    pub updated: Vec<T>,
}

impl<Id, T> CollectionDelta<Id, T> {
    fn new() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            updated: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

impl<Id, T> Default for CollectionDelta<Id, T> {
    fn default() -> Self {
        Self::new()
    }
}

fn diff_collection<Id, T, FId>(before: &[T], after: &[T], id_fn: FId) -> CollectionDelta<Id, T>
where
    Id: Eq + Hash + Copy + Ord,
    T: Clone + PartialEq,
    FId: Fn(&T) -> Id,
{
    let mut before_map: HashMap<Id, &T> =
        before.iter().map(|entry| (id_fn(entry), entry)).collect();
    let mut delta = CollectionDelta::new();

    for entry in after {
        match before_map.remove(&id_fn(entry)) {
            Some(prev) if prev != entry => delta.updated.push(entry.clone()),
            Some(_) => {}
            None => delta.added.push(entry.clone()),
        }
    }

    delta.removed.extend(before_map.into_keys());
    delta.removed.sort_unstable();
    delta
}

/// Where an item sits after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemPlacement {
    pub id: ItemId,
    pub block: BlockId,
    pub slot: usize,
    pub rotated: bool,
    pub amount: u16,
}

/// Where a block sits after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockPlacement {
    pub id: BlockId,
    pub inventory: usize,
    pub definition: ItemDefId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateDelta {
    pub items: CollectionDelta<ItemId, ItemPlacement>,
    pub blocks: CollectionDelta<BlockId, BlockPlacement>,
}

impl StateDelta {
    /// Creates a delta by comparing two stores.
    ///
    /// Blocks are compared by inventory membership only; a block changing
    /// position inside the same inventory is not an update.
    pub fn from_states(before: &InventoryStore, after: &InventoryStore) -> Self {
        let (before_items, before_blocks) = flatten(before);
        let (after_items, after_blocks) = flatten(after);

        Self {
            items: diff_collection(&before_items, &after_items, |item| item.id),
            blocks: diff_collection(&before_blocks, &after_blocks, |block| block.id),
        }
    }

    /// Returns true if no state changes occurred.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.blocks.is_empty()
    }
}

fn flatten(store: &InventoryStore) -> (Vec<ItemPlacement>, Vec<BlockPlacement>) {
    let mut items = Vec::new();
    let mut blocks = Vec::new();

    for (inventory, inv) in store.inventories().iter().enumerate() {
        for block in &inv.blocks {
            blocks.push(BlockPlacement {
                id: block.id,
                inventory,
                definition: block.definition,
            });
            items.extend(block.items.iter().map(|item| ItemPlacement {
                id: item.id,
                block: block.id,
                slot: item.slot,
                rotated: item.rotated,
                amount: item.amount,
            }));
        }
    }

    (items, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn identical_states_yield_empty_delta() {
        let store = testing::store();
        assert!(StateDelta::from_states(&store, &store.clone()).is_empty());
    }

    #[test]
    fn tracks_added_removed_and_moved_items() {
        let before = testing::store();
        let mut after = before.clone();
        let mut magazine = after.take_item(BlockId(2), ItemId(1)).unwrap();
        magazine.slot = 2;
        after.push_item(BlockId(3), magazine).unwrap();
        after.take_item(BlockId(2), ItemId(2)).unwrap();

        let delta = StateDelta::from_states(&before, &after);
        assert_eq!(delta.items.removed, vec![ItemId(2)]);
        assert!(delta.items.added.is_empty());
        assert_eq!(delta.items.updated.len(), 1);
        assert_eq!(delta.items.updated[0].block, BlockId(3));
        assert_eq!(delta.items.updated[0].slot, 2);
        assert!(delta.blocks.is_empty());
    }
}
