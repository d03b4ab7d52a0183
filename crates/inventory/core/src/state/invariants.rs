//! Whole-store consistency checks.
//!
//! Run after a move is applied to the working copy and before it replaces the
//! authoritative store, and on stores built from external data.

use std::collections::HashSet;

use crate::env::{InventoryEnv, ItemKind, OracleError};
use crate::error::{EngineError, ErrorSeverity};
use crate::grid::{Footprint, Grid, PlacementError};
use crate::state::{BlockId, InventoryStore, ItemId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InvariantViolation {
    #[error("{item} in {block} leaves the grid: {reason}")]
    OutOfBounds {
        block: BlockId,
        item: ItemId,
        reason: PlacementError,
    },

    #[error("{item} overlaps {other} in {block}")]
    Overlap {
        block: BlockId,
        item: ItemId,
        other: ItemId,
    },

    #[error("duplicate {0}")]
    DuplicateItemId(ItemId),

    #[error("duplicate {0}")]
    DuplicateBlockId(BlockId),

    #[error("{item} holds {amount}, allowed 1..={limit}")]
    InvalidAmount { item: ItemId, amount: u16, limit: u16 },

    #[error("{block} of kind {kind} fits no equipment slot")]
    NoEquipmentSlot { block: BlockId, kind: ItemKind },

    #[error("equipment slot {slot} worn by both {first} and {second}")]
    SlotConflict {
        slot: usize,
        first: BlockId,
        second: BlockId,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl EngineError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        match self {
            InvariantViolation::Oracle(err) => err.severity(),
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            InvariantViolation::OutOfBounds { .. } => "INVARIANT_OUT_OF_BOUNDS",
            InvariantViolation::Overlap { .. } => "INVARIANT_OVERLAP",
            InvariantViolation::DuplicateItemId(_) => "INVARIANT_DUPLICATE_ITEM_ID",
            InvariantViolation::DuplicateBlockId(_) => "INVARIANT_DUPLICATE_BLOCK_ID",
            InvariantViolation::InvalidAmount { .. } => "INVARIANT_INVALID_AMOUNT",
            InvariantViolation::NoEquipmentSlot { .. } => "INVARIANT_NO_EQUIPMENT_SLOT",
            InvariantViolation::SlotConflict { .. } => "INVARIANT_SLOT_CONFLICT",
            InvariantViolation::Oracle(err) => err.error_code(),
        }
    }
}

/// Returns the first violated store invariant, if any.
///
/// 1. every footprint lies inside its block's grid
/// 2. no two items of a block overlap
/// 3. item and block ids are unique store-wide
/// 4. every amount is within `1..=limit`
/// 5. equipment inventories wear at most one block per slot, each matching
///    its slot's kind
pub fn check_invariants(
    store: &InventoryStore,
    env: &InventoryEnv<'_>,
) -> Result<(), InvariantViolation> {
    let items = env.items()?;
    let slots = env.slots()?;
    let mut item_ids = HashSet::new();
    let mut block_ids = HashSet::new();

    for inventory in store.inventories() {
        let mut worn: Vec<Option<BlockId>> = vec![None; slots.slots().len()];

        for block in &inventory.blocks {
            if !block_ids.insert(block.id) {
                return Err(InvariantViolation::DuplicateBlockId(block.id));
            }

            let container = items.lookup(block.definition)?;
            if inventory.kind.has_equipment() {
                let slot = slots.slot_for(container.kind).ok_or(
                    InvariantViolation::NoEquipmentSlot {
                        block: block.id,
                        kind: container.kind,
                    },
                )?;
                if let Some(first) = worn[slot].replace(block.id) {
                    return Err(InvariantViolation::SlotConflict {
                        slot,
                        first,
                        second: block.id,
                    });
                }
            }

            let mut grid = Grid::for_capacity(container.grid_capacity());
            for item in &block.items {
                if !item_ids.insert(item.id) {
                    return Err(InvariantViolation::DuplicateItemId(item.id));
                }

                let definition = items.lookup(item.definition)?;
                if item.amount == 0 || item.amount > definition.limit {
                    return Err(InvariantViolation::InvalidAmount {
                        item: item.id,
                        amount: item.amount,
                        limit: definition.limit,
                    });
                }

                match grid.place(item.id, Footprint::of(&definition, item.rotated), item.slot) {
                    Ok(()) => {}
                    Err(PlacementError::Collision { occupant, .. }) => {
                        return Err(InvariantViolation::Overlap {
                            block: block.id,
                            item: item.id,
                            other: occupant,
                        });
                    }
                    Err(reason) => {
                        return Err(InvariantViolation::OutOfBounds {
                            block: block.id,
                            item: item.id,
                            reason,
                        });
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Env;
    use crate::state::{Block, Inventory, InventoryKind, Item, ItemDefId};
    use crate::testing::{self, StubItems};

    fn check(store: &InventoryStore) -> Result<(), InvariantViolation> {
        let items = StubItems::standard();
        let slots = testing::slots();
        let env = Env::with_all(&items, &slots).into_inventory_env();
        check_invariants(store, &env)
    }

    #[test]
    fn fixture_store_is_consistent() {
        assert_eq!(check(&testing::store()), Ok(()));
    }

    #[test]
    fn detects_overlap() {
        let mut store = testing::store();
        store
            .push_item(BlockId(2), Item::new(ItemId(50), ItemDefId(7), 1, 4, false))
            .unwrap();
        assert_eq!(
            check(&store),
            Err(InvariantViolation::Overlap {
                block: BlockId(2),
                item: ItemId(50),
                other: ItemId(1),
            })
        );
    }

    #[test]
    fn detects_wraparound_footprint() {
        let mut store = testing::store();
        // Bandage (2x1) anchored in the last column of a 4-wide vest.
        store
            .push_item(BlockId(2), Item::new(ItemId(50), ItemDefId(8), 1, 3, false))
            .unwrap();
        assert!(matches!(check(&store), Err(InvariantViolation::OutOfBounds { .. })));
    }

    #[test]
    fn detects_anchor_far_past_the_grid() {
        let mut store = testing::store();
        store
            .push_item(BlockId(2), Item::new(ItemId(50), ItemDefId(7), 1, usize::MAX, false))
            .unwrap();
        assert_eq!(
            check(&store),
            Err(InvariantViolation::OutOfBounds {
                block: BlockId(2),
                item: ItemId(50),
                reason: PlacementError::OutOfBounds { slot: usize::MAX },
            })
        );
    }

    #[test]
    fn detects_duplicate_ids_and_bad_amounts() {
        let mut store = testing::store();
        store
            .push_item(BlockId(1), Item::new(ItemId(1), ItemDefId(7), 1, 0, false))
            .unwrap();
        assert_eq!(check(&store), Err(InvariantViolation::DuplicateItemId(ItemId(1))));

        let mut store = testing::store();
        store
            .push_item(BlockId(1), Item::new(ItemId(50), ItemDefId(6), 2, 0, false))
            .unwrap();
        assert!(matches!(check(&store), Err(InvariantViolation::InvalidAmount { amount: 2, .. })));
    }

    #[test]
    fn detects_double_worn_slot() {
        let store = InventoryStore::new(vec![Inventory::with_blocks(
            InventoryKind::Player,
            vec![Block::new(BlockId(1), ItemDefId(4)), Block::new(BlockId(2), ItemDefId(4))],
        )]);
        assert_eq!(
            check(&store),
            Err(InvariantViolation::SlotConflict {
                slot: 5,
                first: BlockId(1),
                second: BlockId(2),
            })
        );

        let ground = InventoryStore::new(vec![Inventory::with_blocks(
            InventoryKind::Vicinity,
            vec![Block::new(BlockId(1), ItemDefId(4)), Block::new(BlockId(2), ItemDefId(4))],
        )]);
        assert_eq!(check(&ground), Ok(()));
    }
}
