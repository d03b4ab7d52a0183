//! Concrete move transitions.
//!
//! Each scenario is a small struct of resolved ids. Locators are turned into
//! ids once, during classification, so `apply` never has to care about list
//! positions shifting while items and blocks are detached and re-attached.

use super::errors::{MoveError, Rejection};
use super::outcome::Scenario;
use crate::env::{InventoryEnv, OracleError};
use crate::grid::{Footprint, PlacementError, build_grid};
use crate::state::{Block, BlockId, BlockRef, InventoryStore, Item, ItemId, check_invariants};

/// Defines how a move scenario checks and mutates the store.
///
/// `pre_validate` runs against the authoritative store and must stay
/// side-effect free. `apply` and `post_validate` run on a working copy that is
/// only swapped in once every phase has passed.
pub trait MoveTransition {
    fn scenario(&self) -> Scenario;

    /// Validates every rule using the store **before** mutation.
    fn pre_validate(&self, store: &InventoryStore, env: &InventoryEnv<'_>) -> Result<(), MoveError>;

    /// Applies the move. Implementations may assume `pre_validate` passed.
    fn apply(&self, store: &mut InventoryStore, env: &InventoryEnv<'_>) -> Result<(), MoveError>;

    /// Validates the store **after** mutation.
    fn post_validate(
        &self,
        store: &InventoryStore,
        env: &InventoryEnv<'_>,
    ) -> Result<(), MoveError> {
        check_invariants(store, env).map_err(MoveError::Invariant)
    }
}

/// A block leaves its inventory and becomes an item on a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotToGrid {
    pub block: BlockId,
    pub target: BlockId,
    pub slot: usize,
    pub rotated: bool,
}

impl MoveTransition for SlotToGrid {
    fn scenario(&self) -> Scenario {
        Scenario::SlotToGrid
    }

    fn pre_validate(
        &self,
        store: &InventoryStore,
        env: &InventoryEnv<'_>,
    ) -> Result<(), MoveError> {
        let items = env.items()?;
        let block = store.block_by_id(self.block)?;

        if !block.is_empty() {
            return Err(Rejection::ContainerNotEmpty {
                block: block.id,
                items: block.items.len(),
            }
            .into());
        }
        if self.block == self.target {
            return Err(Rejection::SameBlock { block: self.block }.into());
        }

        let grid = build_grid(store.block_by_id(self.target)?, items, &[])?;
        if let Some(occupant) = grid.occupant_at(self.slot) {
            return Err(Rejection::CellOccupied {
                slot: self.slot,
                occupant,
            }
            .into());
        }

        let definition = items.lookup(block.definition)?;
        let footprint = Footprint::of(&definition, self.rotated);
        grid.check(store.peek_item_id()?, footprint, self.slot)?;
        Ok(())
    }

    fn apply(&self, store: &mut InventoryStore, _env: &InventoryEnv<'_>) -> Result<(), MoveError> {
        let block = store.take_block(self.block)?;
        let id = store.allocate_item_id()?;
        store.push_item(self.target, Item::new(id, block.definition, 1, self.slot, self.rotated))?;
        Ok(())
    }
}

/// A grid item is put on through an equipment slot and becomes a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridToSlot {
    pub source: BlockId,
    pub item: ItemId,
    pub inventory: usize,
    pub target: BlockRef,
}

impl MoveTransition for GridToSlot {
    fn scenario(&self) -> Scenario {
        Scenario::GridToSlot
    }

    fn pre_validate(
        &self,
        store: &InventoryStore,
        env: &InventoryEnv<'_>,
    ) -> Result<(), MoveError> {
        let BlockRef::Equipment(slot) = self.target else {
            return Err(Rejection::NotEquipmentSlot.into());
        };
        let inventory = store.inventory(self.inventory)?;
        if !inventory.kind.has_equipment() {
            return Err(Rejection::NotEquipmentSlot.into());
        }

        let items = env.items()?;
        let equipment = env.slots()?.slot(slot).ok_or(OracleError::SlotNotFound(slot))?;
        let item = store.item_by_id(self.source, self.item)?;
        let definition = items.lookup(item.definition)?;

        if definition.kind != equipment.accepts {
            return Err(Rejection::CategoryMismatch {
                expected: equipment.accepts,
                found: definition.kind,
            }
            .into());
        }
        if let Some(worn) = inventory.block_accepting(items, equipment.accepts)? {
            return Err(Rejection::SlotOccupied {
                slot,
                block: inventory.blocks[worn].id,
            }
            .into());
        }
        if item.amount != 1 {
            return Err(Rejection::StackedItem { amount: item.amount }.into());
        }
        Ok(())
    }

    fn apply(&self, store: &mut InventoryStore, _env: &InventoryEnv<'_>) -> Result<(), MoveError> {
        let item = store.take_item(self.source, self.item)?;
        let id = store.allocate_block_id()?;
        store
            .inventory_mut(self.inventory)?
            .blocks
            .push(Block::new(id, item.definition));
        Ok(())
    }
}

/// An item re-anchored or rotated over its own cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Replace {
    pub block: BlockId,
    pub item: ItemId,
    pub slot: usize,
    pub rotated: bool,
}

impl MoveTransition for Replace {
    fn scenario(&self) -> Scenario {
        Scenario::Replace
    }

    fn pre_validate(
        &self,
        store: &InventoryStore,
        env: &InventoryEnv<'_>,
    ) -> Result<(), MoveError> {
        let items = env.items()?;
        let block = store.block_by_id(self.block)?;
        let item = store.item_by_id(self.block, self.item)?;
        let definition = items.lookup(item.definition)?;

        let grid = build_grid(block, items, &[self.item])?;
        grid.check(self.item, Footprint::of(&definition, self.rotated), self.slot)?;
        Ok(())
    }

    fn apply(&self, store: &mut InventoryStore, _env: &InventoryEnv<'_>) -> Result<(), MoveError> {
        let item = store.item_by_id_mut(self.block, self.item)?;
        item.slot = self.slot;
        item.rotated = self.rotated;
        Ok(())
    }
}

/// An item moved onto free cells, in its own block or another one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveItem {
    pub source: BlockId,
    pub target: BlockId,
    pub item: ItemId,
    pub slot: usize,
    pub rotated: bool,
}

impl MoveTransition for MoveItem {
    fn scenario(&self) -> Scenario {
        Scenario::Move
    }

    fn pre_validate(
        &self,
        store: &InventoryStore,
        env: &InventoryEnv<'_>,
    ) -> Result<(), MoveError> {
        let items = env.items()?;
        let item = store.item_by_id(self.source, self.item)?;
        let definition = items.lookup(item.definition)?;

        let grid = build_grid(store.block_by_id(self.target)?, items, &[self.item])?;
        grid.check(self.item, Footprint::of(&definition, self.rotated), self.slot)?;
        Ok(())
    }

    fn apply(&self, store: &mut InventoryStore, _env: &InventoryEnv<'_>) -> Result<(), MoveError> {
        let item = store.take_item(self.source, self.item)?;
        store.push_item(self.target, item.placed_at(self.slot, self.rotated))?;
        Ok(())
    }
}

/// Two items trade places.
///
/// The mover lands on the occupant's anchor with the requested rotation; the
/// occupant lands on the mover's old anchor keeping its own rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swap {
    pub source: BlockId,
    pub item: ItemId,
    pub target: BlockId,
    pub occupant: ItemId,
    pub rotated: bool,
}

impl Swap {
    fn misfit(item: ItemId) -> impl Fn(PlacementError) -> Rejection {
        move |reason| Rejection::SwapDoesNotFit { item, reason }
    }
}

impl MoveTransition for Swap {
    fn scenario(&self) -> Scenario {
        Scenario::Swap
    }

    fn pre_validate(
        &self,
        store: &InventoryStore,
        env: &InventoryEnv<'_>,
    ) -> Result<(), MoveError> {
        let items = env.items()?;
        let mover = store.item_by_id(self.source, self.item)?;
        let occupant = store.item_by_id(self.target, self.occupant)?;
        let mover_footprint = Footprint::of(&items.lookup(mover.definition)?, self.rotated);
        let occupant_footprint =
            Footprint::of(&items.lookup(occupant.definition)?, occupant.rotated);

        if self.source == self.target {
            // One grid: the mover is stamped first so the occupant is checked
            // against the cells it will actually share the block with.
            let block = store.block_by_id(self.source)?;
            let mut grid = build_grid(block, items, &[mover.id, occupant.id])?;
            grid.place(mover.id, mover_footprint, occupant.slot)
                .map_err(Self::misfit(mover.id))?;
            grid.check(occupant.id, occupant_footprint, mover.slot)
                .map_err(Self::misfit(occupant.id))?;
        } else {
            let destination = build_grid(store.block_by_id(self.target)?, items, &[occupant.id])?;
            destination
                .check(mover.id, mover_footprint, occupant.slot)
                .map_err(Self::misfit(mover.id))?;

            let origin = build_grid(store.block_by_id(self.source)?, items, &[mover.id])?;
            origin
                .check(occupant.id, occupant_footprint, mover.slot)
                .map_err(Self::misfit(occupant.id))?;
        }
        Ok(())
    }

    fn apply(&self, store: &mut InventoryStore, _env: &InventoryEnv<'_>) -> Result<(), MoveError> {
        if self.source == self.target {
            let (mover_slot, occupant_slot) = (
                store.item_by_id(self.source, self.item)?.slot,
                store.item_by_id(self.target, self.occupant)?.slot,
            );
            let mover = store.item_by_id_mut(self.source, self.item)?;
            mover.slot = occupant_slot;
            mover.rotated = self.rotated;
            store.item_by_id_mut(self.target, self.occupant)?.slot = mover_slot;
            return Ok(());
        }

        let mover = store.take_item(self.source, self.item)?;
        let occupant = store.take_item(self.target, self.occupant)?;
        store.push_item(self.target, mover.placed_at(occupant.slot, self.rotated))?;
        store.push_item(self.source, occupant.placed_at(mover.slot, occupant.rotated))?;
        Ok(())
    }
}
