//! Authoritative inventory state.
//!
//! This module owns the data structures that describe inventories, blocks and
//! items, plus locator resolution and id allocation. Runtime layers clone or
//! query this state but move items exclusively through the engine.
pub mod delta;
pub mod error;
pub mod invariants;
pub mod types;

pub use delta::{BlockPlacement, CollectionDelta, ItemPlacement, StateDelta};
pub use error::{SpawnError, StateError};
pub use invariants::{InvariantViolation, check_invariants};
pub use types::{
    Block, BlockId, BlockIndex, BlockRef, Inventory, InventoryIndex, InventoryKind, Item, ItemDefId,
    ItemId, ItemIndex, Locator,
};

use crate::env::InventoryEnv;
use crate::grid::{Footprint, build_grid};

/// Canonical snapshot of every inventory in a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryStore {
    /// Sequential item id allocator (monotonically increasing, never reused).
    /// `None` once the id space is exhausted.
    next_item_id: Option<u64>,
    /// Sequential block id allocator, same rules as `next_item_id`.
    next_block_id: Option<u64>,
    inventories: Vec<Inventory>,
}

impl InventoryStore {
    /// Creates a store from already-built inventories.
    ///
    /// Id allocation resumes above the largest id found in `inventories`. If
    /// that id is `u64::MAX`, the allocator starts out exhausted.
    pub fn new(inventories: Vec<Inventory>) -> Self {
        let blocks = || inventories.iter().flat_map(|inventory| inventory.blocks.iter());
        let next_block_id = resume_after(blocks().map(|block| block.id.0));
        let next_item_id = resume_after(
            blocks()
                .flat_map(|block| block.items.iter())
                .map(|item| item.id.0),
        );

        Self {
            next_item_id,
            next_block_id,
            inventories,
        }
    }

    /// Creates an empty store with no inventories.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn inventories(&self) -> &[Inventory] {
        &self.inventories
    }

    /// Allocates a new unique ItemId.
    ///
    /// # Errors
    ///
    /// Returns `StateError::IdOverflow` once the id space is exhausted.
    pub fn allocate_item_id(&mut self) -> Result<ItemId, StateError> {
        let id = self.peek_item_id()?;
        self.next_item_id = id.0.checked_add(1);
        Ok(id)
    }

    /// Allocates a new unique BlockId.
    ///
    /// # Errors
    ///
    /// Returns `StateError::IdOverflow` once the id space is exhausted.
    pub fn allocate_block_id(&mut self) -> Result<BlockId, StateError> {
        let id = self.next_block_id.ok_or(StateError::IdOverflow)?;
        self.next_block_id = id.checked_add(1);
        Ok(BlockId(id))
    }

    /// Id the next [`InventoryStore::allocate_item_id`] call will hand out.
    ///
    /// Nothing in the store carries it yet, so it can stand in for an item
    /// that does not exist during placement checks.
    pub(crate) fn peek_item_id(&self) -> Result<ItemId, StateError> {
        self.next_item_id.map(ItemId).ok_or(StateError::IdOverflow)
    }

    pub fn inventory(&self, inventory: usize) -> Result<&Inventory, StateError> {
        self.inventories
            .get(inventory)
            .ok_or(StateError::InventoryNotFound { inventory })
    }

    pub(crate) fn inventory_mut(&mut self, inventory: usize) -> Result<&mut Inventory, StateError> {
        self.inventories
            .get_mut(inventory)
            .ok_or(StateError::InventoryNotFound { inventory })
    }

    /// Block at a position in an inventory's block list.
    pub fn stored_block(&self, inventory: usize, block: usize) -> Result<&Block, StateError> {
        self.inventory(inventory)?
            .blocks
            .get(block)
            .ok_or(StateError::BlockNotFound { inventory, block })
    }

    pub fn item(&self, index: ItemIndex) -> Result<&Item, StateError> {
        self.stored_block(index.inventory, index.block)?
            .items
            .get(index.item)
            .ok_or(StateError::ItemNotFound { index })
    }

    /// Finds `(inventory, position)` of a block by id.
    pub fn locate_block(&self, id: BlockId) -> Option<(usize, usize)> {
        self.inventories.iter().enumerate().find_map(|(inventory, inv)| {
            inv.block_position(id).map(|position| (inventory, position))
        })
    }

    /// Finds the locator of an item by id.
    pub fn locate_item(&self, id: ItemId) -> Option<ItemIndex> {
        self.inventories.iter().enumerate().find_map(|(inventory, inv)| {
            inv.blocks.iter().enumerate().find_map(|(block, b)| {
                b.item_position(id).map(|item| ItemIndex::new(inventory, block, item))
            })
        })
    }

    pub fn block_by_id(&self, id: BlockId) -> Result<&Block, StateError> {
        let (inventory, position) = self.locate_block(id).ok_or(StateError::UnknownBlock(id))?;
        Ok(&self.inventories[inventory].blocks[position])
    }

    pub fn item_by_id(&self, block: BlockId, item: ItemId) -> Result<&Item, StateError> {
        self.block_by_id(block)?
            .item(item)
            .ok_or(StateError::UnknownItem { block, item })
    }

    pub(crate) fn block_by_id_mut(&mut self, id: BlockId) -> Result<&mut Block, StateError> {
        let (inventory, position) = self.locate_block(id).ok_or(StateError::UnknownBlock(id))?;
        Ok(&mut self.inventories[inventory].blocks[position])
    }

    pub(crate) fn item_by_id_mut(
        &mut self,
        block: BlockId,
        item: ItemId,
    ) -> Result<&mut Item, StateError> {
        self.block_by_id_mut(block)?
            .items
            .iter_mut()
            .find(|candidate| candidate.id == item)
            .ok_or(StateError::UnknownItem { block, item })
    }

    /// Detaches an item from its block, preserving the order of the rest.
    pub(crate) fn take_item(&mut self, block: BlockId, item: ItemId) -> Result<Item, StateError> {
        let owner = self.block_by_id_mut(block)?;
        let position = owner
            .item_position(item)
            .ok_or(StateError::UnknownItem { block, item })?;
        Ok(owner.items.remove(position))
    }

    pub(crate) fn push_item(&mut self, block: BlockId, item: Item) -> Result<(), StateError> {
        self.block_by_id_mut(block)?.items.push(item);
        Ok(())
    }

    /// Detaches a block from its inventory.
    pub(crate) fn take_block(&mut self, id: BlockId) -> Result<Block, StateError> {
        let (inventory, position) = self.locate_block(id).ok_or(StateError::UnknownBlock(id))?;
        Ok(self.inventories[inventory].blocks.remove(position))
    }

    /// Creates an item from the catalog inside a stored block.
    ///
    /// With `placement = None` the item goes to the first free anchor
    /// (row-major, unrotated preferred).
    ///
    /// # Errors
    ///
    /// - `SpawnError::InvalidAmount` if `amount` is outside `1..=limit`
    /// - `SpawnError::Placement` if the requested anchor does not fit
    /// - `SpawnError::NoFreeSpace` if no anchor fits at all
    pub fn spawn_item(
        &mut self,
        env: &InventoryEnv<'_>,
        inventory: usize,
        block: usize,
        definition: ItemDefId,
        amount: u16,
        placement: Option<(usize, bool)>,
    ) -> Result<ItemId, SpawnError> {
        let items = env.items()?;
        let def = items.lookup(definition)?;
        if amount == 0 || amount > def.limit {
            return Err(SpawnError::InvalidAmount {
                amount,
                limit: def.limit,
            });
        }

        let target = self.stored_block(inventory, block)?;
        let target_id = target.id;
        let grid = build_grid(target, items, &[])?;

        let candidate = self.peek_item_id()?;
        let (slot, rotated) = match placement {
            Some((slot, rotated)) => {
                grid.check(candidate, Footprint::of(&def, rotated), slot)?;
                (slot, rotated)
            }
            None => grid
                .first_fit(candidate, &def)
                .ok_or(SpawnError::NoFreeSpace {
                    block: target_id,
                    definition,
                })?,
        };

        let id = self.allocate_item_id()?;
        self.push_item(target_id, Item::new(id, definition, amount, slot, rotated))?;
        Ok(id)
    }

    /// Creates an empty block from the catalog in `inventory`.
    ///
    /// Equipment inventories bind the block to the slot accepting its kind;
    /// other inventories take any container.
    ///
    /// # Errors
    ///
    /// - `SpawnError::NoEquipmentSlot` if no slot accepts the definition's kind
    /// - `SpawnError::SlotOccupied` if that slot is already worn
    pub fn spawn_block(
        &mut self,
        env: &InventoryEnv<'_>,
        inventory: usize,
        definition: ItemDefId,
    ) -> Result<BlockId, SpawnError> {
        let items = env.items()?;
        let def = items.lookup(definition)?;
        let target = self.inventory(inventory)?;

        if target.kind.has_equipment() {
            let slot = env
                .slots()?
                .slot_for(def.kind)
                .ok_or(SpawnError::NoEquipmentSlot { kind: def.kind })?;
            if let Some(worn) = target.block_accepting(items, def.kind)? {
                return Err(SpawnError::SlotOccupied {
                    slot,
                    block: target.blocks[worn].id,
                });
            }
        }

        let id = self.allocate_block_id()?;
        self.inventory_mut(inventory)?.blocks.push(Block::new(id, definition));
        Ok(id)
    }

    /// Takes `amount` units from a stack, removing the item when it runs out.
    ///
    /// Returns the amount left (0 when the item was removed).
    pub fn consume(&mut self, index: ItemIndex, amount: u16) -> Result<u16, SpawnError> {
        let item = self.item(index)?;
        if amount == 0 {
            return Err(SpawnError::InvalidAmount { amount, limit: item.amount });
        }
        if amount > item.amount {
            return Err(SpawnError::InsufficientAmount {
                item: item.id,
                available: item.amount,
                requested: amount,
            });
        }

        let remaining = item.amount - amount;
        let block = &mut self.inventories[index.inventory].blocks[index.block];
        if remaining == 0 {
            block.items.remove(index.item);
        } else {
            block.items[index.item].amount = remaining;
        }
        Ok(remaining)
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::empty()
    }
}

/// First free id above `ids`, `None` when the largest one is `u64::MAX`.
fn resume_after(ids: impl Iterator<Item = u64>) -> Option<u64> {
    ids.max().map_or(Some(1), |last| last.checked_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Env;
    use crate::testing::{self, StubItems};

    #[test]
    fn new_resumes_id_allocation_above_existing_ids() {
        let mut store = testing::store();
        assert_eq!(store.allocate_item_id(), Ok(ItemId(6)));
        assert_eq!(store.allocate_item_id(), Ok(ItemId(7)));
        assert_eq!(store.allocate_block_id(), Ok(BlockId(4)));

        let mut empty = InventoryStore::empty();
        assert_eq!(empty.allocate_item_id(), Ok(ItemId(1)));
    }

    #[test]
    fn maximal_loaded_ids_exhaust_allocation_instead_of_overflowing() {
        let mut store = InventoryStore::new(vec![Inventory::with_blocks(
            InventoryKind::Hand,
            vec![Block::new(BlockId(u64::MAX), ItemDefId(1)).with_items(vec![Item::new(
                ItemId(u64::MAX),
                ItemDefId(6),
                1,
                0,
                false,
            )])],
        )]);

        assert_eq!(store.allocate_item_id(), Err(StateError::IdOverflow));
        assert_eq!(store.allocate_block_id(), Err(StateError::IdOverflow));

        let items = StubItems::standard();
        let slots = testing::slots();
        let env = Env::with_all(&items, &slots).into_inventory_env();
        assert_eq!(
            store.spawn_item(&env, 0, 0, ItemDefId(7), 1, None),
            Err(SpawnError::State(StateError::IdOverflow))
        );
    }

    #[test]
    fn last_id_is_still_handed_out() {
        let mut store = InventoryStore::new(vec![Inventory::with_blocks(
            InventoryKind::Hand,
            vec![Block::new(BlockId(1), ItemDefId(1)).with_items(vec![Item::new(
                ItemId(u64::MAX - 1),
                ItemDefId(6),
                1,
                0,
                false,
            )])],
        )]);

        assert_eq!(store.allocate_item_id(), Ok(ItemId(u64::MAX)));
        assert_eq!(store.allocate_item_id(), Err(StateError::IdOverflow));
    }

    #[test]
    fn locator_misses_are_state_errors() {
        let store = testing::store();
        assert_eq!(store.inventory(7).unwrap_err(), StateError::InventoryNotFound { inventory: 7 });
        assert_eq!(
            store.stored_block(2, 3).unwrap_err(),
            StateError::BlockNotFound { inventory: 2, block: 3 }
        );
        let index = ItemIndex::new(2, 1, 2);
        assert_eq!(store.item(index).unwrap_err(), StateError::ItemNotFound { index });
        assert_eq!(store.item(ItemIndex::new(2, 1, 1)).map(|item| item.id), Ok(ItemId(2)));
    }

    #[test]
    fn locate_by_id() {
        let store = testing::store();
        assert_eq!(store.locate_block(BlockId(3)), Some((2, 2)));
        assert_eq!(store.locate_item(ItemId(5)), Some(ItemIndex::new(2, 2, 2)));
        assert_eq!(store.locate_item(ItemId(42)), None);
    }

    #[test]
    fn spawn_item_first_fit_and_explicit() {
        let items = StubItems::standard();
        let slots = testing::slots();
        let env = Env::with_all(&items, &slots).into_inventory_env();
        let mut store = testing::store();

        // Vest grid (4x3): magazine covers 0 and 4, ammo covers 8.
        let id = store.spawn_item(&env, 2, 1, ItemDefId(8), 2, None).unwrap();
        let spawned = store.stored_block(2, 1).unwrap().item(id).unwrap();
        assert_eq!((spawned.slot, spawned.rotated, spawned.amount), (1, false, 2));

        let err = store.spawn_item(&env, 2, 1, ItemDefId(8), 1, Some((1, false))).unwrap_err();
        assert!(matches!(err, SpawnError::Placement(_)));

        let err = store.spawn_item(&env, 2, 1, ItemDefId(8), 6, None).unwrap_err();
        assert_eq!(err, SpawnError::InvalidAmount { amount: 6, limit: 5 });

        // Rifle (4x2) cannot fit next to the magazine in a 4-wide vest.
        let err = store.spawn_item(&env, 2, 1, ItemDefId(5), 1, None).unwrap_err();
        assert!(matches!(err, SpawnError::NoFreeSpace { .. }));
    }

    #[test]
    fn spawn_block_respects_equipment_slots() {
        let items = StubItems::standard();
        let slots = testing::slots();
        let env = Env::with_all(&items, &slots).into_inventory_env();
        let mut store = testing::store();

        let err = store.spawn_block(&env, 2, ItemDefId(4)).unwrap_err();
        assert_eq!(err, SpawnError::SlotOccupied { slot: 5, block: BlockId(3) });

        let err = store.spawn_block(&env, 2, ItemDefId(5)).unwrap_err();
        assert!(matches!(err, SpawnError::NoEquipmentSlot { .. }));

        let jeans = store.spawn_block(&env, 2, ItemDefId(3)).unwrap();
        assert_eq!(store.locate_block(jeans), Some((2, 3)));

        // The ground takes anything.
        assert!(store.spawn_block(&env, 0, ItemDefId(5)).is_ok());
    }

    #[test]
    fn consume_removes_exhausted_stacks() {
        let mut store = testing::store();
        let ammo = ItemIndex::new(2, 1, 1);

        assert_eq!(store.consume(ammo, 3), Ok(2));
        assert!(matches!(store.consume(ammo, 3), Err(SpawnError::InsufficientAmount { .. })));
        assert!(matches!(store.consume(ammo, 0), Err(SpawnError::InvalidAmount { .. })));
        assert_eq!(store.consume(ammo, 2), Ok(0));
        assert_eq!(store.stored_block(2, 1).unwrap().items.len(), 1);
        assert_eq!(store.locate_item(ItemId(2)), None);
    }
}
