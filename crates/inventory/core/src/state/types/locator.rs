//! Positional addressing of inventories, blocks and items.
//!
//! Locators are resolved against the store at call time. They follow the
//! containment hierarchy inventory → block → item, and a move request is
//! classified purely by the shape of its two [`Locator`]s.

/// Points at an inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryIndex {
    pub inventory: usize,
}

impl InventoryIndex {
    pub const fn new(inventory: usize) -> Self {
        Self { inventory }
    }
}

/// How a block-level locator picks its block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockRef {
    /// A block at this position in the inventory's block list.
    Stored(usize),
    /// An entry of the equipment slot registry rather than a grid.
    Equipment(usize),
}

/// Points at a whole block (a worn or lying container item).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockIndex {
    pub inventory: usize,
    pub block: BlockRef,
}

impl BlockIndex {
    pub const fn stored(inventory: usize, block: usize) -> Self {
        Self {
            inventory,
            block: BlockRef::Stored(block),
        }
    }

    pub const fn equipment(inventory: usize, slot: usize) -> Self {
        Self {
            inventory,
            block: BlockRef::Equipment(slot),
        }
    }
}

/// Points at an item inside a stored block.
///
/// As a move destination, `item` names the item under the pointer; the item
/// actually displaced is whichever one covers the requested grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemIndex {
    pub inventory: usize,
    pub block: usize,
    pub item: usize,
}

impl ItemIndex {
    pub const fn new(inventory: usize, block: usize, item: usize) -> Self {
        Self {
            inventory,
            block,
            item,
        }
    }

    /// Same block, different item position.
    pub const fn with_item(self, item: usize) -> Self {
        Self { item, ..self }
    }
}

/// Either end of a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locator {
    Block(BlockIndex),
    Item(ItemIndex),
}

impl Locator {
    /// Inventory either shape of locator points into.
    pub const fn inventory(&self) -> InventoryIndex {
        match self {
            Locator::Block(index) => InventoryIndex::new(index.inventory),
            Locator::Item(index) => InventoryIndex::new(index.inventory),
        }
    }
}

impl From<BlockIndex> for Locator {
    fn from(index: BlockIndex) -> Self {
        Locator::Block(index)
    }
}

impl From<ItemIndex> for Locator {
    fn from(index: ItemIndex) -> Self {
        Locator::Item(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_shapes_name_their_inventory() {
        let worn: Locator = BlockIndex::equipment(2, 5).into();
        let stored: Locator = ItemIndex::new(0, 1, 3).into();
        assert_eq!(worn.inventory(), InventoryIndex::new(2));
        assert_eq!(stored.inventory(), InventoryIndex::new(0));
    }
}
