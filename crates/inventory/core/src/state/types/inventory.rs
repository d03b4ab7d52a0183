//! Inventory containers and the items placed in them.
//!
//! - Inventory: ordered list of blocks (ground, hands, player equipment)
//! - Block: a container item and the grid items stored inside it
//! - Item: an item instance anchored at a grid slot

use super::{BlockId, ItemDefId, ItemId};
use crate::env::{ItemKind, ItemOracle, OracleError};

/// Where an inventory lives relative to the player.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InventoryKind {
    /// Containers lying around the player.
    Vicinity,
    /// Whatever the player holds in hand.
    Hand,
    /// Worn equipment; every block occupies one equipment slot.
    Player,
}

impl InventoryKind {
    /// Blocks of this inventory are bound to equipment slots.
    pub const fn has_equipment(self) -> bool {
        matches!(self, InventoryKind::Player)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub kind: InventoryKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocks: Vec<Block>,
}

impl Inventory {
    pub fn new(kind: InventoryKind) -> Self {
        Self {
            kind,
            blocks: Vec::new(),
        }
    }

    pub fn with_blocks(kind: InventoryKind, blocks: Vec<Block>) -> Self {
        Self { kind, blocks }
    }

    pub fn block_position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    /// Position of the block whose container kind is `kind`, i.e. the block
    /// wearing the equipment slot that accepts `kind`.
    pub fn block_accepting<I>(
        &self,
        items: &I,
        kind: ItemKind,
    ) -> Result<Option<usize>, OracleError>
    where
        I: ItemOracle + ?Sized,
    {
        for (position, block) in self.blocks.iter().enumerate() {
            if items.lookup(block.definition)?.kind == kind {
                return Ok(Some(position));
            }
        }
        Ok(None)
    }

    /// Total carried weight: container items plus their contents.
    pub fn weight<I>(&self, items: &I) -> Result<u64, OracleError>
    where
        I: ItemOracle + ?Sized,
    {
        self.blocks.iter().try_fold(0u64, |acc, block| {
            let own = u64::from(items.lookup(block.definition)?.weight);
            Ok(acc + own + block.contents_weight(items)?)
        })
    }
}

/// A container item and its grid contents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub id: BlockId,
    /// Definition of the container item occupying this block.
    pub definition: ItemDefId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
}

impl Block {
    pub fn new(id: BlockId, definition: ItemDefId) -> Self {
        Self {
            id,
            definition,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Weight of stored items, each counted `amount` times.
    pub fn contents_weight<I>(&self, items: &I) -> Result<u64, OracleError>
    where
        I: ItemOracle + ?Sized,
    {
        self.items.iter().try_fold(0u64, |acc, item| {
            let unit = u64::from(items.lookup(item.definition)?.weight);
            Ok(acc + unit * u64::from(item.amount))
        })
    }
}

/// An item instance placed on a block grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub definition: ItemDefId,
    pub amount: u16,
    /// Row-major anchor cell in the owning block's grid.
    pub slot: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotated: bool,
}

impl Item {
    pub fn new(id: ItemId, definition: ItemDefId, amount: u16, slot: usize, rotated: bool) -> Self {
        Self {
            id,
            definition,
            amount,
            slot,
            rotated,
        }
    }

    /// Copy of this item anchored elsewhere.
    pub fn placed_at(&self, slot: usize, rotated: bool) -> Self {
        Self {
            slot,
            rotated,
            ..self.clone()
        }
    }
}
