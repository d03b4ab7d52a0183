//! Shared fixtures for unit tests.

use std::collections::HashMap;

use crate::env::{ClothingKind, ItemDefinition, ItemKind, ItemOracle, SlotRegistry, WeaponKind};
use crate::state::{
    Block, BlockId, Inventory, InventoryKind, InventoryStore, Item, ItemDefId, ItemId,
};

#[derive(Debug)]
pub(crate) struct StubItems {
    definitions: HashMap<ItemDefId, ItemDefinition>,
}

impl StubItems {
    /// 1 vest (kevlar, 4x3 grid), 2 coat (top, 7x4), 3 jeans (bottom, 4x2),
    /// 4 backpack (5x5, 10x10 grid), 5 rifle, 6 magazine (1x2), 7 ammo (1x1,
    /// stacks to 60), 8 bandage (2x1, stacks to 5).
    pub(crate) fn standard() -> Self {
        let clothing = |kind| ItemKind::Clothing(kind);
        let rifle = ItemKind::Weapon(WeaponKind::AssaultRifle);
        let definitions = [
            ItemDefinition::new(ItemDefId(1), "vest", 2, 2, clothing(ClothingKind::Kevlar))
                .with_capacity(4, 3)
                .with_weight(1200),
            ItemDefinition::new(ItemDefId(2), "coat", 4, 3, clothing(ClothingKind::TopFirstLayer))
                .with_capacity(7, 4)
                .with_weight(900),
            ItemDefinition::new(ItemDefId(3), "jeans", 1, 2, clothing(ClothingKind::Bottom))
                .with_capacity(4, 2)
                .with_weight(500),
            ItemDefinition::new(ItemDefId(4), "backpack", 5, 5, clothing(ClothingKind::Backpack))
                .with_capacity(10, 10)
                .with_weight(1500),
            ItemDefinition::new(ItemDefId(5), "rifle", 4, 2, rifle).with_weight(3500),
            ItemDefinition::new(ItemDefId(6), "magazine", 1, 2, ItemKind::General).with_weight(400),
            ItemDefinition::new(ItemDefId(7), "ammo", 1, 1, ItemKind::General)
                .with_limit(60)
                .with_weight(16),
            ItemDefinition::new(ItemDefId(8), "bandage", 2, 1, ItemKind::General).with_limit(5),
        ];
        Self {
            definitions: definitions.into_iter().map(|def| (def.id, def)).collect(),
        }
    }
}

impl ItemOracle for StubItems {
    fn definition(&self, id: ItemDefId) -> Option<ItemDefinition> {
        self.definitions.get(&id).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.definitions.values().cloned().collect()
    }
}

pub(crate) fn slots() -> SlotRegistry {
    SlotRegistry::standard()
}

/// Vicinity (empty), hand (empty), player wearing:
/// - block 0: coat, empty
/// - block 1: vest with magazine @0 and 5 ammo @8
/// - block 2: backpack with rotated coat @0, vest @3, rotated magazine @5
pub(crate) fn store() -> InventoryStore {
    let player = Inventory::with_blocks(
        InventoryKind::Player,
        vec![
            Block::new(BlockId(1), ItemDefId(2)),
            Block::new(BlockId(2), ItemDefId(1)).with_items(vec![
                Item::new(ItemId(1), ItemDefId(6), 1, 0, false),
                Item::new(ItemId(2), ItemDefId(7), 5, 8, false),
            ]),
            Block::new(BlockId(3), ItemDefId(4)).with_items(vec![
                Item::new(ItemId(3), ItemDefId(2), 1, 0, true),
                Item::new(ItemId(4), ItemDefId(1), 1, 3, false),
                Item::new(ItemId(5), ItemDefId(6), 1, 5, true),
            ]),
        ],
    );
    InventoryStore::new(vec![
        Inventory::new(InventoryKind::Vicinity),
        Inventory::new(InventoryKind::Hand),
        player,
    ])
}
