pub mod common;
pub mod inventory;
pub mod locator;

// Re-export identifiers
pub use common::{BlockId, ItemDefId, ItemId};

// Re-export containers
pub use inventory::{Block, Inventory, InventoryKind, Item};

// Re-export addressing
pub use locator::{BlockIndex, BlockRef, InventoryIndex, ItemIndex, Locator};
