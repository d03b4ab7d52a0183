//! Runtime wrappers around static inventory content.
//!
//! These implementations expose `inventory-core` oracle traits and bundle them
//! into an [`OracleManager`] so the runtime can build
//! [`inventory_core::InventoryEnv`] snapshots on demand. The data is immutable
//! at runtime; dynamic state lives in [`inventory_core::InventoryStore`].
mod items;

use std::sync::Arc;

use inventory_core::{Env, InventoryEnv, SlotRegistry};

pub use items::{CachedItemOracle, ItemOracleImpl};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<CachedItemOracle<ItemOracleImpl>>,
    pub(crate) slots: Arc<SlotRegistry>,
}

impl OracleManager {
    pub fn new(items: ItemOracleImpl, slots: SlotRegistry) -> Self {
        Self {
            items: Arc::new(CachedItemOracle::new(items)),
            slots: Arc::new(slots),
        }
    }

    /// Converts oracle manager into InventoryEnv for inventory-core
    pub fn as_inventory_env(&self) -> InventoryEnv<'_> {
        Env::with_all(self.items.as_ref(), self.slots.as_ref()).into_inventory_env()
    }

    pub fn items(&self) -> &CachedItemOracle<ItemOracleImpl> {
        &self.items
    }

    pub fn slots(&self) -> &SlotRegistry {
        &self.slots
    }
}
