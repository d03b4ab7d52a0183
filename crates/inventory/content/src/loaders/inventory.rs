//! Starting inventory loader.

use std::path::Path;

use inventory_core::Inventory;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Starting inventories for a session, in locator order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryFixture {
    pub inventories: Vec<Inventory>,
}

/// Loader for starting inventories from RON files.
///
/// Only the shape is checked here. Spatial consistency needs the item catalog
/// and is verified when the store is built.
pub struct InventoryLoader;

impl InventoryLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Inventory>> {
        let content = read_file(path)?;
        let fixture: InventoryFixture = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse inventory RON: {}", e))?;

        tracing::debug!(
            path = %path.display(),
            inventories = fixture.inventories.len(),
            "loaded starting inventories"
        );
        Ok(fixture.inventories)
    }
}
