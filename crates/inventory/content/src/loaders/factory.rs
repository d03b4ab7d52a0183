//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use inventory_core::{EngineConfig, Inventory, ItemDefinition, SlotRegistry};

use crate::loaders::{ConfigLoader, InventoryLoader, ItemLoader, LoadResult, SlotLoader};

/// Content factory that loads all inventory content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── slots.ron
/// └── inventories.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load engine configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load the equipment slot registry from `slots.ron`.
    pub fn load_slots(&self) -> LoadResult<SlotRegistry> {
        SlotLoader::load(&self.data_dir.join("slots.ron"))
    }

    /// Load starting inventories from `inventories.ron`.
    pub fn load_inventories(&self) -> LoadResult<Vec<Inventory>> {
        InventoryLoader::load(&self.data_dir.join("inventories.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
