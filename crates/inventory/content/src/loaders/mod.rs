//! Content loaders for reading inventory data from files.
//!
//! This module provides loaders that convert RON/TOML files into the catalog,
//! slot registry, configuration and starting state consumed by the runtime.

pub mod config;
pub mod factory;
pub mod inventory;
pub mod item;
pub mod slots;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use inventory::{InventoryFixture, InventoryLoader};
pub use item::{ItemCatalog, ItemLoader};
pub use slots::{SlotCatalog, SlotLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
