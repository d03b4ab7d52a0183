//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use inventory_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// Every definition is validated and ids must be unique; the catalog is
    /// trusted afterwards, so bad data is refused here rather than at lookup.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let items = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), count = items.len(), "loaded item catalog");
        Ok(items)
    }

    /// Parses and validates catalog text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for definition in &catalog.items {
            definition.validate()?;
            if !seen.insert(definition.id) {
                anyhow::bail!("Duplicate item definition id {}", definition.id);
            }
        }

        Ok(catalog.items)
    }
}
