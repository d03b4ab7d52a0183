//! In-memory [`inventory_core::ItemOracle`] implementations.
use std::collections::HashMap;
use std::sync::RwLock;

use inventory_core::{ItemDefId, ItemDefinition, ItemOracle};

/// ItemOracle implementation with static item definitions
pub struct ItemOracleImpl {
    definitions: HashMap<ItemDefId, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut oracle = Self::new();
        for def in definitions {
            oracle.add_definition(def);
        }
        oracle
    }

    /// Add an item definition
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.id, def);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, id: ItemDefId) -> Option<ItemDefinition> {
        self.definitions.get(&id).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.definitions.values().cloned().collect()
    }
}

/// Read-through cache in front of another catalog.
///
/// Catalogs are immutable after load, so entries are never invalidated. A
/// poisoned cache lock only disables caching; lookups keep working.
pub struct CachedItemOracle<O> {
    inner: O,
    cache: RwLock<HashMap<ItemDefId, ItemDefinition>>,
}

impl<O: ItemOracle> CachedItemOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Number of memoized definitions.
    pub fn cached(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }
}

impl<O: ItemOracle> ItemOracle for CachedItemOracle<O> {
    fn definition(&self, id: ItemDefId) -> Option<ItemDefinition> {
        if let Some(hit) = self.cache.read().ok().and_then(|cache| cache.get(&id).cloned()) {
            return Some(hit);
        }

        let definition = self.inner.definition(id)?;
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(id, definition.clone());
        }
        Some(definition)
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.inner.all_definitions()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use inventory_core::ItemKind;

    struct Counting {
        inner: ItemOracleImpl,
        calls: AtomicUsize,
    }

    impl ItemOracle for Counting {
        fn definition(&self, id: ItemDefId) -> Option<ItemDefinition> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.definition(id)
        }

        fn all_definitions(&self) -> Vec<ItemDefinition> {
            self.inner.all_definitions()
        }
    }

    #[test]
    fn repeated_lookups_hit_the_cache() {
        let inner = ItemOracleImpl::from_definitions([ItemDefinition::new(
            ItemDefId(7),
            "ammo",
            1,
            1,
            ItemKind::General,
        )]);
        let oracle = CachedItemOracle::new(Counting {
            inner,
            calls: AtomicUsize::new(0),
        });

        for _ in 0..3 {
            assert_eq!(oracle.lookup(ItemDefId(7)).map(|def| def.name), Ok("ammo".to_string()));
        }
        assert_eq!(oracle.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(oracle.cached(), 1);

        // Misses are not memoized.
        assert!(oracle.definition(ItemDefId(8)).is_none());
        assert!(oracle.definition(ItemDefId(8)).is_none());
        assert_eq!(oracle.inner().calls.load(Ordering::SeqCst), 3);
    }
}
