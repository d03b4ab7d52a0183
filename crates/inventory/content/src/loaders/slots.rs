//! Equipment slot registry loader.

use std::path::Path;

use inventory_core::{EquipmentSlot, SlotRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Slot registry structure for RON files. Order defines slot indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCatalog {
    pub slots: Vec<EquipmentSlot>,
}

/// Loader for the equipment slot registry from RON files.
pub struct SlotLoader;

impl SlotLoader {
    pub fn load(path: &Path) -> LoadResult<SlotRegistry> {
        let content = read_file(path)?;
        let registry = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), count = registry.len(), "loaded slot registry");
        Ok(registry)
    }

    /// Parses registry text. Two slots accepting the same kind are refused,
    /// since a worn block is matched to its slot by kind.
    pub fn parse(content: &str) -> LoadResult<SlotRegistry> {
        let catalog: SlotCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse slot registry RON: {}", e))?;

        for (index, slot) in catalog.slots.iter().enumerate() {
            if catalog.slots[..index].iter().any(|other| other.accepts == slot.accepts) {
                anyhow::bail!("Equipment slot {} repeats kind {}", index, slot.accepts);
            }
        }

        Ok(SlotRegistry::new(catalog.slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{ItemKind, SlotOracle, WeaponKind};

    #[test]
    fn parses_ordered_slots() {
        let registry = SlotLoader::parse(
            r#"(slots: [
                (image: "hat", accepts: Clothing(Hat)),
                (image: "primary", accepts: Weapon(AssaultRifle)),
            ])"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.slot_for(ItemKind::Weapon(WeaponKind::AssaultRifle)), Some(1));
    }

    #[test]
    fn rejects_repeated_kinds() {
        let result = SlotLoader::parse(
            r#"(slots: [
                (image: "hat", accepts: Clothing(Hat)),
                (image: "cap", accepts: Clothing(Hat)),
            ])"#,
        );
        assert!(result.is_err());
    }
}
