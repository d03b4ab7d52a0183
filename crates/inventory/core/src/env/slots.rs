use crate::env::{ClothingKind, ItemKind};

/// Ordered registry of fixed equipment slots.
///
/// Slots are addressed by their position in [`SlotOracle::slots`]. Each slot
/// accepts a single item kind, so a block sitting directly in an equipment
/// inventory occupies the slot whose kind matches its definition.
pub trait SlotOracle: Send + Sync {
    fn slots(&self) -> &[EquipmentSlot];

    fn slot(&self, index: usize) -> Option<&EquipmentSlot> {
        self.slots().get(index)
    }

    /// Position of the slot accepting `kind`, if any.
    fn slot_for(&self, kind: ItemKind) -> Option<usize> {
        self.slots().iter().position(|slot| slot.accepts == kind)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSlot {
    pub image: String,
    pub accepts: ItemKind,
}

impl EquipmentSlot {
    pub fn new(image: impl Into<String>, accepts: ItemKind) -> Self {
        Self {
            image: image.into(),
            accepts,
        }
    }
}

/// Vec-backed [`SlotOracle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotRegistry {
    slots: Vec<EquipmentSlot>,
}

impl SlotRegistry {
    pub fn new(slots: Vec<EquipmentSlot>) -> Self {
        Self { slots }
    }

    /// The eight clothing slots of a player character, head to feet.
    pub fn standard() -> Self {
        let clothing = |image: &str, kind| EquipmentSlot::new(image, ItemKind::Clothing(kind));
        Self::new(vec![
            clothing("hat", ClothingKind::Hat),
            clothing("top_first_layer", ClothingKind::TopFirstLayer),
            clothing("top_second_layer", ClothingKind::TopSecondLayer),
            clothing("kevlar", ClothingKind::Kevlar),
            clothing("hand", ClothingKind::Hand),
            clothing("backpack", ClothingKind::Backpack),
            clothing("bottom", ClothingKind::Bottom),
            clothing("feet", ClothingKind::Feet),
        ])
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl SlotOracle for SlotRegistry {
    fn slots(&self) -> &[EquipmentSlot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::WeaponKind;

    #[test]
    fn standard_registry_order() {
        let registry = SlotRegistry::standard();
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.slot(0).map(|s| s.image.as_str()), Some("hat"));
        assert_eq!(registry.slot_for(ItemKind::Clothing(ClothingKind::Backpack)), Some(5));
        assert_eq!(registry.slot_for(ItemKind::Weapon(WeaponKind::AssaultRifle)), None);
        assert!(registry.slot(8).is_none());
    }
}
