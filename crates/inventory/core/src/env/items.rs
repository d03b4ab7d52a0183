use core::fmt;

use crate::config::EngineConfig;
use crate::env::OracleError;
use crate::state::ItemDefId;

/// Read-only item catalog.
///
/// Definitions are assumed to come from trusted data; an unknown id is a data
/// integrity fault, never a user error.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemDefId) -> Option<ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;

    /// Failing variant of [`ItemOracle::definition`].
    fn lookup(&self, id: ItemDefId) -> Result<ItemDefinition, OracleError> {
        self.definition(id).ok_or(OracleError::ItemNotFound(id))
    }
}

/// Immutable physical and logical properties of an item.
///
/// # Containers
///
/// Only definitions carrying a [`GridCapacity`] can host items when used as a
/// block (backpacks, vests, coats). Every other definition projects onto a
/// zero-sized grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemDefId,
    pub name: String,
    pub image: String,
    pub width: u16,
    pub height: u16,
    /// Weight of a single unit.
    pub weight: u32,
    /// Maximum stack size, at least 1.
    pub limit: u16,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub capacity: Option<GridCapacity>,
}

impl ItemDefinition {
    pub fn new(
        id: ItemDefId,
        name: impl Into<String>,
        width: u16,
        height: u16,
        kind: ItemKind,
    ) -> Self {
        let name = name.into();
        Self {
            id,
            image: name.clone(),
            name,
            width,
            height,
            weight: 0,
            limit: 1,
            kind,
            capacity: None,
        }
    }

    pub fn with_limit(mut self, limit: u16) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_capacity(mut self, width: u16, height: u16) -> Self {
        self.capacity = Some(GridCapacity::new(width, height));
        self
    }

    /// Internal grid capacity, zero-sized for non-containers.
    pub fn grid_capacity(&self) -> GridCapacity {
        self.capacity.unwrap_or_default()
    }

    pub fn is_container(&self) -> bool {
        self.capacity.is_some_and(|cap| cap.cells() > 0)
    }

    /// Checks static sanity of a definition before it enters a catalog.
    pub fn validate(&self) -> Result<(), OracleError> {
        let invalid = |reason: &'static str| OracleError::InvalidDefinition { id: self.id, reason };

        if self.width == 0 || self.height == 0 {
            return Err(invalid("footprint must be at least 1x1"));
        }
        if self.limit == 0 || self.limit > EngineConfig::MAX_STACK_LIMIT {
            return Err(invalid("stack limit out of range"));
        }
        let cap = self.grid_capacity();
        if cap.width > EngineConfig::MAX_GRID_WIDTH || cap.height > EngineConfig::MAX_GRID_HEIGHT {
            return Err(invalid("grid capacity exceeds engine limits"));
        }
        Ok(())
    }
}

/// Internal grid of a container item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCapacity {
    pub width: u16,
    pub height: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: u32,
}

impl GridCapacity {
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            weight: 0,
        }
    }

    pub const fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Item category. Equipment slots accept exactly one kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    #[default]
    General,
    Clothing(ClothingKind),
    Weapon(WeaponKind),
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::General => f.write_str("general"),
            ItemKind::Clothing(kind) => write!(f, "clothing:{kind}"),
            ItemKind::Weapon(kind) => write!(f, "weapon:{kind}"),
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ClothingKind {
    Hat,
    TopFirstLayer,
    TopSecondLayer,
    Kevlar,
    Hand,
    Backpack,
    Bottom,
    Feet,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponKind {
    Melee,
    Handgun,
    SubmachineGun,
    Shotgun,
    AssaultRifle,
    LightMachineGun,
    SniperRifle,
    HeavyWeapon,
    Throwable,
    Miscellaneous,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_is_snake_case() {
        let coat = ItemKind::Clothing(ClothingKind::TopFirstLayer);
        assert_eq!(coat.to_string(), "clothing:top_first_layer");
        assert_eq!(ItemKind::Weapon(WeaponKind::AssaultRifle).to_string(), "weapon:assault_rifle");
        assert_eq!("backpack".parse::<ClothingKind>(), Ok(ClothingKind::Backpack));
    }

    #[test]
    fn validate_rejects_degenerate_definitions() {
        let flat = ItemDefinition::new(ItemDefId(1), "flat", 0, 2, ItemKind::General);
        assert!(matches!(flat.validate(), Err(OracleError::InvalidDefinition { .. })));

        let unstackable =
            ItemDefinition::new(ItemDefId(2), "x", 1, 1, ItemKind::General).with_limit(0);
        assert!(unstackable.validate().is_err());

        let huge = ItemDefinition::new(ItemDefId(3), "crate", 2, 2, ItemKind::General)
            .with_capacity(EngineConfig::MAX_GRID_WIDTH + 1, 1);
        assert!(huge.validate().is_err());

        let kind = ItemKind::Clothing(ClothingKind::Backpack);
        let backpack = ItemDefinition::new(ItemDefId(4), "pack", 5, 5, kind).with_capacity(10, 10);
        assert!(backpack.validate().is_ok());
        assert!(backpack.is_container());
        assert_eq!(backpack.grid_capacity().cells(), 100);
    }
}
