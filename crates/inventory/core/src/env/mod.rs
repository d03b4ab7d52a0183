//! Traits describing read-only inventory data.
//!
//! Oracles expose the item catalog and the equipment slot registry. The
//! [`Env`] aggregate bundles them so the engine can access everything it needs
//! without hard coupling to concrete implementations.
mod error;
mod items;
mod slots;

pub use error::OracleError;
pub use items::{ClothingKind, GridCapacity, ItemDefinition, ItemKind, ItemOracle, WeaponKind};
pub use slots::{EquipmentSlot, SlotOracle, SlotRegistry};

/// Aggregates read-only oracles required by the grid builder and resolver.
#[derive(Debug)]
pub struct Env<'a, I, S>
where
    I: ItemOracle + ?Sized,
    S: SlotOracle + ?Sized,
{
    items: Option<&'a I>,
    slots: Option<&'a S>,
}

impl<I, S> Clone for Env<'_, I, S>
where
    I: ItemOracle + ?Sized,
    S: SlotOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, S> Copy for Env<'_, I, S>
where
    I: ItemOracle + ?Sized,
    S: SlotOracle + ?Sized,
{
}

pub type InventoryEnv<'a> = Env<'a, dyn ItemOracle + 'a, dyn SlotOracle + 'a>;

impl<'a, I, S> Env<'a, I, S>
where
    I: ItemOracle + ?Sized,
    S: SlotOracle + ?Sized,
{
    pub fn new(items: Option<&'a I>, slots: Option<&'a S>) -> Self {
        Self { items, slots }
    }

    pub fn with_all(items: &'a I, slots: &'a S) -> Self {
        Self::new(Some(items), Some(slots))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            slots: None,
        }
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the SlotOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SlotsNotAvailable` if no slot oracle was provided.
    pub fn slots(&self) -> Result<&'a S, OracleError> {
        self.slots.ok_or(OracleError::SlotsNotAvailable)
    }

    /// Shorthand for a catalog lookup that fails on unknown ids.
    pub fn definition(&self, id: crate::state::ItemDefId) -> Result<ItemDefinition, OracleError> {
        self.items()?.lookup(id)
    }
}

impl<'a, I, S> Env<'a, I, S>
where
    I: ItemOracle + 'a,
    S: SlotOracle + 'a,
{
    /// Converts this environment into a trait-object based `InventoryEnv`.
    pub fn into_inventory_env(self) -> InventoryEnv<'a> {
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let slots: Option<&'a dyn SlotOracle> = self.slots.map(|slots| slots as _);
        Env::new(items, slots)
    }
}
