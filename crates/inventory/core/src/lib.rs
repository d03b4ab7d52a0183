//! Grid inventory placement rules and data types.
//!
//! `inventory-core` defines the canonical rules for placing, moving and
//! swapping items between container grids and equipment slots, and exposes
//! pure APIs reused by the runtime and content tooling. All moves flow through
//! [`engine::InventoryEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod grid;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::EngineConfig;
pub use engine::{
    InventoryEngine, MoveError, MoveOutcome, MoveRequest, MoveTransition, Rejection, Scenario,
    can_swap, validate_move,
};
pub use env::{
    ClothingKind, Env, EquipmentSlot, GridCapacity, InventoryEnv, ItemDefinition, ItemKind,
    ItemOracle, OracleError, SlotOracle, SlotRegistry, WeaponKind,
};
pub use error::{EngineError, ErrorSeverity};
pub use grid::{Footprint, Grid, PlacementError, build_grid};
pub use state::{
    Block, BlockId, BlockIndex, BlockRef, InvariantViolation, Inventory, InventoryIndex,
    InventoryKind, InventoryStore, Item, ItemDefId, ItemId, ItemIndex, Locator, SpawnError,
    StateDelta, StateError, check_invariants,
};
