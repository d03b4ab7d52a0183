//! State management errors.
//!
//! Errors related to locator resolution, id allocation and the store's checked
//! spawn/consume operations.

use crate::env::{ItemKind, OracleError};
use crate::error::{EngineError, ErrorSeverity};
use crate::grid::PlacementError;
use crate::state::{BlockId, ItemDefId, ItemId, ItemIndex};

/// A locator or id that does not resolve against the store.
///
/// Locators come from the presentation layer, which reads them off the same
/// store; a miss means the two have drifted apart.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("inventory {inventory} not found")]
    InventoryNotFound { inventory: usize },

    #[error("block {block} not found in inventory {inventory}")]
    BlockNotFound { inventory: usize, block: usize },

    #[error("item {index:?} not found")]
    ItemNotFound { index: ItemIndex },

    #[error("equipment slot {slot} of inventory {inventory} is empty")]
    EquipmentSlotEmpty { inventory: usize, slot: usize },

    #[error("{0} is not in the store")]
    UnknownBlock(BlockId),

    #[error("{item} is not in {block}")]
    UnknownItem { block: BlockId, item: ItemId },

    #[error("id space exhausted")]
    IdOverflow,
}

impl EngineError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::IdOverflow => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::InventoryNotFound { .. } => "STATE_INVENTORY_NOT_FOUND",
            StateError::BlockNotFound { .. } => "STATE_BLOCK_NOT_FOUND",
            StateError::ItemNotFound { .. } => "STATE_ITEM_NOT_FOUND",
            StateError::EquipmentSlotEmpty { .. } => "STATE_EQUIPMENT_SLOT_EMPTY",
            StateError::UnknownBlock(_) => "STATE_UNKNOWN_BLOCK",
            StateError::UnknownItem { .. } => "STATE_UNKNOWN_ITEM",
            StateError::IdOverflow => "STATE_ID_OVERFLOW",
        }
    }
}

/// Errors from catalog-driven creation and consumption of items and blocks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SpawnError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("amount {amount} outside 1..={limit}")]
    InvalidAmount { amount: u16, limit: u16 },

    #[error("cannot take {requested} from {item}, only {available} left")]
    InsufficientAmount {
        item: ItemId,
        available: u16,
        requested: u16,
    },

    #[error("placement rejected: {0}")]
    Placement(#[from] PlacementError),

    #[error("no free space for {definition} in {block}")]
    NoFreeSpace { block: BlockId, definition: ItemDefId },

    #[error("no equipment slot accepts {kind}")]
    NoEquipmentSlot { kind: ItemKind },

    #[error("equipment slot {slot} is already worn by {block}")]
    SlotOccupied { slot: usize, block: BlockId },
}

impl EngineError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SpawnError::State(err) => err.severity(),
            SpawnError::Oracle(err) => err.severity(),
            SpawnError::InvalidAmount { .. } | SpawnError::InsufficientAmount { .. } => {
                ErrorSeverity::Validation
            }
            SpawnError::Placement(_)
            | SpawnError::NoFreeSpace { .. }
            | SpawnError::NoEquipmentSlot { .. }
            | SpawnError::SlotOccupied { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SpawnError::State(err) => err.error_code(),
            SpawnError::Oracle(err) => err.error_code(),
            SpawnError::InvalidAmount { .. } => "SPAWN_INVALID_AMOUNT",
            SpawnError::InsufficientAmount { .. } => "SPAWN_INSUFFICIENT_AMOUNT",
            SpawnError::Placement(_) => "SPAWN_PLACEMENT",
            SpawnError::NoFreeSpace { .. } => "SPAWN_NO_FREE_SPACE",
            SpawnError::NoEquipmentSlot { .. } => "SPAWN_NO_EQUIPMENT_SLOT",
            SpawnError::SlotOccupied { .. } => "SPAWN_SLOT_OCCUPIED",
        }
    }
}
