//! Error types for the move pipeline.

use crate::env::{ItemKind, OracleError};
use crate::error::{EngineError, ErrorSeverity};
use crate::grid::PlacementError;
use crate::state::{BlockId, InvariantViolation, ItemId, StateError};

/// A move the rules do not allow.
///
/// Rejections are the expected answer to an ordinary drag gesture; the store is
/// left untouched and the caller may try another target.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rejection {
    #[error("item dropped where it already is")]
    NoOp,

    #[error("moving a block onto another block is not supported")]
    SlotToSlot,

    #[error(transparent)]
    Placement(PlacementError),

    #[error("cell {slot} is already taken by {occupant}")]
    CellOccupied { slot: usize, occupant: ItemId },

    #[error("{block} still holds {items} item(s)")]
    ContainerNotEmpty { block: BlockId, items: usize },

    #[error("{block} cannot be dropped into its own grid")]
    SameBlock { block: BlockId },

    #[error("target is not an equipment slot")]
    NotEquipmentSlot,

    #[error("slot accepts {expected}, item is {found}")]
    CategoryMismatch { expected: ItemKind, found: ItemKind },

    #[error("equipment slot {slot} is already worn by {block}")]
    SlotOccupied { slot: usize, block: BlockId },

    #[error("a stack of {amount} cannot be worn")]
    StackedItem { amount: u16 },

    #[error("swap does not fit for {item}: {reason}")]
    SwapDoesNotFit { item: ItemId, reason: PlacementError },
}

impl EngineError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Rejection::NoOp
            | Rejection::SlotToSlot
            | Rejection::NotEquipmentSlot
            | Rejection::StackedItem { .. } => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Rejection::NoOp => "MOVE_NO_OP",
            Rejection::SlotToSlot => "MOVE_SLOT_TO_SLOT",
            Rejection::Placement(PlacementError::TooLarge { .. }) => "MOVE_TOO_LARGE",
            Rejection::Placement(PlacementError::OutOfBounds { .. }) => "MOVE_OUT_OF_BOUNDS",
            Rejection::Placement(PlacementError::Collision { .. }) => "MOVE_COLLISION",
            Rejection::CellOccupied { .. } => "MOVE_CELL_OCCUPIED",
            Rejection::ContainerNotEmpty { .. } => "MOVE_CONTAINER_NOT_EMPTY",
            Rejection::SameBlock { .. } => "MOVE_SAME_BLOCK",
            Rejection::NotEquipmentSlot => "MOVE_NOT_EQUIPMENT_SLOT",
            Rejection::CategoryMismatch { .. } => "MOVE_CATEGORY_MISMATCH",
            Rejection::SlotOccupied { .. } => "MOVE_SLOT_OCCUPIED",
            Rejection::StackedItem { .. } => "MOVE_STACKED_ITEM",
            Rejection::SwapDoesNotFit { .. } => "MOVE_SWAP_DOES_NOT_FIT",
        }
    }
}

impl From<PlacementError> for Rejection {
    fn from(error: PlacementError) -> Self {
        Rejection::Placement(error)
    }
}

/// Errors surfaced while resolving a move through the engine.
///
/// Only [`MoveError::Rejected`] is a user-facing outcome. The other variants
/// mean the request or the store disagrees with the catalog and should be
/// reported as a bug.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MoveError {
    #[error("move rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("state fault: {0}")]
    State(#[from] StateError),

    #[error("catalog fault: {0}")]
    Oracle(#[from] OracleError),

    #[error("post_validate failed: {0}")]
    Invariant(InvariantViolation),
}

impl MoveError {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            MoveError::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }

    /// True for data-integrity faults, as opposed to rule rejections.
    pub fn is_fault(&self) -> bool {
        !matches!(self, MoveError::Rejected(_))
    }
}

impl From<PlacementError> for MoveError {
    fn from(error: PlacementError) -> Self {
        MoveError::Rejected(Rejection::Placement(error))
    }
}

impl EngineError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::Rejected(err) => err.severity(),
            MoveError::State(err) => err.severity(),
            MoveError::Oracle(err) => err.severity(),
            MoveError::Invariant(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::Rejected(err) => err.error_code(),
            MoveError::State(err) => err.error_code(),
            MoveError::Oracle(err) => err.error_code(),
            MoveError::Invariant(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_and_faults_are_told_apart() {
        let rejected = MoveError::from(Rejection::SlotToSlot);
        assert!(!rejected.is_fault());
        assert_eq!(rejected.rejection(), Some(&Rejection::SlotToSlot));
        assert_eq!(rejected.severity(), ErrorSeverity::Validation);

        let fault = MoveError::from(StateError::InventoryNotFound { inventory: 4 });
        assert!(fault.is_fault());
        assert!(fault.severity().is_internal());
        assert_eq!(fault.error_code(), "STATE_INVENTORY_NOT_FOUND");
    }

    #[test]
    fn placement_errors_become_recoverable_rejections() {
        let err = MoveError::from(PlacementError::OutOfBounds { slot: 3 });
        assert_eq!(err.error_code(), "MOVE_OUT_OF_BOUNDS");
        assert!(err.severity().is_recoverable());
    }
}
