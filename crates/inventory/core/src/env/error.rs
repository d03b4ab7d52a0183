//! Oracle access errors.
//!
//! Errors related to oracle availability and catalog data access.

use crate::error::{EngineError, ErrorSeverity};
use crate::state::ItemDefId;

/// Errors that occur when accessing oracle data.
///
/// Oracle errors mean the catalog or slot registry cannot answer a question
/// the engine has to ask. Definition ids come from trusted data, so these are
/// data-integrity faults rather than illegal moves.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OracleError {
    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// SlotOracle is not available in the environment.
    #[error("SlotOracle not available")]
    SlotsNotAvailable,

    /// Item definition was not found by id.
    #[error("item definition {0} not found")]
    ItemNotFound(ItemDefId),

    /// Equipment slot index is outside the registry.
    #[error("equipment slot {0} not found")]
    SlotNotFound(usize),

    /// Definition failed static validation.
    #[error("item definition {id} is invalid: {reason}")]
    InvalidDefinition { id: ItemDefId, reason: &'static str },
}

impl EngineError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ItemsNotAvailable | SlotsNotAvailable => ErrorSeverity::Fatal,
            ItemNotFound(_) | SlotNotFound(_) | InvalidDefinition { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            SlotsNotAvailable => "ORACLE_SLOTS_NOT_AVAILABLE",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            SlotNotFound(_) => "ORACLE_SLOT_NOT_FOUND",
            InvalidDefinition { .. } => "ORACLE_INVALID_DEFINITION",
        }
    }
}
