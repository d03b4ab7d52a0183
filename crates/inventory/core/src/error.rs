//! Common error infrastructure for inventory-core.
//!
//! This module provides shared types and traits used across all error types in
//! the crate. Domain-specific errors (e.g., `Rejection`, `StateError`) are
//! defined next to the operations that produce them.
//!
//! # Design Principles
//!
//! - **Illegal moves are values**: a placement that breaks a spatial or category
//!   rule is an expected outcome of user interaction and is classified
//!   `Recoverable` or `Validation`.
//! - **Bad references are faults**: a locator or definition id that does not
//!   resolve means upstream data is inconsistent, classified `Internal`/`Fatal`.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: The drop was illegal here but another target may work
/// - **Validation**: The request itself is malformed for its shape
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: State invariants are broken, cannot continue safely
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with a different destination.
    ///
    /// Examples: footprint collides, cell occupied, slot already worn
    Recoverable,

    /// Validation error - invalid request, should not retry without changes.
    ///
    /// Examples: slot-to-slot transfer, no-op move
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: locator out of range, unknown item definition
    /// These indicate bugs and should be reported, not shown as "can't place".
    Internal,

    /// Fatal error - inventory state corrupted, cannot continue.
    ///
    /// Examples: overlap detected after a commit, missing catalog
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Shared classification for every error enum in the engine and runtime.
///
/// Severity follows recoverability: a refused drop is `Recoverable` even when
/// it moves nothing, while an unresolvable id is `Internal` however harmless.
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier logged alongside the message, e.g. `MOVE_NO_OP`.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Recoverable.is_internal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
