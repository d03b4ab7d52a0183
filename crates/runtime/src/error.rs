//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine, the store and lock handling so clients can
//! bubble them up with consistent context.
use inventory_core::{
    EngineError, ErrorSeverity, InvariantViolation, MoveError, OracleError, Rejection, SpawnError,
    StateError,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("inventory store lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("store invariant broken: {0}")]
    Invariant(#[source] InvariantViolation),
}

impl RuntimeError {
    /// The rule that refused a move, if this is an ordinary rejection.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            RuntimeError::Move(err) => err.rejection(),
            _ => None,
        }
    }
}

impl EngineError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::LockPoisoned | RuntimeError::Invariant(_) => ErrorSeverity::Fatal,
            RuntimeError::Move(err) => err.severity(),
            RuntimeError::Spawn(err) => err.severity(),
            RuntimeError::State(err) => err.severity(),
            RuntimeError::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::LockPoisoned => "RUNTIME_LOCK_POISONED",
            RuntimeError::Invariant(err) => err.error_code(),
            RuntimeError::Move(err) => err.error_code(),
            RuntimeError::Spawn(err) => err.error_code(),
            RuntimeError::State(err) => err.error_code(),
            RuntimeError::Oracle(err) => err.error_code(),
        }
    }
}
