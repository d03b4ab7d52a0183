//! Move and swap resolution.
//!
//! The [`InventoryEngine`] is the only writer of an [`InventoryStore`]. Every
//! drop gesture becomes a [`MoveRequest`], is classified by the shape of its
//! locators, validated against the untouched store, applied to a working copy
//! and committed by replacing the store in one step. A rejected request leaves
//! the store exactly as it was.

mod errors;
mod moves;
mod outcome;
mod transition;

pub use errors::{MoveError, Rejection};
pub use moves::{GridToSlot, MoveItem, MoveTransition, Replace, SlotToGrid, Swap};
pub use outcome::{MoveOutcome, Scenario};

use crate::config::EngineConfig;
use crate::env::InventoryEnv;
use crate::state::{InventoryStore, Locator, StateDelta};

/// A drop of `from` onto `to`.
///
/// `slot` and `rotated` give the anchor cell and orientation in the
/// destination grid; they are ignored when the destination is a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRequest {
    pub from: Locator,
    pub to: Locator,
    pub slot: usize,
    pub rotated: bool,
}

impl MoveRequest {
    pub fn new(
        from: impl Into<Locator>,
        to: impl Into<Locator>,
        slot: usize,
        rotated: bool,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            slot,
            rotated,
        }
    }
}

/// Inventory engine that validates and commits moves.
///
/// All mutations flow through the three-phase pipeline:
/// pre_validate → apply → post_validate
pub struct InventoryEngine<'a> {
    store: &'a mut InventoryStore,
    config: EngineConfig,
}

impl<'a> InventoryEngine<'a> {
    /// Creates an engine with the default configuration.
    pub fn new(store: &'a mut InventoryStore) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: &'a mut InventoryStore, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &InventoryStore {
        self.store
    }

    /// Resolves and commits a move.
    ///
    /// Returns the scenario the request was resolved under along with the
    /// store delta. On any error the store is unchanged.
    pub fn resolve(
        &mut self,
        env: InventoryEnv<'_>,
        request: &MoveRequest,
    ) -> Result<MoveOutcome, MoveError> {
        let (scenario, working) =
            transition::execute_transition(self.store, &env, request, &self.config)?;

        let delta = StateDelta::from_states(self.store, &working);
        *self.store = working;

        Ok(MoveOutcome { scenario, delta })
    }
}

/// Checks a move without applying it.
///
/// Returns the scenario a later [`InventoryEngine::resolve`] would commit
/// under, or the reason it would fail.
pub fn validate_move(
    store: &InventoryStore,
    env: InventoryEnv<'_>,
    request: &MoveRequest,
) -> Result<Scenario, MoveError> {
    let plan = transition::validate(store, &env, request)?;
    Ok(plan.scenario())
}

/// Drop-highlight check: true when `request` would be accepted.
///
/// Faults count as "cannot drop here"; use [`validate_move`] to tell them
/// apart from rule rejections.
pub fn can_swap(store: &InventoryStore, env: InventoryEnv<'_>, request: &MoveRequest) -> bool {
    validate_move(store, env, request).is_ok()
}
