//! Request classification and the transition pipeline.

use super::errors::{MoveError, Rejection};
use super::moves::{GridToSlot, MoveItem, MoveTransition, Replace, SlotToGrid, Swap};
use super::outcome::Scenario;
use super::MoveRequest;
use crate::config::EngineConfig;
use crate::env::{InventoryEnv, OracleError};
use crate::grid::build_grid;
use crate::state::{Block, BlockIndex, BlockRef, InventoryStore, ItemIndex, Locator, StateError};

/// A request resolved to ids and routed to its scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum MovePlan {
    SlotToGrid(SlotToGrid),
    GridToSlot(GridToSlot),
    Replace(Replace),
    Move(MoveItem),
    Swap(Swap),
}

impl MovePlan {
    fn transition(&self) -> &dyn MoveTransition {
        match self {
            MovePlan::SlotToGrid(transition) => transition,
            MovePlan::GridToSlot(transition) => transition,
            MovePlan::Replace(transition) => transition,
            MovePlan::Move(transition) => transition,
            MovePlan::Swap(transition) => transition,
        }
    }

    pub(super) fn scenario(&self) -> Scenario {
        self.transition().scenario()
    }
}

/// Classifies a request purely by the shape of its two locators.
///
/// For grid to grid moves the displaced item is whichever one covers the
/// requested cell once the mover's own footprint is lifted.
pub(super) fn classify(
    store: &InventoryStore,
    env: &InventoryEnv<'_>,
    request: &MoveRequest,
) -> Result<MovePlan, MoveError> {
    match (request.from, request.to) {
        (Locator::Block(_), Locator::Block(_)) => Err(Rejection::SlotToSlot.into()),
        (Locator::Block(from), Locator::Item(to)) => {
            let block = resolve_block(store, env, from)?.id;
            let target = store.stored_block(to.inventory, to.block)?.id;
            Ok(MovePlan::SlotToGrid(SlotToGrid {
                block,
                target,
                slot: request.slot,
                rotated: request.rotated,
            }))
        }
        (Locator::Item(from), Locator::Block(to)) => {
            let source = store.stored_block(from.inventory, from.block)?.id;
            let item = store.item(from)?.id;
            Ok(MovePlan::GridToSlot(GridToSlot {
                source,
                item,
                inventory: to.inventory,
                target: to.block,
            }))
        }
        (Locator::Item(from), Locator::Item(to)) => {
            classify_grid_move(store, env, request, from, to)
        }
    }
}

fn classify_grid_move(
    store: &InventoryStore,
    env: &InventoryEnv<'_>,
    request: &MoveRequest,
    from: ItemIndex,
    to: ItemIndex,
) -> Result<MovePlan, MoveError> {
    let source = store.stored_block(from.inventory, from.block)?;
    let mover = store.item(from)?;
    let target = store.stored_block(to.inventory, to.block)?;
    let (slot, rotated) = (request.slot, request.rotated);

    if source.id == target.id && mover.slot == slot && mover.rotated == rotated {
        return Err(Rejection::NoOp.into());
    }
    if from == to {
        return Ok(MovePlan::Replace(Replace {
            block: source.id,
            item: mover.id,
            slot,
            rotated,
        }));
    }

    let grid = build_grid(target, env.items()?, &[mover.id])?;
    match grid.occupant_at(slot) {
        None => Ok(MovePlan::Move(MoveItem {
            source: source.id,
            target: target.id,
            item: mover.id,
            slot,
            rotated,
        })),
        Some(occupant) => Ok(MovePlan::Swap(Swap {
            source: source.id,
            item: mover.id,
            target: target.id,
            occupant,
            rotated,
        })),
    }
}

/// Resolves a block-level locator, following equipment slots to the block
/// currently worn there.
fn resolve_block<'s>(
    store: &'s InventoryStore,
    env: &InventoryEnv<'_>,
    index: BlockIndex,
) -> Result<&'s Block, MoveError> {
    match index.block {
        BlockRef::Stored(position) => Ok(store.stored_block(index.inventory, position)?),
        BlockRef::Equipment(slot) => {
            let inventory = store.inventory(index.inventory)?;
            if !inventory.kind.has_equipment() {
                return Err(Rejection::NotEquipmentSlot.into());
            }
            let accepts = env
                .slots()?
                .slot(slot)
                .ok_or(OracleError::SlotNotFound(slot))?
                .accepts;
            let position = inventory
                .block_accepting(env.items()?, accepts)?
                .ok_or(StateError::EquipmentSlotEmpty {
                    inventory: index.inventory,
                    slot,
                })?;
            Ok(&inventory.blocks[position])
        }
    }
}

/// Runs the read-only phase of the pipeline.
pub(super) fn validate(
    store: &InventoryStore,
    env: &InventoryEnv<'_>,
    request: &MoveRequest,
) -> Result<MovePlan, MoveError> {
    let plan = classify(store, env, request)?;
    plan.transition().pre_validate(store, env)?;
    Ok(plan)
}

/// Executes a request through the pipeline on a copy of `store`.
///
/// Phases:
/// 1. `pre_validate` - check every rule against the untouched store
/// 2. `apply` - mutate a working copy
/// 3. `post_validate` - re-check store invariants, when enabled
///
/// Returns the scenario and the working copy; the caller commits it.
pub(super) fn execute_transition(
    store: &InventoryStore,
    env: &InventoryEnv<'_>,
    request: &MoveRequest,
    config: &EngineConfig,
) -> Result<(Scenario, InventoryStore), MoveError> {
    let plan = validate(store, env, request)?;
    let transition = plan.transition();

    let mut working = store.clone();
    transition.apply(&mut working, env)?;

    if config.verify_invariants {
        transition.post_validate(&working, env)?;
    }

    Ok((transition.scenario(), working))
}
