//! Lock-guarded access to the authoritative inventory store.
//!
//! Drop checks take the read lock and work on the live store without mutating it.
//! `resolve_move` holds the write lock for the whole validate-apply-commit
//! pipeline, so no reader ever observes a half-applied move.
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use inventory_core::{
    BlockId, EngineConfig, EngineError, InventoryEngine, InventoryIndex, InventoryStore, ItemDefId,
    ItemId, ItemIndex, MoveOutcome, MoveRequest, Scenario, check_invariants, validate_move,
};

use crate::error::{Result, RuntimeError};
use crate::oracle::OracleManager;

pub struct InventoryService {
    store: RwLock<InventoryStore>,
    oracles: OracleManager,
    config: EngineConfig,
}

impl InventoryService {
    /// Wraps `store`, refusing one that already breaks a store invariant.
    pub fn new(
        store: InventoryStore,
        oracles: OracleManager,
        config: EngineConfig,
    ) -> Result<Self> {
        check_invariants(&store, &oracles.as_inventory_env()).map_err(RuntimeError::Invariant)?;

        Ok(Self {
            store: RwLock::new(store),
            oracles,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, InventoryStore>> {
        self.store.read().map_err(|_| RuntimeError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, InventoryStore>> {
        self.store.write().map_err(|_| RuntimeError::LockPoisoned)
    }

    /// Resolves and commits a move. The sole way items change place.
    pub fn resolve_move(&self, request: &MoveRequest) -> Result<MoveOutcome> {
        let mut store = self.write()?;
        let env = self.oracles.as_inventory_env();

        let result =
            InventoryEngine::with_config(&mut *store, self.config.clone()).resolve(env, request);
        match &result {
            Ok(outcome) => tracing::info!(
                scenario = %outcome.scenario,
                from = request.from.inventory().inventory,
                to = request.to.inventory().inventory,
                items = outcome.delta.items.updated.len()
                    + outcome.delta.items.added.len()
                    + outcome.delta.items.removed.len(),
                blocks = outcome.delta.blocks.added.len() + outcome.delta.blocks.removed.len(),
                "move committed"
            ),
            Err(err) if err.is_fault() => tracing::warn!(
                ?request,
                code = err.error_code(),
                severity = err.severity().as_str(),
                "move failed: {err}"
            ),
            Err(err) => tracing::debug!(?request, code = err.error_code(), "move rejected: {err}"),
        }

        Ok(result?)
    }

    /// Checks a move against the current store without applying it.
    pub fn validate_move(&self, request: &MoveRequest) -> Result<Scenario> {
        let store = self.read()?;
        Ok(validate_move(&store, self.oracles.as_inventory_env(), request)?)
    }

    /// Drop-highlight check. Faults and a poisoned lock read as `false` and
    /// are logged.
    pub fn can_swap(&self, request: &MoveRequest) -> bool {
        match self.validate_move(request) {
            Ok(scenario) => {
                tracing::debug!(?request, %scenario, "drop check accepted");
                true
            }
            Err(RuntimeError::Move(err)) if !err.is_fault() => {
                tracing::debug!(?request, code = err.error_code(), "drop check rejected");
                false
            }
            Err(err) => {
                tracing::warn!(?request, code = err.error_code(), "drop check failed: {err}");
                false
            }
        }
    }

    /// Clone of the current store.
    pub fn snapshot(&self) -> Result<InventoryStore> {
        Ok(self.read()?.clone())
    }

    /// Creates an item from the catalog; `placement = None` picks the first
    /// free anchor.
    pub fn spawn_item(
        &self,
        inventory: usize,
        block: usize,
        definition: ItemDefId,
        amount: u16,
        placement: Option<(usize, bool)>,
    ) -> Result<ItemId> {
        let mut store = self.write()?;
        let env = self.oracles.as_inventory_env();
        let id = store.spawn_item(&env, inventory, block, definition, amount, placement)?;
        tracing::info!(%id, %definition, amount, inventory, block, "item spawned");
        Ok(id)
    }

    /// Creates an empty container block in `inventory`.
    pub fn spawn_block(&self, inventory: usize, definition: ItemDefId) -> Result<BlockId> {
        let mut store = self.write()?;
        let env = self.oracles.as_inventory_env();
        let id = store.spawn_block(&env, inventory, definition)?;
        tracing::info!(%id, %definition, inventory, "block spawned");
        Ok(id)
    }

    /// Takes `amount` from a stack. Returns what is left.
    pub fn consume(&self, index: ItemIndex, amount: u16) -> Result<u16> {
        let remaining = self.write()?.consume(index, amount)?;
        tracing::debug!(?index, amount, remaining, "stack consumed");
        Ok(remaining)
    }

    /// Carried weight of an inventory, containers included.
    pub fn inventory_weight(&self, index: InventoryIndex) -> Result<u64> {
        let store = self.read()?;
        Ok(store.inventory(index.inventory)?.weight(self.oracles.items())?)
    }

    /// Re-checks every store invariant on the live store.
    pub fn verify(&self) -> Result<()> {
        let store = self.read()?;
        check_invariants(&store, &self.oracles.as_inventory_env()).map_err(|err| {
            tracing::error!(code = err.error_code(), "store invariant broken: {err}");
            RuntimeError::Invariant(err)
        })
    }
}
