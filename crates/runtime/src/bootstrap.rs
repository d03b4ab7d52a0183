//! Service construction from content files.
use anyhow::Context;
use inventory_content::ContentFactory;
use inventory_core::InventoryStore;

use crate::config::ServiceConfig;
use crate::oracle::{ItemOracleImpl, OracleManager};
use crate::service::InventoryService;

/// Builds a service from the data directory behind `factory`, applying any
/// override set in `overrides`.
pub fn from_content(
    factory: &ContentFactory,
    overrides: &ServiceConfig,
) -> anyhow::Result<InventoryService> {
    let mut config = factory.load_config()?;
    if let Some(verify) = overrides.verify_invariants {
        config.verify_invariants = verify;
    }

    let items = factory.load_items()?;
    let slots = factory.load_slots()?;
    let inventories = factory.load_inventories()?;

    tracing::info!(
        data_dir = %factory.data_dir().display(),
        items = items.len(),
        slots = slots.len(),
        inventories = inventories.len(),
        verify_invariants = config.verify_invariants,
        "content loaded"
    );

    let oracles = OracleManager::new(ItemOracleImpl::from_definitions(items), slots);
    InventoryService::new(InventoryStore::new(inventories), oracles, config).with_context(|| {
        format!(
            "starting inventories in {} are inconsistent",
            factory.data_dir().display()
        )
    })
}

/// Builds a service from the process environment.
///
/// See [`ServiceConfig::from_env`] for the recognised variables.
pub fn from_env() -> anyhow::Result<InventoryService> {
    let overrides = ServiceConfig::from_env();
    let factory = match &overrides.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    from_content(&factory, &overrides)
}
