//! Data-driven inventory content and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Item catalogs (data-driven via RON)
//! - Equipment slot registries (data-driven via RON)
//! - Starting inventories (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! Catalog and slot content is consumed by runtime oracles and never appears in
//! inventory state.
//!
//! All loaders use inventory-core types directly with serde for RON/TOML
//! deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, InventoryLoader, ItemCatalog, ItemLoader, LoadResult, SlotLoader,
};
