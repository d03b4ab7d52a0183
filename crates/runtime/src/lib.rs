//! Runtime façade over the inventory engine.
//!
//! This crate wires the catalog and slot oracles, the authoritative store and
//! the engine configuration into a single [`InventoryService`] that callers can
//! share between threads.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the lock-guarded store and the move entry points
//! - [`oracle`] provides in-memory catalog adapters reused by other crates
//! - [`bootstrap`] builds a service from data files
//! - [`config`] and [`logging`] cover process-level setup
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;
pub mod oracle;
pub mod service;

pub use config::ServiceConfig;
pub use error::{Result, RuntimeError};
pub use oracle::{CachedItemOracle, ItemOracleImpl, OracleManager};
pub use service::InventoryService;
