//! Core domain logic for MediaShelf.
//! This crate is the single source of truth for the catalogue state and
//! its persistence.

pub mod codec;
pub mod db;
pub mod id;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId, ItemValidationError};
pub use model::shelf::{Shelf, ShelfIcon, ShelfId, ShelfValidationError};
pub use query::{filter_items, sort_items, ItemSort};
pub use service::catalog_service::{CatalogService, CommandError, CommandResult, ItemDraft};
pub use service::transfer::{export_shelf_items, import_items, ImportError, ImportOutcome};
pub use storage::{MemoryStorage, SqliteKvStorage, StorageBackend, StorageError};
pub use store::{ChangeEvent, MediaStore, StoreError, StoreResult, SubscriptionId};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
