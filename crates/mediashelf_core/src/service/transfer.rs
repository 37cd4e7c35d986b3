//! Per-shelf import and export of items as JSON arrays.
//!
//! # Responsibility
//! - Export one shelf's items in the wire item shape, indented for sharing.
//! - Import a JSON array of items into a target shelf with per-element
//!   fault isolation.
//!
//! # Invariants
//! - Imported elements always receive a fresh id and the target shelf's id;
//!   whatever id or shelf reference the payload carried is discarded.
//! - A malformed element skips only itself; a non-array payload fails the
//!   whole import.

use crate::codec::{CodecResult, ItemRecord};
use crate::id::generate_id;
use crate::model::item::Item;
use crate::model::shelf::ShelfId;
use crate::store::{MediaStore, StoreError};
use crate::storage::StorageBackend;
use log::info;
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome counts reported back to the user after an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub imported: usize,
    pub skipped: usize,
}

/// Import failure for the payload as a whole.
#[derive(Debug)]
pub enum ImportError {
    /// The top-level payload is not a JSON array.
    InvalidPayload(serde_json::Error),
    Store(StoreError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPayload(err) => write!(f, "import payload is not a JSON array: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPayload(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ImportError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One importable element. Only the title is required; ids and shelf
/// references in the payload are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemImportRecord {
    title: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    release_year: Option<i32>,
    #[serde(default)]
    notes: Option<String>,
}

/// Serializes one shelf's items to an indented JSON array in wire shape.
pub fn export_shelf_items<B: StorageBackend>(
    store: &MediaStore<B>,
    shelf_id: &str,
) -> CodecResult<String> {
    let records: Vec<ItemRecord> = store
        .items_for_shelf(shelf_id)
        .iter()
        .map(ItemRecord::from)
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Imports a JSON array of items into `shelf_id`.
///
/// Elements are decoded independently; ones that fail to decode or carry a
/// blank title are skipped and counted. Survivors get fresh ids and the
/// target shelf id, then land in the store through one `add_items` step.
pub fn import_items<B: StorageBackend>(
    store: &mut MediaStore<B>,
    shelf_id: &ShelfId,
    payload: &str,
) -> Result<ImportOutcome, ImportError> {
    let elements: Vec<Value> =
        serde_json::from_str(payload).map_err(ImportError::InvalidPayload)?;

    let mut outcome = ImportOutcome::default();
    let mut accepted = Vec::new();

    for element in elements {
        let record = match serde_json::from_value::<ItemImportRecord>(element) {
            Ok(record) => record,
            Err(_) => {
                outcome.skipped += 1;
                continue;
            }
        };
        if record.title.trim().is_empty() {
            outcome.skipped += 1;
            continue;
        }

        accepted.push(Item {
            id: generate_id(),
            title: record.title,
            shelf_id: shelf_id.clone(),
            author: record.author,
            release_year: record.release_year,
            notes: record.notes,
        });
    }

    outcome.imported = accepted.len();
    store.add_items(accepted)?;

    info!(
        "event=items_import module=transfer status=ok shelf_id={shelf_id} imported={} skipped={}",
        outcome.imported, outcome.skipped
    );
    Ok(outcome)
}
