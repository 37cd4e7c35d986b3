//! Blob codec for the persisted catalogue snapshot.
//!
//! # Responsibility
//! - Map the in-memory (shelves, items) pair to and from the single JSON
//!   blob stored under [`crate::storage::COLLECTION_KEY`].
//! - Keep wire field names stable across app versions.
//!
//! # Invariants
//! - Encoding well-formed state never fails in practice; errors are still
//!   propagated rather than swallowed.
//! - Decoding isolates faults per entity: a malformed element is skipped,
//!   the rest of the snapshot survives.
//!
//! Wire shape:
//! `{"mediaTypes": [{id, name, iconCodePoint, iconFontFamily}],
//!   "mediaItems": [{id, title, notes, mediaTypeId, author, releaseYear}]}`

use crate::model::item::Item;
use crate::model::shelf::{Shelf, ShelfIcon};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, CodecError>;

/// Codec failure for the blob envelope.
///
/// Per-entity failures never surface here; they are counted on
/// [`DecodedState`] instead.
#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed snapshot blob: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Wire record for one shelf. The icon is flattened into two scalar fields
/// so the blob stays a flat mapping of primitives.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfRecord {
    pub id: String,
    pub name: String,
    pub icon_code_point: u32,
    #[serde(default)]
    pub icon_font_family: Option<String>,
}

impl From<&Shelf> for ShelfRecord {
    fn from(shelf: &Shelf) -> Self {
        Self {
            id: shelf.id.clone(),
            name: shelf.name.clone(),
            icon_code_point: shelf.icon.code_point,
            icon_font_family: shelf.icon.font_family.clone(),
        }
    }
}

impl From<ShelfRecord> for Shelf {
    fn from(record: ShelfRecord) -> Self {
        Shelf {
            id: record.id,
            name: record.name,
            icon: ShelfIcon::new(record.icon_code_point, record.icon_font_family),
        }
    }
}

/// Wire record for one item.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub media_type_id: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            notes: item.notes.clone(),
            media_type_id: item.shelf_id.clone(),
            author: item.author.clone(),
            release_year: item.release_year,
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item {
            id: record.id,
            title: record.title,
            shelf_id: record.media_type_id,
            author: record.author,
            release_year: record.release_year,
            notes: record.notes,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotOut {
    media_types: Vec<ShelfRecord>,
    media_items: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotIn {
    #[serde(default)]
    media_types: Vec<Value>,
    #[serde(default)]
    media_items: Vec<Value>,
}

/// Decode output with per-entity skip accounting.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DecodedState {
    pub shelves: Vec<Shelf>,
    pub items: Vec<Item>,
    pub skipped_shelves: usize,
    pub skipped_items: usize,
}

/// Serializes the full catalogue state to the blob text.
pub fn encode(shelves: &[Shelf], items: &[Item]) -> CodecResult<String> {
    let snapshot = SnapshotOut {
        media_types: shelves.iter().map(ShelfRecord::from).collect(),
        media_items: items.iter().map(ItemRecord::from).collect(),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Parses a blob back into catalogue state.
///
/// The envelope must parse as a whole; inside it each entity is decoded
/// independently and malformed ones are skipped with a warn log.
pub fn decode(blob: &str) -> CodecResult<DecodedState> {
    let snapshot: SnapshotIn = serde_json::from_str(blob)?;
    let mut state = DecodedState::default();

    for value in snapshot.media_types {
        match serde_json::from_value::<ShelfRecord>(value) {
            Ok(record) => state.shelves.push(record.into()),
            Err(err) => {
                state.skipped_shelves += 1;
                warn!("event=snapshot_decode module=codec status=skip entity=shelf error={err}");
            }
        }
    }

    for value in snapshot.media_items {
        match serde_json::from_value::<ItemRecord>(value) {
            Ok(record) => state.items.push(record.into()),
            Err(err) => {
                state.skipped_items += 1;
                warn!("event=snapshot_decode module=codec status=skip entity=item error={err}");
            }
        }
    }

    Ok(state)
}
