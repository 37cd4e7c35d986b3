//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level catalogue functions to Dart via FRB.
//! - Keep error semantics simple for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every call opens the catalogue from the resolved database path; the
//!   core's write-through persistence keeps per-call state consistent.

use mediashelf_core::db::open_db;
use mediashelf_core::{
    core_version as core_version_inner, export_shelf_items, filter_items, import_items,
    init_logging as init_logging_inner, ping as ping_inner, sort_items, CatalogService, Item,
    ItemDraft, ItemSort, MediaStore, ShelfIcon, SqliteKvStorage,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const CATALOG_DB_FILE_NAME: &str = "mediashelf.sqlite3";
static CATALOG_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Shelf projection handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfView {
    pub id: String,
    pub name: String,
    pub icon_code_point: u32,
    pub icon_font_family: Option<String>,
}

/// Item projection handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub shelf_id: String,
    pub author: Option<String>,
    pub release_year: Option<i32>,
    pub notes: Option<String>,
}

/// Generic action response envelope for catalogue commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Created/affected entity id when applicable.
    pub id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl CatalogActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Lists shelves in user-controlled order.
///
/// # FFI contract
/// - Sync call, DB-backed execution; never panics.
/// - Returns an empty list when the catalogue cannot be opened.
#[flutter_rust_bridge::frb(sync)]
pub fn list_shelves() -> Vec<ShelfView> {
    match with_catalog(|service| {
        Ok(service
            .store()
            .shelves()
            .iter()
            .map(|shelf| ShelfView {
                id: shelf.id.clone(),
                name: shelf.name.clone(),
                icon_code_point: shelf.icon.code_point,
                icon_font_family: shelf.icon.font_family.clone(),
            })
            .collect())
    }) {
        Ok(views) => views,
        Err(err) => {
            log::warn!("event=ffi_list_shelves module=ffi status=error error={err}");
            Vec::new()
        }
    }
}

/// Lists one shelf's items, filtered and sorted for display.
///
/// `sort` is one of `created|title|author|year` (default `created`).
///
/// # FFI contract
/// - Sync call, DB-backed execution; never panics.
/// - Returns an empty list when the catalogue cannot be opened.
#[flutter_rust_bridge::frb(sync)]
pub fn list_shelf_items(shelf_id: String, query: String, sort: String) -> Vec<ItemView> {
    match with_catalog(|service| {
        let items = service.store().items_for_shelf(&shelf_id);
        let filtered = filter_items(&items, &query);
        Ok(sort_items(&filtered, parse_sort(&sort))
            .iter()
            .map(to_item_view)
            .collect())
    }) {
        Ok(views) => views,
        Err(err) => {
            log::warn!("event=ffi_list_items module=ffi status=error error={err}");
            Vec::new()
        }
    }
}

/// Creates a shelf after command-boundary validation.
#[flutter_rust_bridge::frb(sync)]
pub fn create_shelf(
    name: String,
    icon_code_point: u32,
    icon_font_family: Option<String>,
) -> CatalogActionResponse {
    match with_catalog(|service| {
        service
            .create_shelf(&name, ShelfIcon::new(icon_code_point, icon_font_family))
            .map_err(|err| err.to_string())
    }) {
        Ok(id) => CatalogActionResponse::success("Shelf created.", Some(id)),
        Err(err) => CatalogActionResponse::failure(format!("create_shelf failed: {err}")),
    }
}

/// Renames and/or re-icons a shelf.
#[flutter_rust_bridge::frb(sync)]
pub fn update_shelf(
    id: String,
    name: String,
    icon_code_point: u32,
    icon_font_family: Option<String>,
) -> CatalogActionResponse {
    match with_catalog(|service| {
        service
            .update_shelf(&id, &name, ShelfIcon::new(icon_code_point, icon_font_family))
            .map_err(|err| err.to_string())
    }) {
        Ok(()) => CatalogActionResponse::success("Shelf updated.", Some(id)),
        Err(err) => CatalogActionResponse::failure(format!("update_shelf failed: {err}")),
    }
}

/// Deletes a shelf and all of its items.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_shelf(id: String) -> CatalogActionResponse {
    match with_catalog(|service| service.delete_shelf(&id).map_err(|err| err.to_string())) {
        Ok(()) => CatalogActionResponse::success("Shelf deleted.", Some(id)),
        Err(err) => CatalogActionResponse::failure(format!("delete_shelf failed: {err}")),
    }
}

/// Moves a shelf in the user-controlled ordering.
#[flutter_rust_bridge::frb(sync)]
pub fn reorder_shelf(old_index: u32, new_index: u32) -> CatalogActionResponse {
    match with_catalog(|service| {
        service
            .reorder_shelf(old_index as usize, new_index as usize)
            .map_err(|err| err.to_string())
    }) {
        Ok(()) => CatalogActionResponse::success("Shelves reordered.", None),
        Err(err) => CatalogActionResponse::failure(format!("reorder_shelf failed: {err}")),
    }
}

/// Creates an item on a shelf after command-boundary validation.
#[flutter_rust_bridge::frb(sync)]
pub fn create_item(
    shelf_id: String,
    title: String,
    author: Option<String>,
    release_year: Option<i32>,
    notes: Option<String>,
) -> CatalogActionResponse {
    let mut draft = ItemDraft::new(shelf_id, title);
    draft.author = author;
    draft.release_year = release_year;
    draft.notes = notes;

    match with_catalog(|service| service.create_item(draft).map_err(|err| err.to_string())) {
        Ok(id) => CatalogActionResponse::success("Item created.", Some(id)),
        Err(err) => CatalogActionResponse::failure(format!("create_item failed: {err}")),
    }
}

/// Replaces an item's fields after command-boundary validation.
#[flutter_rust_bridge::frb(sync)]
pub fn update_item(
    id: String,
    shelf_id: String,
    title: String,
    author: Option<String>,
    release_year: Option<i32>,
    notes: Option<String>,
) -> CatalogActionResponse {
    let item = Item {
        id: id.clone(),
        title,
        shelf_id,
        author,
        release_year,
        notes,
    };
    match with_catalog(|service| service.update_item(item).map_err(|err| err.to_string())) {
        Ok(()) => CatalogActionResponse::success("Item updated.", Some(id)),
        Err(err) => CatalogActionResponse::failure(format!("update_item failed: {err}")),
    }
}

/// Removes an item by id.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_item(id: String) -> CatalogActionResponse {
    match with_catalog(|service| service.delete_item(&id).map_err(|err| err.to_string())) {
        Ok(()) => CatalogActionResponse::success("Item deleted.", Some(id)),
        Err(err) => CatalogActionResponse::failure(format!("delete_item failed: {err}")),
    }
}

/// Serializes one shelf's items to an indented JSON array for sharing.
///
/// # FFI contract
/// - Never panics; returns empty string on failure with a logged error.
#[flutter_rust_bridge::frb(sync)]
pub fn export_shelf(shelf_id: String) -> String {
    match with_catalog(|service| {
        export_shelf_items(service.store(), &shelf_id).map_err(|err| err.to_string())
    }) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("event=ffi_export module=ffi status=error error={err}");
            String::new()
        }
    }
}

/// Imports a JSON array of items into a shelf.
///
/// Malformed elements are skipped; the message reports imported/skipped
/// counts. A non-array payload fails the whole import.
#[flutter_rust_bridge::frb(sync)]
pub fn import_into_shelf(shelf_id: String, payload: String) -> CatalogActionResponse {
    match with_catalog(|service| {
        import_items(service.store_mut(), &shelf_id, &payload).map_err(|err| err.to_string())
    }) {
        Ok(outcome) => CatalogActionResponse::success(
            format!(
                "Imported {} item(s), skipped {}.",
                outcome.imported, outcome.skipped
            ),
            Some(shelf_id),
        ),
        Err(err) => CatalogActionResponse::failure(format!("import_into_shelf failed: {err}")),
    }
}

fn to_item_view(item: &Item) -> ItemView {
    ItemView {
        id: item.id.clone(),
        title: item.title.clone(),
        shelf_id: item.shelf_id.clone(),
        author: item.author.clone(),
        release_year: item.release_year,
        notes: item.notes.clone(),
    }
}

fn parse_sort(sort: &str) -> ItemSort {
    match sort.trim().to_ascii_lowercase().as_str() {
        "title" => ItemSort::Title,
        "author" => ItemSort::Author,
        "year" => ItemSort::ReleaseYear,
        _ => ItemSort::CreatedAt,
    }
}

fn resolve_catalog_db_path() -> PathBuf {
    CATALOG_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("MEDIASHELF_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(CATALOG_DB_FILE_NAME)
        })
        .clone()
}

fn with_catalog<T>(
    f: impl FnOnce(&mut CatalogService<SqliteKvStorage>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_catalog_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("catalog DB open failed: {err}"))?;
    let store = MediaStore::load(SqliteKvStorage::new(conn))
        .map_err(|err| format!("catalog load failed: {err}"))?;
    let mut service = CatalogService::new(store);
    f(&mut service)
}
