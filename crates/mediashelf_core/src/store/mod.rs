//! In-memory catalogue store with write-through persistence.
//!
//! # Responsibility
//! - Act as the single authority over shelf/item state for the process.
//! - Mediate every read and write; notify subscribers of changes; persist
//!   the full snapshot through a storage backend.
//!
//! # Invariants
//! - Shelf ordering is significant and only changes through
//!   [`MediaStore::reorder_shelf`]; item ordering is not stored.
//! - Deleting a shelf cascades to its items within one mutation step; no
//!   partial cascade is ever observable.
//! - Persistence is a full-snapshot overwrite after each effective
//!   mutation; failures surface to the caller while in-memory state stays
//!   correct.
//! - Single-threaded ownership; callers needing cross-thread access wrap
//!   the store in their own synchronization.

use crate::codec::{self, CodecError};
use crate::model::item::{Item, ItemId};
use crate::model::shelf::{Shelf, ShelfId};
use crate::storage::{StorageBackend, StorageError, COLLECTION_KEY};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of the persistence step of a mutation.
///
/// In-memory state is already updated and subscribers already notified when
/// this is returned; only durability is in question.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Codec(CodecError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<CodecError> for StoreError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

/// Which part of the catalogue a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    Shelves,
    Items,
    /// Both collections changed in one step (shelf cascade delete).
    All,
}

/// Handle returned by [`MediaStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(ChangeEvent)>;

/// The in-memory authority over all shelves and items.
pub struct MediaStore<B: StorageBackend> {
    shelves: Vec<Shelf>,
    items: Vec<Item>,
    backend: B,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<B: StorageBackend> MediaStore<B> {
    /// Rehydrates a store from the backend's snapshot blob.
    ///
    /// Recovery policy:
    /// - absent blob: start empty;
    /// - unparseable blob: start empty with a warn log rather than failing
    ///   startup;
    /// - parseable envelope with malformed entities: keep the good ones,
    ///   skip the bad ones.
    ///
    /// Backend read errors (the storage itself is unusable) do propagate.
    pub fn load(backend: B) -> StoreResult<Self> {
        let mut store = Self {
            shelves: Vec::new(),
            items: Vec::new(),
            backend,
            subscribers: Vec::new(),
            next_subscription: 0,
        };

        let Some(blob) = store.backend.load(COLLECTION_KEY)? else {
            info!("event=store_load module=store status=ok source=empty");
            return Ok(store);
        };

        match codec::decode(&blob) {
            Ok(state) => {
                if state.skipped_shelves > 0 || state.skipped_items > 0 {
                    warn!(
                        "event=store_load module=store status=partial skipped_shelves={} skipped_items={}",
                        state.skipped_shelves, state.skipped_items
                    );
                }
                info!(
                    "event=store_load module=store status=ok shelves={} items={}",
                    state.shelves.len(),
                    state.items.len()
                );
                store.shelves = state.shelves;
                store.items = state.items;
            }
            Err(err) => {
                warn!("event=store_load module=store status=reset error={err}");
            }
        }

        Ok(store)
    }

    /// Ordered shelves, read-only.
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// All items, no ordering guarantee.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items whose foreign key matches `shelf_id` exactly.
    pub fn items_for_shelf(&self, shelf_id: &str) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.shelf_id == shelf_id)
            .cloned()
            .collect()
    }

    /// Shelf lookup by id. Absent is not an error.
    pub fn shelf(&self, id: &str) -> Option<&Shelf> {
        self.shelves.iter().find(|shelf| shelf.id == id)
    }

    /// Appends a shelf.
    ///
    /// Name uniqueness is deliberately not checked here; that contract
    /// lives at the command boundary (see `CatalogService`).
    pub fn add_shelf(&mut self, shelf: Shelf) -> StoreResult<()> {
        self.shelves.push(shelf);
        self.commit(ChangeEvent::Shelves)
    }

    /// Replaces the shelf with a matching id. No-op when the id is unknown.
    pub fn update_shelf(&mut self, shelf: Shelf) -> StoreResult<()> {
        let Some(position) = self.shelves.iter().position(|s| s.id == shelf.id) else {
            return Ok(());
        };
        self.shelves[position] = shelf;
        self.commit(ChangeEvent::Shelves)
    }

    /// Removes a shelf and every item referencing it, in one step.
    /// No-op when the id is unknown.
    pub fn delete_shelf(&mut self, id: &ShelfId) -> StoreResult<()> {
        let Some(position) = self.shelves.iter().position(|s| &s.id == id) else {
            return Ok(());
        };
        self.shelves.remove(position);
        self.items.retain(|item| &item.shelf_id != id);
        self.commit(ChangeEvent::All)
    }

    /// Moves one shelf within the ordered sequence.
    ///
    /// `old_index` must be in `[0, len)` and `new_index` in `[0, len]`;
    /// anything else is a silent no-op. `new_index` is the shelf's final
    /// position, clamped to the last slot, so `(0, len)` moves the first
    /// shelf to the end.
    pub fn reorder_shelf(&mut self, old_index: usize, new_index: usize) -> StoreResult<()> {
        let len = self.shelves.len();
        if old_index >= len || new_index > len {
            return Ok(());
        }

        let target = new_index.min(len - 1);
        if target == old_index {
            return Ok(());
        }

        let shelf = self.shelves.remove(old_index);
        self.shelves.insert(target, shelf);
        self.commit(ChangeEvent::Shelves)
    }

    /// Appends one item. The foreign key is not validated at insert time.
    pub fn add_item(&mut self, item: Item) -> StoreResult<()> {
        self.items.push(item);
        self.commit(ChangeEvent::Items)
    }

    /// Appends many items in one mutation step (single notify + persist).
    pub fn add_items(&mut self, items: Vec<Item>) -> StoreResult<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.items.extend(items);
        self.commit(ChangeEvent::Items)
    }

    /// Replaces the item with a matching id. No-op when the id is unknown.
    pub fn update_item(&mut self, item: Item) -> StoreResult<()> {
        let Some(position) = self.items.iter().position(|i| i.id == item.id) else {
            return Ok(());
        };
        self.items[position] = item;
        self.commit(ChangeEvent::Items)
    }

    /// Removes an item by id. No-op when the id is unknown.
    pub fn delete_item(&mut self, id: &ItemId) -> StoreResult<()> {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() == before {
            return Ok(());
        }
        self.commit(ChangeEvent::Items)
    }

    /// Registers a change observer and returns its unsubscribe handle.
    pub fn subscribe(&mut self, callback: impl Fn(ChangeEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns `false` when the handle was not (or no longer) registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Notify-then-persist tail shared by every effective mutation.
    ///
    /// Subscribers observe the new state even when the durable write then
    /// fails; the error is logged and surfaced to the caller.
    fn commit(&mut self, event: ChangeEvent) -> StoreResult<()> {
        for (_, callback) in &self.subscribers {
            callback(event);
        }

        let blob = codec::encode(&self.shelves, &self.items)?;
        if let Err(err) = self.backend.save(COLLECTION_KEY, &blob) {
            warn!("event=store_persist module=store status=error error={err}");
            return Err(err.into());
        }
        Ok(())
    }
}
