//! Catalogue command service.
//!
//! # Responsibility
//! - Provide the validated command boundary for shelf/item mutations.
//! - Enforce the rules the store leaves to callers: non-empty names and
//!   titles, release-year range, case-insensitive shelf name uniqueness.
//!
//! # Invariants
//! - Every command validates before mutating; the store is never asked to
//!   accept data that fails command-boundary rules through this service.
//! - Not-found targets remain silent no-ops, matching store semantics.

use crate::id::generate_id;
use crate::model::item::{Item, ItemId, ItemValidationError};
use crate::model::shelf::{Shelf, ShelfIcon, ShelfId, ShelfValidationError};
use crate::store::{ChangeEvent, MediaStore, StoreError, SubscriptionId};
use crate::storage::StorageBackend;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult<T> = Result<T, CommandError>;

/// Failure of a validated catalogue command.
#[derive(Debug)]
pub enum CommandError {
    Shelf(ShelfValidationError),
    Item(ItemValidationError),
    /// Another shelf already carries this name (case-insensitive).
    DuplicateShelfName(String),
    Store(StoreError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shelf(err) => write!(f, "{err}"),
            Self::Item(err) => write!(f, "{err}"),
            Self::DuplicateShelfName(name) => {
                write!(f, "a shelf named `{name}` already exists")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Shelf(err) => Some(err),
            Self::Item(err) => Some(err),
            Self::DuplicateShelfName(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ShelfValidationError> for CommandError {
    fn from(value: ShelfValidationError) -> Self {
        Self::Shelf(value)
    }
}

impl From<ItemValidationError> for CommandError {
    fn from(value: ItemValidationError) -> Self {
        Self::Item(value)
    }
}

impl From<StoreError> for CommandError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Request model for creating or editing an item through the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub shelf_id: ShelfId,
    pub author: Option<String>,
    pub release_year: Option<i32>,
    pub notes: Option<String>,
}

impl ItemDraft {
    pub fn new(shelf_id: ShelfId, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            shelf_id,
            author: None,
            release_year: None,
            notes: None,
        }
    }

    fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            title: self.title.trim().to_string(),
            shelf_id: self.shelf_id,
            author: self.author,
            release_year: self.release_year,
            notes: self.notes,
        }
    }
}

/// Validated command facade over a [`MediaStore`].
pub struct CatalogService<B: StorageBackend> {
    store: MediaStore<B>,
}

impl<B: StorageBackend> CatalogService<B> {
    pub fn new(store: MediaStore<B>) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &MediaStore<B> {
        &self.store
    }

    /// Mutable access for callers that intentionally bypass command
    /// validation (import plumbing, tests).
    pub fn store_mut(&mut self) -> &mut MediaStore<B> {
        &mut self.store
    }

    /// Registers a change observer on the underlying store.
    pub fn subscribe(&mut self, callback: impl Fn(ChangeEvent) + 'static) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    /// Removes a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Creates a shelf with a fresh id after name validation.
    pub fn create_shelf(&mut self, name: &str, icon: ShelfIcon) -> CommandResult<ShelfId> {
        let name = name.trim();
        let shelf = Shelf::with_id(generate_id(), name, icon);
        shelf.validate()?;
        self.ensure_unique_name(name, None)?;

        let id = shelf.id.clone();
        self.store.add_shelf(shelf)?;
        Ok(id)
    }

    /// Renames and/or re-icons an existing shelf. Unknown ids are no-ops,
    /// but validation still applies first.
    pub fn update_shelf(
        &mut self,
        id: &ShelfId,
        name: &str,
        icon: ShelfIcon,
    ) -> CommandResult<()> {
        let name = name.trim();
        let shelf = Shelf::with_id(id.clone(), name, icon);
        shelf.validate()?;
        self.ensure_unique_name(name, Some(id))?;

        self.store.update_shelf(shelf)?;
        Ok(())
    }

    /// Deletes a shelf, cascading to its items.
    pub fn delete_shelf(&mut self, id: &ShelfId) -> CommandResult<()> {
        self.store.delete_shelf(id)?;
        Ok(())
    }

    /// Moves a shelf in the user-controlled ordering.
    pub fn reorder_shelf(&mut self, old_index: usize, new_index: usize) -> CommandResult<()> {
        self.store.reorder_shelf(old_index, new_index)?;
        Ok(())
    }

    /// Creates an item with a fresh id after field validation.
    pub fn create_item(&mut self, draft: ItemDraft) -> CommandResult<ItemId> {
        let item = draft.into_item(generate_id());
        item.validate()?;

        let id = item.id.clone();
        self.store.add_item(item)?;
        Ok(id)
    }

    /// Replaces an existing item after field validation. Unknown ids are
    /// no-ops.
    pub fn update_item(&mut self, item: Item) -> CommandResult<()> {
        item.validate()?;
        self.store.update_item(item)?;
        Ok(())
    }

    /// Removes an item by id.
    pub fn delete_item(&mut self, id: &ItemId) -> CommandResult<()> {
        self.store.delete_item(id)?;
        Ok(())
    }

    fn ensure_unique_name(&self, name: &str, exclude: Option<&ShelfId>) -> CommandResult<()> {
        let lowered = name.to_lowercase();
        let clash = self.store.shelves().iter().any(|shelf| {
            exclude != Some(&shelf.id) && shelf.name.to_lowercase() == lowered
        });
        if clash {
            return Err(CommandError::DuplicateShelfName(name.to_string()));
        }
        Ok(())
    }
}
