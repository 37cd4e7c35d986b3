//! Item domain model.
//!
//! # Responsibility
//! - Define a single catalogued entry (book, film, game, ...).
//!
//! # Invariants
//! - `id` is stable for the lifetime of the item.
//! - `shelf_id` is expected to reference an existing shelf; the store keeps
//!   this true through cascade deletion rather than insert-time checks.

use crate::model::shelf::ShelfId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for an item.
pub type ItemId = String;

/// Inclusive release-year range accepted at the command boundary.
pub const RELEASE_YEAR_MIN: i32 = 0;
pub const RELEASE_YEAR_MAX: i32 = 9999;

/// A single catalogued entry with title and optional metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable id, generated once at creation.
    pub id: ItemId,
    /// Required display title; must be non-empty after trimming when the
    /// item passes through the command boundary.
    pub title: String,
    /// Foreign key to the owning shelf. Not validated at insert time.
    pub shelf_id: ShelfId,
    pub author: Option<String>,
    pub release_year: Option<i32>,
    pub notes: Option<String>,
}

/// Validation failure for item fields checked at the command boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyTitle,
    ReleaseYearOutOfRange(i32),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "item title must not be empty"),
            Self::ReleaseYearOutOfRange(year) => write!(
                f,
                "release year {year} outside supported range {RELEASE_YEAR_MIN}..={RELEASE_YEAR_MAX}"
            ),
        }
    }
}

impl Error for ItemValidationError {}

impl Item {
    /// Creates an item with a caller-provided stable id and owning shelf.
    ///
    /// Optional metadata starts as `None`.
    pub fn with_id(id: ItemId, shelf_id: ShelfId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            shelf_id,
            author: None,
            release_year: None,
            notes: None,
        }
    }

    /// Checks command-boundary field rules.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.title.trim().is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }
        if let Some(year) = self.release_year {
            if !(RELEASE_YEAR_MIN..=RELEASE_YEAR_MAX).contains(&year) {
                return Err(ItemValidationError::ReleaseYearOutOfRange(year));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemValidationError};

    fn sample() -> Item {
        Item::with_id("10".to_string(), "1".to_string(), "Dune")
    }

    #[test]
    fn validate_rejects_empty_title() {
        let mut item = sample();
        item.title = "  ".to_string();
        assert_eq!(item.validate(), Err(ItemValidationError::EmptyTitle));
    }

    #[test]
    fn validate_rejects_out_of_range_year() {
        let mut item = sample();
        item.release_year = Some(12000);
        assert_eq!(
            item.validate(),
            Err(ItemValidationError::ReleaseYearOutOfRange(12000))
        );
    }

    #[test]
    fn validate_accepts_absent_optionals() {
        assert_eq!(sample().validate(), Ok(()));
    }
}
