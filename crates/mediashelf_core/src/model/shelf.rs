//! Shelf domain model.
//!
//! # Responsibility
//! - Define the user-visible category record grouping catalogue items.
//!
//! # Invariants
//! - `id` is stable for the lifetime of the shelf.
//! - Shelf ordering is owned by the store, not by the record itself.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a shelf.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ShelfId = String;

/// Opaque reference to a presentation glyph.
///
/// Carries exactly what a UI shell needs to reconstruct the original icon:
/// a code point plus the optional font family it was picked from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfIcon {
    pub code_point: u32,
    pub font_family: Option<String>,
}

impl ShelfIcon {
    pub fn new(code_point: u32, font_family: Option<String>) -> Self {
        Self {
            code_point,
            font_family,
        }
    }
}

/// A named, iconable category grouping catalogue items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    /// Stable id, generated once at creation.
    pub id: ShelfId,
    /// Display name. Uniqueness among shelves is enforced at the command
    /// boundary, not here.
    pub name: String,
    pub icon: ShelfIcon,
}

/// Validation failure for shelf fields checked at the command boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfValidationError {
    EmptyName,
}

impl Display for ShelfValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "shelf name must not be empty"),
        }
    }
}

impl Error for ShelfValidationError {}

impl Shelf {
    /// Creates a shelf with a caller-provided stable id.
    pub fn with_id(id: ShelfId, name: impl Into<String>, icon: ShelfIcon) -> Self {
        Self {
            id,
            name: name.into(),
            icon,
        }
    }

    /// Checks command-boundary field rules.
    ///
    /// The store itself accepts any shelf; callers creating or renaming
    /// shelves on behalf of a user are expected to run this first.
    pub fn validate(&self) -> Result<(), ShelfValidationError> {
        if self.name.trim().is_empty() {
            return Err(ShelfValidationError::EmptyName);
        }
        Ok(())
    }
}
