//! Domain model for the media catalogue.
//!
//! # Responsibility
//! - Define the canonical `Shelf` and `Item` records shared by store,
//!   codec and service layers.
//! - Provide validation helpers consumed at the command boundary.
//!
//! # Invariants
//! - Every record is identified by a stable string id minted once at
//!   creation and never reused.
//! - Records are value-like: no back-references, no shared mutable state.

pub mod item;
pub mod shelf;
