//! Use-case services over the catalogue store.
//!
//! # Responsibility
//! - Orchestrate store calls into command-level APIs with the validation
//!   the store itself deliberately does not enforce.
//! - Keep UI/FFI layers decoupled from store and storage details.

pub mod catalog_service;
pub mod transfer;
