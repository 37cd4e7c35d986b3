//! FFI crate exposing MediaShelf core to a Flutter shell.

pub mod api;
