//! Terminal master-detail data viewer built on `rowpane-core`.
//!
//! The binary entry point lives in `main.rs`; everything else is
//! exposed here so integration tests can drive the renderers against an
//! in-memory frame buffer.

pub mod app;
pub mod buffer;
pub mod data;
pub mod error;
pub mod layout;
pub mod term;
pub mod views;
pub mod wakeup;
