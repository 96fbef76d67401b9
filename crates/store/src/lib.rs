//! Persistence for Mosaic.
//!
//! A browser-style local store (one JSON value per key) plus the
//! `website.json` export artifact.

mod export;
mod local;

pub use export::{export_website, EXPORT_FILE_NAME};
pub use local::LocalStore;

/// Store key holding the saved element collection.
pub const SAVED_ELEMENTS_KEY: &str = "savedElements";
