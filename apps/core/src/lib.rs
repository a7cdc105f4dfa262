//! Media Tracker Core Library
//!
//! Records media items (title, type, status) in a local SQLite database.
//! Provides the following capabilities:
//! - Open/create the single-table media store
//! - Add, list, delete and clear items through the controller
//! - Render the stored items as a list of rows with delete controls
//! - Export/import the whole table as a JSON array
//!
//! Flow: UI event -> controller operation -> storage mutation -> list re-render

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod render;
pub mod storage;
pub mod transfer;

// Re-export main types
pub use config::Config;
pub use controller::{ImportSummary, MediaController};
pub use error::{ImportError, StoreError};
pub use form::MediaForm;
pub use model::{MediaId, MediaItem, NewMediaItem};
pub use render::{render_rows, DeleteControl, ListRow, ListView, MemoryView};
pub use storage::{MediaDb, MediaStore};
