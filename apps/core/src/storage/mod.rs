//! Storage module - Local SQLite database for media items.
//!
//! This module contains:
//! - MediaDb: synchronous access to the media table
//! - MediaStore: async handle the controller owns

pub mod media_db;
pub mod store;

pub use media_db::{MediaDb, DB_FILE_NAME, SCHEMA_VERSION};
pub use store::MediaStore;
