//! MediaDb - SQLite database holding the media table.
//!
//! One file, one table keyed by an auto-incrementing `id`. The schema version
//! lives in `PRAGMA user_version`; the table is created when the version is
//! still 0, which is the only upgrade step there is.

use crate::error::{Result, StoreError};
use crate::model::{MediaId, MediaItem, NewMediaItem};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Database file name inside the data directory.
pub const DB_FILE_NAME: &str = "mediaTrackerDB.sqlite";

/// Current schema version.
pub const SCHEMA_VERSION: i64 = 1;

/// SQLite database for media items.
pub struct MediaDb {
    conn: Connection,
}

fn fetch_err(e: rusqlite::Error) -> StoreError {
    StoreError::Fetch(e.to_string())
}

fn write_err(e: rusqlite::Error) -> StoreError {
    StoreError::Write(e.to_string())
}

fn unavailable(e: impl std::fmt::Display) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

/// Path of the database file for a data directory.
pub fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE_NAME)
}

impl MediaDb {
    /// Open or create the media database in `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let db_path = db_path(data_dir);

        std::fs::create_dir_all(data_dir).map_err(|e| {
            StoreError::Unavailable(format!("cannot create {}: {}", data_dir.display(), e))
        })?;

        let conn = Connection::open(&db_path).map_err(|e| {
            StoreError::Unavailable(format!("cannot open {}: {}", db_path.display(), e))
        })?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA busy_timeout = 5000;
        ",
        )
        .map_err(unavailable)?;

        info!("[MediaDb] Opened {}", db_path.display());

        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Open database in memory (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(unavailable)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Create the media table on first run.
    fn init_schema(&self) -> Result<()> {
        let version: i64 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .map_err(unavailable)?;

        if version > SCHEMA_VERSION {
            return Err(StoreError::Unavailable(format!(
                "database schema version {} is newer than supported version {}",
                version, SCHEMA_VERSION
            )));
        }

        if version < SCHEMA_VERSION {
            info!(
                "[MediaDb] Upgrading schema from version {} to {}",
                version, SCHEMA_VERSION
            );
            self.conn
                .execute_batch(
                    "
                    CREATE TABLE IF NOT EXISTS media (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        title TEXT NOT NULL,
                        type TEXT NOT NULL,
                        status TEXT NOT NULL
                    );
                    PRAGMA user_version = 1;
                ",
                )
                .map_err(unavailable)?;
        }

        Ok(())
    }

    /// Schema version recorded in the database.
    pub fn schema_version(&self) -> Result<i64> {
        self.conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .map_err(fetch_err)
    }

    /// Insert a new row. The store assigns the id.
    pub fn insert(&self, item: &NewMediaItem) -> Result<MediaItem> {
        self.conn
            .execute(
                "INSERT INTO media (title, type, status) VALUES (?1, ?2, ?3)",
                params![item.title, item.kind, item.status],
            )
            .map_err(write_err)?;

        let id = MediaId(self.conn.last_insert_rowid());
        debug!("[MediaDb] Inserted row {}", id);

        Ok(MediaItem {
            id,
            title: item.title.clone(),
            kind: item.kind.clone(),
            status: item.status.clone(),
        })
    }

    /// Get all rows, in insertion (id) order.
    pub fn get_all(&self) -> Result<Vec<MediaItem>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, type, status FROM media ORDER BY id ASC")
            .map_err(fetch_err)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(MediaItem {
                    id: MediaId(row.get(0)?),
                    title: row.get(1)?,
                    kind: row.get(2)?,
                    status: row.get(3)?,
                })
            })
            .map_err(fetch_err)?;

        let mut items = Vec::new();
        for row in rows {
            items.push(row.map_err(fetch_err)?);
        }

        Ok(items)
    }

    /// Delete a row by id. Returns false when no such row exists.
    pub fn delete(&self, id: MediaId) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM media WHERE id = ?1", params![id.0])
            .map_err(write_err)?;
        Ok(affected > 0)
    }

    /// Remove every row. Returns the number of rows removed.
    pub fn clear(&self) -> Result<usize> {
        self.conn
            .execute("DELETE FROM media", [])
            .map_err(write_err)
    }
}
