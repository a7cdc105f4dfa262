//! Async handle over [`MediaDb`].
//!
//! Every call moves the SQLite work onto tokio's blocking pool and suspends
//! the caller until it finishes. The connection sits behind a mutex owned by
//! the handle, so at most one storage operation runs at a time.

use crate::error::{Result, StoreError};
use crate::model::{MediaId, MediaItem, NewMediaItem};
use crate::storage::media_db::MediaDb;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Owned handle to the media database.
pub struct MediaStore {
    db: Arc<Mutex<MediaDb>>,
}

impl MediaStore {
    /// Open or create the database in `data_dir`.
    pub async fn open(data_dir: PathBuf) -> Result<Self> {
        let db = tokio::task::spawn_blocking(move || MediaDb::open(&data_dir))
            .await
            .map_err(|e| StoreError::Unavailable(format!("spawn_blocking failed: {}", e)))??;
        Ok(Self::from_db(db))
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_db(MediaDb::open_in_memory()?))
    }

    pub fn from_db(db: MediaDb) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Run `f` against the database on the blocking pool.
    async fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&MediaDb) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let guard = db
                .lock()
                .map_err(|_| StoreError::Unavailable("media store lock poisoned".to_string()))?;
            f(&*guard)
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("spawn_blocking failed: {}", e)))?
    }

    pub async fn insert(&self, item: NewMediaItem) -> Result<MediaItem> {
        self.run(move |db| db.insert(&item)).await
    }

    pub async fn get_all(&self) -> Result<Vec<MediaItem>> {
        self.run(|db| db.get_all()).await
    }

    pub async fn delete(&self, id: MediaId) -> Result<bool> {
        self.run(move |db| db.delete(id)).await
    }

    pub async fn clear(&self) -> Result<usize> {
        self.run(|db| db.clear()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn operations_run_in_order() -> Result<()> {
        let store = MediaStore::open_in_memory()?;

        let a = store.insert(NewMediaItem::new("a", "book", "new")).await?;
        store.insert(NewMediaItem::new("b", "book", "new")).await?;
        assert_eq!(store.get_all().await?.len(), 2);

        assert!(store.delete(a.id).await?);
        let all = store.get_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "b");

        assert_eq!(store.clear().await?, 1);
        assert!(store.get_all().await?.is_empty());

        Ok(())
    }
}
