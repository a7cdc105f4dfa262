//! Media store controller - wires UI events to storage and re-renders.
//!
//! Flow: UI event -> controller operation -> storage mutation -> full list
//! re-render. The controller owns the store handle and the view for its
//! whole lifetime.

use crate::error::{ImportError, Result, StoreError};
use crate::model::{MediaId, MediaItem, NewMediaItem};
use crate::render::{render_rows, ListView};
use crate::storage::MediaStore;
use crate::transfer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows removed before importing.
    pub cleared: usize,
    /// Rows inserted from the document.
    pub imported: usize,
}

/// Controller over one media store and one list view.
pub struct MediaController<V: ListView> {
    store: MediaStore,
    view: V,
}

impl<V: ListView> MediaController<V> {
    pub fn new(store: MediaStore, view: V) -> Self {
        Self { store, view }
    }

    /// Open (or create) the store in `data_dir` and build a controller.
    pub async fn open(data_dir: PathBuf, view: V) -> Result<Self> {
        let store = MediaStore::open(data_dir).await?;
        Ok(Self::new(store, view))
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Insert an item and re-render the list.
    pub async fn add_item(&mut self, item: NewMediaItem) -> Result<MediaItem> {
        let stored = self.store.insert(item).await?;
        info!(id = %stored.id, title = %stored.title, "Added media item");
        self.render_list().await?;
        Ok(stored)
    }

    /// All stored items, ascending by id.
    pub async fn list_items(&self) -> Result<Vec<MediaItem>> {
        self.store.get_all().await
    }

    /// Delete an item if it exists, then re-render the list.
    pub async fn delete_item(&mut self, id: MediaId) -> Result<bool> {
        let removed = self.store.delete(id).await?;
        if removed {
            info!(%id, "Deleted media item");
        } else {
            debug!(%id, "No media item to delete");
        }
        self.render_list().await?;
        Ok(removed)
    }

    /// Remove every item. The list is not re-rendered.
    pub async fn clear_all(&self) -> Result<usize> {
        let removed = self.store.clear().await?;
        info!(removed, "Cleared media items");
        Ok(removed)
    }

    /// Rebuild the displayed list from the current table contents.
    pub async fn render_list(&mut self) -> Result<()> {
        let items = self.store.get_all().await?;
        let rows = render_rows(&items);
        self.view.render(&rows);
        Ok(())
    }

    /// Serialize the current table as a pretty-printed JSON array.
    pub async fn export_all(&self) -> Result<String> {
        let items = self.store.get_all().await?;
        transfer::export_document(&items)
    }

    /// Export the table to `path`. Returns the number of rows written.
    pub async fn export_to(&self, path: &Path) -> Result<usize> {
        let items = self.store.get_all().await?;
        let document = transfer::export_document(&items)?;
        transfer::write_export(&document, path)?;
        info!(rows = items.len(), path = %path.display(), "Exported media items");
        Ok(items.len())
    }

    /// Replace the table with the records of a JSON array document.
    ///
    /// Nothing is changed when the document is not a JSON array of item
    /// objects. Once the table has been cleared, records are inserted one at
    /// a time and a failing insert leaves the earlier ones in place.
    pub async fn import_all(&mut self, document: &str) -> Result<ImportSummary> {
        let items = transfer::parse_import(document)?
            .into_iter()
            .enumerate()
            .map(|(index, record)| transfer::record_to_item(index, record))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let cleared = self.store.clear().await?;
        let mut imported = 0;

        for (index, item) in items.into_iter().enumerate() {
            self.store.insert(item).await.map_err(|e| {
                StoreError::Import(ImportError::Record {
                    index,
                    reason: e.to_string(),
                })
            })?;
            imported += 1;
        }

        info!(cleared, imported, "[import] Imported media items");
        self.render_list().await?;

        Ok(ImportSummary { cleared, imported })
    }

    /// Read `path` and import it.
    pub async fn import_file(&mut self, path: &Path) -> Result<ImportSummary> {
        let document = transfer::read_import(path)?;
        self.import_all(&document).await
    }
}
