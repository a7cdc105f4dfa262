//! Media item types shared by the store, the renderer and export/import.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned row identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub i64);

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An item that has not been stored yet (no id).
///
/// Deserialization is lenient so imported records that lack a field still
/// load; any `id` key in the input is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewMediaItem {
    #[serde(default)]
    pub title: String,
    /// Free-form category (JSON key `type`).
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub status: String,
}

impl NewMediaItem {
    pub fn new(
        title: impl Into<String>,
        kind: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
            status: status.into(),
        }
    }
}

/// A stored media row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: MediaId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
}

impl MediaItem {
    /// The item's fields without its id.
    pub fn fields(&self) -> NewMediaItem {
        NewMediaItem {
            title: self.title.clone(),
            kind: self.kind.clone(),
            status: self.status.clone(),
        }
    }
}
