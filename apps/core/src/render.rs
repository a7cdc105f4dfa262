//! List rendering - projects the stored items into displayable rows.
//!
//! The list is always rebuilt from scratch. Each row carries a
//! [`DeleteControl`] bound to its item id; surfaces dispatch on that value
//! instead of building handlers from row text.

use crate::model::{MediaId, MediaItem};
use std::fmt;

/// Delete control attached to one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeleteControl {
    pub id: MediaId,
}

impl DeleteControl {
    pub fn label(&self) -> String {
        format!("Delete #{}", self.id)
    }
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub title: String,
    pub kind: String,
    pub status: String,
    pub delete: DeleteControl,
}

impl ListRow {
    pub fn id(&self) -> MediaId {
        self.delete.id
    }
}

impl fmt::Display for ListRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.title, self.kind, self.status)
    }
}

/// Build the full row set for `items`.
pub fn render_rows(items: &[MediaItem]) -> Vec<ListRow> {
    items
        .iter()
        .map(|item| ListRow {
            title: item.title.clone(),
            kind: item.kind.clone(),
            status: item.status.clone(),
            delete: DeleteControl { id: item.id },
        })
        .collect()
}

/// A surface that displays the media list.
pub trait ListView {
    /// Replace whatever is displayed with `rows`.
    fn render(&mut self, rows: &[ListRow]);
}

/// View that keeps the last rendered rows in memory.
#[derive(Debug, Default)]
pub struct MemoryView {
    rows: Vec<ListRow>,
    renders: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    /// Number of times the list has been rendered.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl ListView for MemoryView {
    fn render(&mut self, rows: &[ListRow]) {
        self.rows = rows.to_vec();
        self.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, title: &str) -> MediaItem {
        MediaItem {
            id: MediaId(id),
            title: title.to_string(),
            kind: "series".to_string(),
            status: "watching".to_string(),
        }
    }

    #[test]
    fn rows_show_title_type_status() {
        let rows = render_rows(&[item(4, "Severance")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].to_string(), "Severance (series) - watching");
        assert_eq!(rows[0].id(), MediaId(4));
        assert_eq!(rows[0].delete.label(), "Delete #4");
    }

    #[test]
    fn markup_like_titles_stay_plain_text() {
        let rows = render_rows(&[item(1, "<b onclick=\"x()\">")]);
        assert_eq!(rows[0].title, "<b onclick=\"x()\">");
        assert_eq!(rows[0].delete, DeleteControl { id: MediaId(1) });
    }

    #[test]
    fn memory_view_replaces_rows() {
        let mut view = MemoryView::new();
        view.render(&render_rows(&[item(1, "a"), item(2, "b")]));
        view.render(&render_rows(&[item(2, "b")]));
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.render_count(), 2);
    }
}
