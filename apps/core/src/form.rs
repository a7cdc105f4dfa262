//! Creation form handling.

use crate::controller::MediaController;
use crate::error::Result;
use crate::model::{MediaItem, NewMediaItem};
use crate::render::ListView;

/// The three text fields of the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaForm {
    pub title: String,
    pub kind: String,
    pub status: String,
}

impl MediaForm {
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

    /// Trimmed field values, or `None` if any field is blank.
    pub fn validated(&self) -> Option<NewMediaItem> {
        let title = self.title.trim();
        let kind = self.kind.trim();
        let status = self.status.trim();

        if title.is_empty() || kind.is_empty() || status.is_empty() {
            return None;
        }

        Some(NewMediaItem::new(title, kind, status))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Submit the form: add the item and reset the fields.
    ///
    /// A form with a blank field is ignored without error and keeps its
    /// contents.
    pub async fn submit<V: ListView>(
        &mut self,
        controller: &mut MediaController<V>,
    ) -> Result<Option<MediaItem>> {
        let Some(item) = self.validated() else {
            return Ok(None);
        };

        let stored = controller.add_item(item).await?;
        self.reset();
        Ok(Some(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_fields() {
        let form = MediaForm::new("  Dune ", "\tbook", "reading\n");
        assert_eq!(
            form.validated(),
            Some(NewMediaItem::new("Dune", "book", "reading"))
        );
    }

    #[test]
    fn whitespace_only_field_is_blank() {
        assert_eq!(MediaForm::new("Dune", "   ", "reading").validated(), None);
        assert_eq!(MediaForm::new("", "book", "reading").validated(), None);
        assert_eq!(MediaForm::new("Dune", "book", "").validated(), None);
    }
}
