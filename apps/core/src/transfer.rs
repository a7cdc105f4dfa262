//! JSON export/import of the media table.
//!
//! Export writes every row (ids included) as a pretty-printed array.
//! Import accepts an array of objects; ids in the input are dropped so the
//! store assigns new ones.

use crate::error::{ImportError, Result, StoreError};
use crate::model::{MediaItem, NewMediaItem};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name offered for exports.
pub const EXPORT_FILE_NAME: &str = "media-tracker-data.json";

/// Serialize `items` as a 2-space indented JSON array.
pub fn export_document(items: &[MediaItem]) -> Result<String> {
    serde_json::to_string_pretty(items).map_err(|e| StoreError::Export(e.to_string()))
}

/// Write an export document to `path`, creating the parent directory.
pub fn write_export(document: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| StoreError::Export(format!("{}: {}", parent.display(), e)))?;
    }
    std::fs::write(path, document)
        .map_err(|e| StoreError::Export(format!("{}: {}", path.display(), e)))?;
    debug!("[export] Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}

/// Default export location inside `dir`.
pub fn export_path(dir: &Path) -> PathBuf {
    dir.join(EXPORT_FILE_NAME)
}

/// Read an import file.
pub fn read_import(path: &Path) -> std::result::Result<String, ImportError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Parse an import document into its raw records.
///
/// Fails before anything is stored when the text is not JSON or the JSON
/// is not an array.
pub fn parse_import(document: &str) -> std::result::Result<Vec<Value>, ImportError> {
    match serde_json::from_str::<Value>(document)? {
        Value::Array(records) => Ok(records),
        _ => Err(ImportError::InvalidFormat),
    }
}

/// Turn one raw record into an item, dropping its `id`.
pub fn record_to_item(
    index: usize,
    record: Value,
) -> std::result::Result<NewMediaItem, ImportError> {
    let Value::Object(mut fields) = record else {
        return Err(ImportError::Shape {
            index,
            reason: "record is not a JSON object".to_string(),
        });
    };
    fields.remove("id");

    serde_json::from_value(Value::Object(fields)).map_err(|e| ImportError::Shape {
        index,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaId;
    use serde_json::json;

    #[test]
    fn export_is_pretty_with_two_spaces() -> Result<()> {
        let items = vec![MediaItem {
            id: MediaId(1),
            title: "Dune".to_string(),
            kind: "book".to_string(),
            status: "done".to_string(),
        }];
        let doc = export_document(&items)?;
        assert!(doc.starts_with("[\n  {\n    \"id\": 1,"));
        assert!(doc.contains("\"type\": \"book\""));
        Ok(())
    }

    #[test]
    fn empty_table_exports_empty_array() -> Result<()> {
        assert_eq!(export_document(&[])?, "[]");
        Ok(())
    }

    #[test]
    fn object_document_is_invalid_format() {
        let err = parse_import(r#"{"title": "x"}"#).unwrap_err();
        assert!(matches!(err, ImportError::InvalidFormat));
        assert_eq!(err.user_message(), "Invalid file format.");
    }

    #[test]
    fn broken_json_is_parse_error() {
        let err = parse_import("[{").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
        assert_eq!(err.user_message(), "Failed to import data.");
    }

    #[test]
    fn record_id_is_stripped() {
        let item = record_to_item(
            0,
            json!({"id": 9, "title": "Heat", "type": "movie", "status": "queued"}),
        )
        .unwrap();
        assert_eq!(item, NewMediaItem::new("Heat", "movie", "queued"));
    }

    #[test]
    fn non_object_record_is_rejected_with_index() {
        let err = record_to_item(3, json!("Heat")).unwrap_err();
        assert!(matches!(err, ImportError::Shape { index: 3, .. }));
    }

    #[test]
    fn non_string_field_is_rejected() {
        let err = record_to_item(1, json!({"title": 5})).unwrap_err();
        assert!(matches!(err, ImportError::Shape { index: 1, .. }));
    }
}
