//! Error types for the media store.

use thiserror::Error;

/// Message shown when an import document is not a JSON array.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid file format.";
/// Message shown for every other import failure.
pub const IMPORT_FAILED_MESSAGE: &str = "Failed to import data.";

/// Failures of store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be opened or created.
    #[error("media store unavailable: {0}")]
    Unavailable(String),

    /// A read against the media table failed.
    #[error("failed to fetch data: {0}")]
    Fetch(String),

    /// An insert, delete or clear failed.
    #[error("failed to write data: {0}")]
    Write(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("failed to export data: {0}")]
    Export(String),
}

/// Failures while importing a JSON document.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Valid JSON, but not an array.
    #[error("import document is not a JSON array")]
    InvalidFormat,

    #[error("import document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read import file: {0}")]
    Read(#[from] std::io::Error),

    /// A record is not an item object. Reported before the table is touched.
    #[error("record {index} has the wrong shape: {reason}")]
    Shape { index: usize, reason: String },

    /// A record could not be stored. Earlier records of the same import stay.
    #[error("record {index} could not be imported: {reason}")]
    Record { index: usize, reason: String },
}

impl ImportError {
    /// Text for the blocking alert shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidFormat => INVALID_FORMAT_MESSAGE,
            _ => IMPORT_FAILED_MESSAGE,
        }
    }

    /// Whether the table was left untouched by the failed import.
    pub fn is_before_mutation(&self) -> bool {
        !matches!(self, Self::Record { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_follow_failure_kind() {
        assert_eq!(ImportError::InvalidFormat.user_message(), "Invalid file format.");
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ImportError::Parse(parse).user_message(), "Failed to import data.");
        let record = ImportError::Record {
            index: 2,
            reason: "not an object".into(),
        };
        assert_eq!(record.user_message(), "Failed to import data.");
        assert!(!record.is_before_mutation());

        let shape = ImportError::Shape {
            index: 0,
            reason: "record is not a JSON object".into(),
        };
        assert_eq!(shape.user_message(), "Failed to import data.");
        assert!(shape.is_before_mutation());
    }
}
