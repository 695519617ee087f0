use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning an export into tweets.
///
/// Every variant is fatal to a run; there is no per-record recovery.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The assignment prefix is missing or the payload is not a JSON array of objects.
    #[error("Failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// A record is missing a required field or a field has the wrong shape.
    #[error("Invalid {context}: {reason}")]
    Schema { context: String, reason: String },

    /// `created_at` could not be parsed.
    #[error("Unrecognised timestamp: {value:?}")]
    DateFormat { value: String },

    /// Reading an export file or writing into the vault failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub(crate) fn schema(context: impl Into<String>, reason: impl ToString) -> Self {
        Self::Schema {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
