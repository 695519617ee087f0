//! Reads the pseudo-JavaScript data files found in a Twitter export.
//!
//! Each file is a single assignment of a JSON array to a browser global:
//!
//! ```text
//! window.YTD.tweets.part0 = [ { "tweet": { ... } }, ... ]
//! ```
//!
//! The variable name embeds the file's own stem, so the prefix is rebuilt
//! from the path and must match verbatim before the payload is decoded.

use crate::error::{ExportError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Namespace used by every export seen in the wild.
pub const DEFAULT_NAMESPACE: &str = "YTD";

/// One decoded entry of an export file.
pub type Record = Map<String, Value>;

/// The assignment that precedes the payload of the file at `path`.
pub fn assignment_prefix(path: &Path, namespace: &str) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("window.{namespace}.{stem}.part0 = ")
}

/// Strip `prefix` from `source`, ignoring a leading byte order mark.
pub fn strip_assignment<'a>(source: &'a str, prefix: &str) -> Option<&'a str> {
    source
        .strip_prefix('\u{feff}')
        .unwrap_or(source)
        .strip_prefix(prefix)
}

/// Decode already-read file contents. `path` only names the source in errors
/// and supplies the stem of the expected prefix.
pub fn parse_javascript(path: &Path, source: &str, namespace: &str) -> Result<Vec<Record>> {
    let prefix = assignment_prefix(path, namespace);
    let payload = strip_assignment(source, &prefix).ok_or_else(|| ExportError::Parse {
        path: path.to_path_buf(),
        reason: format!("expected content to start with {:?}", prefix),
    })?;

    serde_json::from_str::<Vec<Record>>(payload).map_err(|e| ExportError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Read and decode the export file at `path`.
pub fn load_javascript(path: &Path, namespace: &str) -> Result<Vec<Record>> {
    let source = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    let records = parse_javascript(path, &source, namespace)?;
    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
