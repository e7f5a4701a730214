use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one pre-ingested audience file, as returned by
/// `GET /api/audiences/available-files`.
///
/// Entries are derived from the storage listing on every request and are
/// never persisted. `file_name` is the basename of the object key; the
/// landing-zone prefix is an implementation detail of the backend and does
/// not appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// Basename of the file, e.g. `members_2026-07.csv`.
    pub file_name: String,
    /// Object size in bytes. Zero-byte listing entries are directory
    /// markers and are filtered out before this type is built.
    pub size_in_bytes: u64,
    /// Last-modified timestamp reported by the object store.
    pub date_modified: DateTime<Utc>,
}

/// One data row of a previewed CSV file: column name to raw cell value.
///
/// CSV schemas vary per file and are unknown at compile time, so rows stay
/// loosely typed. Values are always JSON strings; the backend performs no
/// type coercion. Column order follows the file's header row.
pub type PreviewRecord = serde_json::Map<String, serde_json::Value>;
