//! Blob access gateway: the seam between the audience services and the
//! object store holding pre-ingested audience files.
//!
//! The [`BlobStore`] trait exposes the three operations the services need
//! (list, exists, fetch) against `container` + `key` addressing. Transport
//! failures are translated into a single [`StorageError`] domain type at
//! this boundary; the one deliberate exception is a listing against a
//! container that does not exist, which is a valid empty result rather than
//! an error. Nothing here retries: every failure surfaces to the caller on
//! first occurrence.
//!
//! Implementations:
//! - [`AzureBlobStore`] — Azure Blob Storage through the `object_store`
//!   crate, one client per configured container.
//! - [`MemoryBlobStore`] — in-memory map, used by the tests and when the
//!   server is started without storage credentials.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use thiserror::Error;

mod azure;
mod memory;

pub use azure::AzureBlobStore;
pub use memory::MemoryBlobStore;

/// One object from a container listing.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobEntry {
    /// Full object key, including any prefix, e.g. `landing/members.csv`.
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

/// A failed storage operation, carrying the transport error's code and
/// message. Surfaced to HTTP clients as a generic 500; the details stay in
/// the server log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage access failure ({code}): {message}")]
pub struct StorageError {
    pub code: String,
    pub message: String,
}

impl StorageError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Read-only object store operations used by the audience services.
///
/// All operations are single-shot and stateless. `fetch` materializes the
/// whole payload; dropping the returned [`Bytes`] releases it, so there is
/// no stream handle to leak on early returns.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Lists objects in `container` whose keys start with `prefix`.
    ///
    /// A container that does not exist yields an empty listing, not an
    /// error.
    async fn list(&self, container: &str, prefix: &str) -> Result<Vec<BlobEntry>, StorageError>;

    /// Checks whether `key` exists in `container` without downloading it.
    async fn exists(&self, container: &str, key: &str) -> Result<bool, StorageError>;

    /// Downloads the full payload of `key` in `container`.
    async fn fetch(&self, container: &str, key: &str) -> Result<Bytes, StorageError>;
}
