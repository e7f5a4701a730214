//! In-memory implementation of the [`BlobStore`] gateway.
//!
//! Backs the unit tests and the credential-less development mode, where the
//! server starts with an empty store instead of refusing to boot. Behavior
//! mirrors the Azure implementation's contract: listing a container that
//! was never created is an empty result, fetching a missing object is a
//! storage failure.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use super::{BlobEntry, BlobStore, StorageError};

struct StoredBlob {
    key: String,
    payload: Bytes,
    last_modified: DateTime<Utc>,
}

#[derive(Default)]
pub struct MemoryBlobStore {
    containers: HashMap<String, Vec<StoredBlob>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `container` with no objects in it.
    pub fn with_container(mut self, container: &str) -> Self {
        self.containers.entry(container.to_string()).or_default();
        self
    }

    /// Stores an object, creating the container if needed.
    pub fn with_blob(
        mut self,
        container: &str,
        key: &str,
        payload: impl Into<Bytes>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        self.containers
            .entry(container.to_string())
            .or_default()
            .push(StoredBlob {
                key: key.to_string(),
                payload: payload.into(),
                last_modified,
            });
        self
    }

    fn find(&self, container: &str, key: &str) -> Option<&StoredBlob> {
        self.containers
            .get(container)?
            .iter()
            .find(|blob| blob.key == key)
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn list(&self, container: &str, prefix: &str) -> Result<Vec<BlobEntry>, StorageError> {
        // An unknown container behaves like a deleted cloud container:
        // empty listing, no error.
        let Some(blobs) = self.containers.get(container) else {
            return Ok(Vec::new());
        };
        Ok(blobs
            .iter()
            .filter(|blob| blob.key.starts_with(prefix))
            .map(|blob| BlobEntry {
                key: blob.key.clone(),
                size: blob.payload.len() as u64,
                last_modified: blob.last_modified,
            })
            .collect())
    }

    async fn exists(&self, container: &str, key: &str) -> Result<bool, StorageError> {
        Ok(self.find(container, key).is_some())
    }

    async fn fetch(&self, container: &str, key: &str) -> Result<Bytes, StorageError> {
        self.find(container, key)
            .map(|blob| blob.payload.clone())
            .ok_or_else(|| {
                StorageError::new(
                    "not_found",
                    format!("object '{key}' not found in container '{container}'"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, day, 12, 0, 0).unwrap()
    }

    #[actix_web::test]
    async fn listing_an_unknown_container_is_empty_not_an_error() {
        let store = MemoryBlobStore::new();
        let entries = store.list("nope", "landing/").await.unwrap();
        assert!(entries.is_empty());
    }

    #[actix_web::test]
    async fn listing_filters_by_prefix() {
        let store = MemoryBlobStore::new()
            .with_blob("fs-partner", "landing/a.csv", "x", stamp(1))
            .with_blob("fs-partner", "archive/b.csv", "y", stamp(2));

        let entries = store.list("fs-partner", "landing/").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "landing/a.csv");
        assert_eq!(entries[0].size, 1);
    }

    #[actix_web::test]
    async fn fetch_of_a_missing_object_is_a_storage_error() {
        let store = MemoryBlobStore::new().with_container("fs-partner");
        assert!(!store.exists("fs-partner", "landing/a.csv").await.unwrap());

        let err = store.fetch("fs-partner", "landing/a.csv").await.unwrap_err();
        assert_eq!(err.code, "not_found");
    }
}
