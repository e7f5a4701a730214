//! Azure Blob Storage implementation of the [`BlobStore`] gateway.
//!
//! Built on the `object_store` crate. A client is bound to a single
//! container, so the store holds one client per container named in the
//! configuration; the stream-type resolver guarantees that only configured
//! containers reach this layer.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::TryStreamExt;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;

use crate::config::StorageConfig;

use super::{BlobEntry, BlobStore, StorageError};

pub struct AzureBlobStore {
    clients: HashMap<String, Arc<dyn ObjectStore>>,
}

impl AzureBlobStore {
    /// Builds one Azure client per configured container.
    ///
    /// `endpoint` points the clients at an emulator (Azurite) when set;
    /// otherwise the account's public endpoint is used.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let account = config
            .account
            .as_deref()
            .ok_or_else(|| StorageError::new("configuration", "no storage account configured"))?;

        let mut clients: HashMap<String, Arc<dyn ObjectStore>> = HashMap::new();
        for container in config.containers.values() {
            let mut builder = MicrosoftAzureBuilder::new()
                .with_account(account)
                .with_container_name(container);
            if let Some(key) = &config.access_key {
                builder = builder.with_access_key(key);
            }
            if let Some(endpoint) = &config.endpoint {
                builder = builder.with_endpoint(endpoint.clone()).with_allow_http(true);
            }
            let client = builder.build().map_err(wrap)?;
            clients.insert(container.clone(), Arc::new(client));
        }
        Ok(Self { clients })
    }

    fn client(&self, container: &str) -> Result<&Arc<dyn ObjectStore>, StorageError> {
        self.clients.get(container).ok_or_else(|| {
            StorageError::new(
                "unknown_container",
                format!("no client configured for container '{container}'"),
            )
        })
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    async fn list(&self, container: &str, prefix: &str) -> Result<Vec<BlobEntry>, StorageError> {
        let client = self.client(container)?;
        let prefix = ObjectPath::from(prefix);
        match client.list(Some(&prefix)).try_collect::<Vec<_>>().await {
            Ok(objects) => Ok(objects
                .into_iter()
                .map(|meta| BlobEntry {
                    key: meta.location.to_string(),
                    size: meta.size as u64,
                    last_modified: meta.last_modified,
                })
                .collect()),
            // Container gone: a valid empty result, not a failure.
            Err(object_store::Error::NotFound { .. }) => Ok(Vec::new()),
            Err(err) => Err(wrap(err)),
        }
    }

    async fn exists(&self, container: &str, key: &str) -> Result<bool, StorageError> {
        let client = self.client(container)?;
        match client.head(&ObjectPath::from(key)).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(err) => Err(wrap(err)),
        }
    }

    async fn fetch(&self, container: &str, key: &str) -> Result<Bytes, StorageError> {
        let client = self.client(container)?;
        let result = client.get(&ObjectPath::from(key)).await.map_err(wrap)?;
        result.bytes().await.map_err(wrap)
    }
}

fn wrap(err: object_store::Error) -> StorageError {
    StorageError::new(error_code(&err), err.to_string())
}

fn error_code(err: &object_store::Error) -> &'static str {
    use object_store::Error;
    match err {
        Error::NotFound { .. } => "not_found",
        Error::InvalidPath { .. } => "invalid_path",
        Error::PermissionDenied { .. } => "permission_denied",
        Error::Unauthenticated { .. } => "unauthenticated",
        Error::AlreadyExists { .. } => "already_exists",
        Error::Precondition { .. } => "precondition",
        Error::NotModified { .. } => "not_modified",
        _ => "generic",
    }
}
