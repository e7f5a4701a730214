//! Shared application state injected into the Actix handlers.
//!
//! Built once in `main.rs` from the loaded configuration and cloned into
//! every worker as `web::Data<AppState>`. Holds the blob gateway, the
//! stream-type → container map, the landing prefix, and the reference
//! database path. Everything here is read-only after startup; requests
//! never mutate shared state.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use log::warn;

use crate::config::AppConfig;
use crate::storage::{AzureBlobStore, BlobStore, MemoryBlobStore};

#[derive(Clone)]
pub struct AppState {
    /// Gateway to the object store holding pre-ingested audience files.
    pub blob: Arc<dyn BlobStore>,
    /// Care-flow stream label → physical container name.
    pub containers: HashMap<String, String>,
    /// Object-key prefix under which audience files land.
    pub landing_prefix: String,
    /// SQLite file holding the `care_gaps` reference table.
    pub db_path: PathBuf,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<AppState, String> {
        let blob: Arc<dyn BlobStore> = if config.storage.account.is_some() {
            Arc::new(AzureBlobStore::from_config(&config.storage).map_err(|e| e.to_string())?)
        } else {
            warn!("no storage account configured; using an empty in-memory blob store");
            let mut store = MemoryBlobStore::new();
            for container in config.storage.containers.values() {
                store = store.with_container(container);
            }
            Arc::new(store)
        };

        Ok(AppState {
            blob,
            containers: config.storage.containers.clone(),
            landing_prefix: config.storage.landing_prefix.clone(),
            db_path: config.database.path.clone(),
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::StorageConfig;

    /// State over an arbitrary blob store, with the default stream map and
    /// a database path that tests override when they need SQLite.
    pub(crate) fn state_with_store(store: impl BlobStore + 'static) -> AppState {
        let storage = StorageConfig::default();
        AppState {
            blob: Arc::new(store),
            containers: storage.containers,
            landing_prefix: storage.landing_prefix,
            db_path: PathBuf::from("unused.sqlite"),
        }
    }
}
