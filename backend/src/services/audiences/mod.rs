//! Audience file services: discovery and CSV inspection of pre-ingested
//! audience files.
//!
//! Files are ingested into blob storage by an external pipeline; these
//! endpoints only read. Each care-flow stream maps to its own container
//! (configured, see `config.rs`) and files are expected under the landing
//! prefix within it.
//!
//! The provided routes are:
//! - `GET /api/audiences/available-files?streamType=...`: lists the data
//!   files in the stream's landing zone, newest first.
//! - `GET /api/audiences/file-preview?fileName=...&streamType=...`: parses
//!   the whole file as CSV and returns every data row keyed by the header
//!   columns, values as raw strings.
//! - `GET /api/audiences/file-headers?fileName=...&streamType=...`: returns
//!   the header columns that follow the `_import_flag` naming convention,
//!   i.e. the care-gap flags present in the file.
//!
//! Shared plumbing lives here: the stream-type resolver, landing-key
//! construction (with path-traversal rejection), and object resolution.

use actix_web::web::{get, scope};
use actix_web::Scope;
use bytes::Bytes;

use crate::error::ApiError;
use crate::state::AppState;

mod available_files;
mod file_headers;
mod file_preview;

const API_PATH: &str = "/api/audiences";

/// Configures and returns the Actix scope for the audience routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/available-files", get().to(available_files::process))
        .route("/file-preview", get().to(file_preview::process))
        .route("/file-headers", get().to(file_headers::process))
}

/// Maps a care-flow stream label to its container name.
///
/// Pure lookup against the configured map; rejected values never reach the
/// storage layer.
pub(crate) fn resolve_container<'a>(
    state: &'a AppState,
    stream_type: &str,
) -> Result<&'a str, ApiError> {
    state
        .containers
        .get(stream_type)
        .map(String::as_str)
        .ok_or_else(|| ApiError::InvalidArgument(format!("Invalid stream type: {stream_type}")))
}

/// Builds the landing-zone object key for a user-supplied file name.
///
/// File names are basenames by contract; anything that could escape the
/// landing prefix (path separators, `..` segments) is rejected up front.
pub(crate) fn landing_key(state: &AppState, file_name: &str) -> Result<String, ApiError> {
    let unsafe_name = file_name.is_empty()
        || file_name.contains('/')
        || file_name.contains('\\')
        || file_name.contains("..")
        || file_name == ".";
    if unsafe_name {
        return Err(ApiError::InvalidArgument(format!(
            "Invalid file name: {file_name}"
        )));
    }
    Ok(format!("{}{}", state.landing_prefix, file_name))
}

/// Resolves a stream type + file name to the object's payload.
///
/// Existence is checked before downloading so a missing file surfaces as
/// `NotFound` naming the full key and container rather than as a transport
/// error.
pub(crate) async fn resolve_object(
    state: &AppState,
    stream_type: &str,
    file_name: &str,
) -> Result<Bytes, ApiError> {
    let container = resolve_container(state, stream_type)?;
    let key = landing_key(state, file_name)?;

    if !state.blob.exists(container, &key).await? {
        return Err(ApiError::NotFound(format!(
            "Blob '{key}' not found in container '{container}'."
        )));
    }
    Ok(state.blob.fetch(container, &key).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::state_with_store;
    use crate::storage::{BlobEntry, BlobStore, MemoryBlobStore, StorageError};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    /// A store that fails the test if any operation is attempted. Used to
    /// prove that argument validation happens before any storage call.
    struct UnreachableStore;

    #[async_trait]
    impl BlobStore for UnreachableStore {
        async fn list(&self, _: &str, _: &str) -> Result<Vec<BlobEntry>, StorageError> {
            panic!("storage must not be called");
        }
        async fn exists(&self, _: &str, _: &str) -> Result<bool, StorageError> {
            panic!("storage must not be called");
        }
        async fn fetch(&self, _: &str, _: &str) -> Result<Bytes, StorageError> {
            panic!("storage must not be called");
        }
    }

    #[test]
    fn resolver_accepts_configured_streams() {
        let state = state_with_store(MemoryBlobStore::new());
        assert_eq!(
            resolve_container(&state, "Healthcare Partner").unwrap(),
            "fs-partner"
        );
        assert_eq!(
            resolve_container(&state, "Direct-to-Consumer (DTC)").unwrap(),
            "fs-dtc"
        );
    }

    #[test]
    fn resolver_rejects_unknown_streams_naming_the_value() {
        let state = state_with_store(MemoryBlobStore::new());
        let err = resolve_container(&state, "Postal Mail").unwrap_err();
        match err {
            ApiError::InvalidArgument(msg) => {
                assert_eq!(msg, "Invalid stream type: Postal Mail")
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn landing_key_prepends_the_configured_prefix() {
        let state = state_with_store(MemoryBlobStore::new());
        assert_eq!(
            landing_key(&state, "members.csv").unwrap(),
            "landing/members.csv"
        );
    }

    #[test]
    fn landing_key_rejects_path_traversal() {
        let state = state_with_store(MemoryBlobStore::new());
        for name in ["", "../secrets.csv", "a/b.csv", "a\\b.csv", "..", "foo..csv"] {
            let err = landing_key(&state, name);
            assert!(
                matches!(err, Err(ApiError::InvalidArgument(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[actix_web::test]
    async fn bad_stream_type_never_reaches_storage() {
        let state = state_with_store(UnreachableStore);
        let err = resolve_object(&state, "Postal Mail", "members.csv")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[actix_web::test]
    async fn catalog_also_validates_before_storage() {
        let state = state_with_store(UnreachableStore);
        let err = super::available_files::get_available_files(&state, "Postal Mail", true)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[actix_web::test]
    async fn missing_object_is_not_found_naming_key_and_container() {
        let state = state_with_store(MemoryBlobStore::new().with_container("fs-partner"));
        let err = resolve_object(&state, "Healthcare Partner", "members.csv")
            .await
            .unwrap_err();
        match err {
            ApiError::NotFound(msg) => {
                assert_eq!(
                    msg,
                    "Blob 'landing/members.csv' not found in container 'fs-partner'."
                );
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn resolve_object_returns_the_payload() {
        let stamp = Utc.with_ymd_and_hms(2026, 7, 1, 8, 0, 0).unwrap();
        let state = state_with_store(MemoryBlobStore::new().with_blob(
            "fs-partner",
            "landing/members.csv",
            "a,b\n1,2\n",
            stamp,
        ));
        let payload = resolve_object(&state, "Healthcare Partner", "members.csv")
            .await
            .unwrap();
        assert_eq!(&payload[..], b"a,b\n1,2\n");
    }
}
