//! Lists the data files available in a stream's landing zone.
//!
//! Backend logic for `GET /api/audiences/available-files`. The listing is
//! recomputed on every request: resolve the stream's container, list the
//! landing prefix, drop zero-byte directory markers, reduce keys to their
//! basenames, and sort by modification time (newest first over HTTP).

use actix_web::{web, HttpResponse};
use common::model::audience::FileMetadata;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AvailableFilesQuery {
    #[serde(default)]
    stream_type: Option<String>,
}

/// Actix handler for `GET /api/audiences/available-files`.
pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<AvailableFilesQuery>,
) -> Result<HttpResponse, ApiError> {
    let stream_type = match query.stream_type.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiError::InvalidArgument("A stream type is required.".to_string())),
    };

    let files = get_available_files(&state, stream_type, true).await?;
    Ok(HttpResponse::Ok().json(files))
}

/// Lists the stream's landing zone as `FileMetadata`, sorted by
/// modification time.
///
/// Zero-byte entries are directory markers left by the ingestion pipeline,
/// not data files, and are dropped. The sort is stable, so entries sharing
/// a timestamp keep their listing order.
pub(crate) async fn get_available_files(
    state: &AppState,
    stream_type: &str,
    sort_descending: bool,
) -> Result<Vec<FileMetadata>, ApiError> {
    let container = super::resolve_container(state, stream_type)?;
    let blobs = state.blob.list(container, &state.landing_prefix).await?;

    let mut files: Vec<FileMetadata> = blobs
        .into_iter()
        .filter(|blob| blob.size > 0)
        .map(|blob| FileMetadata {
            file_name: blob.key.rsplit('/').next().unwrap_or(&blob.key).to_string(),
            size_in_bytes: blob.size,
            date_modified: blob.last_modified,
        })
        .collect();

    if sort_descending {
        files.sort_by(|a, b| b.date_modified.cmp(&a.date_modified));
    } else {
        files.sort_by(|a, b| a.date_modified.cmp(&b.date_modified));
    }
    Ok(files)
}
