//! Care-gap flag detection from a file's CSV header.
//!
//! Backend logic for `GET /api/audiences/file-headers`. Only the first
//! line of the file is inspected: it is split on commas, each name is
//! trimmed of whitespace and surrounding quotes, and only names ending in
//! the `_import_flag` convention are returned. The set of such names is
//! what the wizard offers as selectable care-gap flags for the file.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Suffix convention marking a header column as a care-gap flag.
const FLAG_SUFFIX: &str = "_import_flag";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileHeadersQuery {
    #[serde(default)]
    file_name: Option<String>,
    #[serde(default)]
    stream_type: Option<String>,
}

/// Actix handler for `GET /api/audiences/file-headers`.
pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<FileHeadersQuery>,
) -> Result<HttpResponse, ApiError> {
    let file_name = match query.file_name.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiError::InvalidArgument("A file name is required.".to_string())),
    };
    let stream_type = match query.stream_type.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiError::InvalidArgument("A stream type is required.".to_string())),
    };

    let headers = get_file_headers(&state, stream_type, file_name).await?;
    Ok(HttpResponse::Ok().json(headers))
}

/// Resolves the object and extracts its flag headers.
pub(crate) async fn get_file_headers(
    state: &AppState,
    stream_type: &str,
    file_name: &str,
) -> Result<Vec<String>, ApiError> {
    let payload = super::resolve_object(state, stream_type, file_name).await?;
    Ok(flag_headers(&payload))
}

/// Extracts the `_import_flag` column names from the first line.
///
/// A plain comma split: header names are controlled by the ingestion
/// pipeline and never contain quoted commas. An empty or absent first
/// line yields an empty list, not an error.
fn flag_headers(payload: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(payload);
    let Some(first_line) = text.lines().next() else {
        return Vec::new();
    };
    first_line
        .split(',')
        .map(|name| name.trim().trim_matches('"').to_string())
        .filter(|name| name.ends_with(FLAG_SUFFIX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::state_with_store;
    use crate::storage::MemoryBlobStore;
    use chrono::{TimeZone, Utc};

    #[test]
    fn only_flag_headers_are_kept_in_original_order() {
        let headers = flag_headers(
            b"id,salesforce_account_number_import_flag,name,diabetes_import_flag\n1,x,ann,y\n",
        );
        assert_eq!(
            headers,
            ["salesforce_account_number_import_flag", "diabetes_import_flag"]
        );
    }

    #[test]
    fn names_are_trimmed_and_unquoted() {
        let headers = flag_headers(b" \"flu_import_flag\" , name \n");
        assert_eq!(headers, ["flu_import_flag"]);
    }

    #[test]
    fn empty_payload_and_blank_first_line_yield_nothing() {
        assert!(flag_headers(b"").is_empty());
        assert!(flag_headers(b"\nflu_import_flag\n").is_empty());
    }

    #[test]
    fn headers_without_the_suffix_yield_nothing() {
        assert!(flag_headers(b"id,name,import_flags\n").is_empty());
    }

    #[actix_web::test]
    async fn missing_object_fails_with_not_found() {
        let state = state_with_store(MemoryBlobStore::new().with_container("fs-dtc"));
        let err = get_file_headers(&state, "Direct-to-Consumer (DTC)", "gone.csv")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[actix_web::test]
    async fn flag_headers_come_back_for_a_stored_file() {
        let stamp = Utc.with_ymd_and_hms(2026, 6, 30, 23, 59, 0).unwrap();
        let state = state_with_store(MemoryBlobStore::new().with_blob(
            "fs-dtc",
            "landing/dtc_june.csv",
            "member_id,flu_import_flag,dental_import_flag\n7,1,0\n",
            stamp,
        ));
        let headers = get_file_headers(&state, "Direct-to-Consumer (DTC)", "dtc_june.csv")
            .await
            .unwrap();
        assert_eq!(headers, ["flu_import_flag", "dental_import_flag"]);
    }
}
