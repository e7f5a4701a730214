//! Full-file CSV preview for a selected audience file.
//!
//! Backend logic for `GET /api/audiences/file-preview`. The object is
//! downloaded whole and parsed with the first row as headers; every data
//! row becomes one JSON object whose keys follow the header order and
//! whose values are the raw trimmed cell strings. There is no pagination
//! here; trimming the result down to a page is the frontend's concern.

use actix_web::{web, HttpResponse};
use common::model::audience::PreviewRecord;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FilePreviewQuery {
    #[serde(default)]
    file_name: Option<String>,
    #[serde(default)]
    stream_type: Option<String>,
}

/// Actix handler for `GET /api/audiences/file-preview`.
pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<FilePreviewQuery>,
) -> Result<HttpResponse, ApiError> {
    let file_name = match query.file_name.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiError::InvalidArgument("A file name is required.".to_string())),
    };
    let stream_type = match query.stream_type.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiError::InvalidArgument("A stream type is required.".to_string())),
    };

    let records = get_file_preview(&state, stream_type, file_name).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Resolves the object and materializes every data row as a
/// [`PreviewRecord`].
pub(crate) async fn get_file_preview(
    state: &AppState,
    stream_type: &str,
    file_name: &str,
) -> Result<Vec<PreviewRecord>, ApiError> {
    let payload = super::resolve_object(state, stream_type, file_name).await?;
    parse_preview(&payload, file_name)
}

/// Parses CSV bytes into loosely-typed rows.
///
/// Values are kept as strings: the schema varies per file, so no type
/// coercion is attempted. Rows shorter than the header are padded with
/// empty strings and extra cells are dropped, matching the parser's
/// flexible mode.
fn parse_preview(payload: &[u8], file_name: &str) -> Result<Vec<PreviewRecord>, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(payload);

    let unreadable =
        |e: csv::Error| ApiError::InvalidArgument(format!("Unable to parse '{file_name}' as CSV: {e}"));

    let headers: Vec<String> = reader
        .headers()
        .map_err(unreadable)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(unreadable)?;
        let mut row = PreviewRecord::new();
        for (index, header) in headers.iter().enumerate() {
            let value = record.get(index).unwrap_or("");
            row.insert(header.clone(), Value::String(value.to_string()));
        }
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::state_with_store;
    use crate::storage::MemoryBlobStore;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use chrono::{TimeZone, Utc};

    #[::core::prelude::v1::test]
    fn one_data_row_becomes_one_string_keyed_record() {
        let rows = parse_preview(b"a,b,c\n1,2,3\n", "t.csv").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "2");
        assert_eq!(rows[0]["c"], "3");
    }

    #[::core::prelude::v1::test]
    fn values_stay_strings_without_coercion() {
        let rows = parse_preview(b"n,flag,when\n42,true,2026-01-01\n", "t.csv").unwrap();
        assert_eq!(rows[0]["n"], Value::String("42".to_string()));
        assert_eq!(rows[0]["flag"], Value::String("true".to_string()));
    }

    #[::core::prelude::v1::test]
    fn row_order_is_preserved() {
        let rows = parse_preview(b"id\n3\n1\n2\n", "t.csv").unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[::core::prelude::v1::test]
    fn columns_follow_header_order() {
        let rows = parse_preview(b"zeta,alpha\n1,2\n", "t.csv").unwrap();
        let keys: Vec<&String> = rows[0].keys().collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[::core::prelude::v1::test]
    fn quoted_and_padded_headers_are_cleaned() {
        let rows = parse_preview(b"\"name\", age \nann,40\n", "t.csv").unwrap();
        assert_eq!(rows[0]["name"], "ann");
        assert_eq!(rows[0]["age"], "40");
    }

    #[::core::prelude::v1::test]
    fn short_rows_are_padded_with_empty_strings() {
        let rows = parse_preview(b"a,b,c\n1,2\n", "t.csv").unwrap();
        assert_eq!(rows[0]["c"], "");
    }

    #[::core::prelude::v1::test]
    fn header_only_and_empty_files_have_no_rows() {
        assert!(parse_preview(b"a,b,c\n", "t.csv").unwrap().is_empty());
        assert!(parse_preview(b"", "t.csv").unwrap().is_empty());
    }

    #[actix_web::test]
    async fn missing_object_fails_with_not_found_naming_the_key() {
        let state = state_with_store(MemoryBlobStore::new().with_container("fs-partner"));
        let err = get_file_preview(&state, "Healthcare Partner", "gone.csv")
            .await
            .unwrap_err();
        match err {
            ApiError::NotFound(msg) => assert!(msg.contains("landing/gone.csv")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn http_preview_returns_rows_and_404_for_missing_files() {
        let stamp = Utc.with_ymd_and_hms(2026, 7, 3, 10, 0, 0).unwrap();
        let state = state_with_store(MemoryBlobStore::new().with_blob(
            "fs-partner",
            "landing/members.csv",
            "partner_name,salesforce_account_number\nAcme Health,001A\n",
            stamp,
        ));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(crate::services::audiences::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/audiences/file-preview?fileName=members.csv&streamType=Healthcare%20Partner")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["partner_name"], "Acme Health");

        let req = test::TestRequest::get()
            .uri("/api/audiences/file-preview?fileName=gone.csv&streamType=Healthcare%20Partner")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get()
            .uri("/api/audiences/file-preview?streamType=Healthcare%20Partner")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
