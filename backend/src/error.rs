//! API error kinds and their HTTP mapping.
//!
//! Four kinds cover every failure the endpoints can produce:
//! - [`ApiError::InvalidArgument`] → 400 with the message in the body
//! - [`ApiError::NotFound`] → 404 with the message in the body
//! - [`ApiError::Storage`] → 500 with a generic body; the wrapped
//!   [`StorageError`] (transport code + message) goes to the log only
//! - [`ApiError::Query`] → 500 with a generic body, details logged
//!
//! Handlers return `Result<HttpResponse, ApiError>` and let actix render
//! the error through [`ResponseError`]. No retries happen anywhere; every
//! failure surfaces on first occurrence.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A bad or missing request parameter, e.g. an unknown stream type.
    #[error("{0}")]
    InvalidArgument(String),

    /// A referenced file or object does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The blob store failed for a reason other than "container missing".
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The care-gap reference table could not be read.
    #[error("reference data query failed: {0}")]
    Query(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InvalidArgument(message) | ApiError::NotFound(message) => {
                HttpResponse::build(self.status_code()).body(message.clone())
            }
            // 5xx bodies stay generic; the transport details are logged
            // server-side and never reach the client.
            ApiError::Storage(err) => {
                error!("storage failure: {err}");
                HttpResponse::InternalServerError()
                    .body("An error occurred while communicating with storage.")
            }
            ApiError::Query(err) => {
                error!("care gap query failed: {err}");
                HttpResponse::InternalServerError()
                    .body("An error occurred while communicating with the database.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_message() {
        let err = ApiError::InvalidArgument("Invalid stream type: Mail".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::NotFound("Blob 'landing/x.csv' not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn server_errors_map_to_500_and_hide_details() {
        let err = ApiError::Storage(StorageError::new("generic", "socket reset"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::Query("no such table: care_gaps".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
