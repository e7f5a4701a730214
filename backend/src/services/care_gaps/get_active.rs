//! Fetches the active care-gap definitions from the reference table.
//!
//! Backend logic for `GET /api/care-gaps`. A plain filtered SELECT: rows
//! with `is_active = 1`, in whatever order SQLite yields them. An empty
//! result is valid (and logged as a warning, since it usually means the
//! reference table was never seeded); a query failure maps to a generic
//! 500 without leaking database details.

use std::path::Path;

use actix_web::{web, HttpResponse};
use common::model::care_gap::CareGap;
use log::{info, warn};
use rusqlite::Connection;

use crate::error::ApiError;
use crate::state::AppState;

/// Actix handler for `GET /api/care-gaps`.
pub(crate) async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    info!("fetching active care gaps from the reference table");
    let care_gaps = get_active_care_gaps(&state.db_path)?;
    Ok(HttpResponse::Ok().json(care_gaps))
}

/// Reads all active care-gap rows.
///
/// The table is reference data with no write path in this system, so a
/// fresh connection per request is fine; SQLite keeps this cheap.
pub(crate) fn get_active_care_gaps(db_path: &Path) -> Result<Vec<CareGap>, ApiError> {
    let query_failed = |e: rusqlite::Error| ApiError::Query(e.to_string());

    let conn = Connection::open(db_path).map_err(query_failed)?;
    let mut stmt = conn
        .prepare(
            "SELECT care_gap_id, care_gap_name, care_gap_category, \
             care_gap_abbreviation, csv_import_flag_name \
             FROM care_gaps WHERE is_active = 1",
        )
        .map_err(query_failed)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(CareGap {
                care_gap_id: row.get(0)?,
                care_gap_name: row.get(1)?,
                care_gap_category: row.get(2)?,
                care_gap_abbreviation: row.get(3)?,
                csv_import_flag_name: row.get(4)?,
            })
        })
        .map_err(query_failed)?;

    let mut care_gaps = Vec::new();
    for row in rows {
        care_gaps.push(row.map_err(query_failed)?);
    }

    if care_gaps.is_empty() {
        warn!("the query for active care gaps returned 0 records; is the care_gaps table seeded?");
    }
    Ok(care_gaps)
}
