//! Care-gap reference data service.
//!
//! A single read-only endpoint over the `care_gaps` SQLite table, which is
//! populated and maintained externally. The wizard uses it to build the
//! care-gap selection step.
//!
//! The provided route is:
//! - `GET /api/care-gaps`: the master list of active care-gap
//!   definitions. Inactive rows are never exposed.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod get_active;

const API_PATH: &str = "/api/care-gaps";

/// Configures and returns the Actix scope for the care-gap routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get_active::process))
}
