use serde::{Deserialize, Serialize};

/// One active care-gap definition from the reference table, as returned by
/// `GET /api/care-gaps`.
///
/// This is read-only reference data: the table is populated externally and
/// the API only ever exposes rows with `is_active = 1`, so the flag itself
/// is not part of the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareGap {
    pub care_gap_id: i64,
    pub care_gap_name: String,
    /// Grouping label used by the wizard's care-gap selection step.
    pub care_gap_category: String,
    pub care_gap_abbreviation: String,
    /// Name of the CSV column that flags eligibility for this care gap.
    /// By convention these end in `_import_flag`.
    pub csv_import_flag_name: String,
}
