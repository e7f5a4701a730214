//! Cross-step state for the campaign-creation wizard.
//!
//! The wizard keeps a single [`CampaignDraft`] for the whole session. The
//! root component owns it, each step receives a snapshot through props, and
//! every mutation goes through [`CampaignDraft::apply`] with a
//! [`CampaignUpdate`] naming the one field being replaced. Nothing here is
//! persisted anywhere; submitting the wizard only logs the draft.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The logical audience-data sources a campaign can target. Each label maps
/// to a physical storage container in the backend configuration.
pub const CARE_FLOW_STREAMS: [&str; 2] = ["Healthcare Partner", "Direct-to-Consumer (DTC)"];

/// In-progress campaign data collected across the wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    /// Selected care-flow stream label, empty until the user picks one.
    pub care_flow_stream: String,
    /// Partner name detected in the first preview row of the selected file.
    pub partner_name: Option<String>,
    pub campaign_name: String,
    pub description: String,
    /// Basename of the chosen audience file.
    pub selected_audience_file: Option<String>,
    /// Selected care-gap names, keyed by category. Categories with no
    /// selected options are absent from the map.
    pub care_gaps: HashMap<String, Vec<String>>,
}

/// A single-field replacement applied to a [`CampaignDraft`].
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignUpdate {
    CareFlowStream(String),
    PartnerName(Option<String>),
    CampaignName(String),
    Description(String),
    SelectedAudienceFile(Option<String>),
    CareGaps(HashMap<String, Vec<String>>),
}

impl CampaignDraft {
    /// Replaces the one field named by `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: CampaignUpdate) {
        match update {
            CampaignUpdate::CareFlowStream(value) => self.care_flow_stream = value,
            CampaignUpdate::PartnerName(value) => self.partner_name = value,
            CampaignUpdate::CampaignName(value) => self.campaign_name = value,
            CampaignUpdate::Description(value) => self.description = value,
            CampaignUpdate::SelectedAudienceFile(value) => self.selected_audience_file = value,
            CampaignUpdate::CareGaps(value) => self.care_gaps = value,
        }
    }

    /// Returns the draft to its pristine state, e.g. after submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_draft() -> CampaignDraft {
        CampaignDraft {
            care_flow_stream: "Healthcare Partner".to_string(),
            partner_name: Some("Acme Health".to_string()),
            campaign_name: "Flu & Dental Checkup".to_string(),
            description: "Autumn outreach".to_string(),
            selected_audience_file: Some("members.csv".to_string()),
            care_gaps: HashMap::from([(
                "Vaccinations".to_string(),
                vec!["Flu".to_string(), "Covid".to_string()],
            )]),
        }
    }

    #[test]
    fn apply_replaces_only_the_named_field() {
        let mut draft = populated_draft();
        draft.apply(CampaignUpdate::CampaignName("Renamed".to_string()));

        let expected = CampaignDraft {
            campaign_name: "Renamed".to_string(),
            ..populated_draft()
        };
        assert_eq!(draft, expected);
    }

    #[test]
    fn apply_can_clear_optional_fields() {
        let mut draft = populated_draft();
        draft.apply(CampaignUpdate::SelectedAudienceFile(None));
        draft.apply(CampaignUpdate::PartnerName(None));

        assert_eq!(draft.selected_audience_file, None);
        assert_eq!(draft.partner_name, None);
        assert_eq!(draft.campaign_name, "Flu & Dental Checkup");
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut draft = populated_draft();
        draft.reset();
        assert_eq!(draft, CampaignDraft::default());
    }

    #[test]
    fn draft_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(populated_draft()).unwrap();
        assert!(json.get("careFlowStream").is_some());
        assert!(json.get("selectedAudienceFile").is_some());
        assert!(json.get("care_flow_stream").is_none());
    }
}
