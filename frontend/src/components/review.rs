//! Step 3: read-only review of the draft and submission.
//!
//! Submission has no backend write path; the root component logs the
//! serialized draft to the console and resets the wizard.

use common::model::campaign::CampaignDraft;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReviewProps {
    pub draft: CampaignDraft,
    pub on_back: Callback<()>,
    pub on_submit: Callback<()>,
}

pub struct Review;

impl Component for Review {
    type Message = ();
    type Properties = ReviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let draft = &ctx.props().draft;

        let description = if draft.description.is_empty() {
            "(none)".to_string()
        } else {
            draft.description.clone()
        };

        // Stable display order for the selected care gaps.
        let mut care_gaps: Vec<(&String, &Vec<String>)> = draft.care_gaps.iter().collect();
        care_gaps.sort_by(|a, b| a.0.cmp(b.0));

        html! {
            <div class="step-panel">
                <h2>{ "Review" }</h2>
                <p class="hint">{ "Check the campaign details before submitting." }</p>

                { summary_row("Campaign Name", draft.campaign_name.clone()) }
                { summary_row("Description", description) }
                { summary_row("Care-Flow Stream", or_none(&draft.care_flow_stream)) }
                { summary_row(
                    "Partner",
                    draft.partner_name.clone().unwrap_or_else(|| "(none)".to_string()),
                ) }
                { summary_row(
                    "Audience File",
                    draft
                        .selected_audience_file
                        .clone()
                        .unwrap_or_else(|| "(none)".to_string()),
                ) }

                <h3>{ "Selected Care Gaps" }</h3>
                if care_gaps.is_empty() {
                    <p class="hint">{ "No care gaps selected." }</p>
                }
                { for care_gaps.iter().map(|(category, options)| {
                    summary_row(category.as_str(), options.join(", "))
                }) }

                <div class="step-nav">
                    <button class="secondary" onclick={ctx.props().on_back.reform(|_| ())}>
                        { "Back" }
                    </button>
                    <button onclick={ctx.props().on_submit.reform(|_| ())}>
                        { "Submit Campaign" }
                    </button>
                </div>
            </div>
        }
    }
}

fn or_none(value: &str) -> String {
    if value.is_empty() {
        "(none)".to_string()
    } else {
        value.to_string()
    }
}

fn summary_row(label: &str, value: String) -> Html {
    html! {
        <div class="summary-row">
            <span class="label">{ label.to_string() }</span>
            <span>{ value }</span>
        </div>
    }
}
