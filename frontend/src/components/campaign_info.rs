//! Step 1: campaign identification and audience file selection.
//!
//! Collects the campaign name and description (validated client-side on
//! "Next Step"), the care-flow stream, and — through the embedded
//! [`AudienceSelector`] — the target audience file. All edits are pushed
//! up to the root component as [`CampaignUpdate`]s; this component only
//! keeps its validation flags locally.

use common::model::campaign::{CampaignDraft, CampaignUpdate, CARE_FLOW_STREAMS};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::prelude::*;

use super::audience_selector::AudienceSelector;

#[derive(Properties, PartialEq)]
pub struct CampaignInfoProps {
    pub draft: CampaignDraft,
    pub on_update: Callback<CampaignUpdate>,
    pub on_next: Callback<()>,
}

pub enum Msg {
    NameInput(String),
    DescriptionInput(String),
    StreamChange(String),
    FileSelected(Option<String>),
    PartnerNameFound(Option<String>),
    NextClicked,
}

pub struct CampaignInfo {
    name_error: bool,
    description_error: bool,
}

impl Component for CampaignInfo {
    type Message = Msg;
    type Properties = CampaignInfoProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name_error: false,
            description_error: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::NameInput(value) => {
                self.name_error = false;
                props.on_update.emit(CampaignUpdate::CampaignName(value));
                false
            }
            Msg::DescriptionInput(value) => {
                self.description_error = false;
                props.on_update.emit(CampaignUpdate::Description(value));
                false
            }
            Msg::StreamChange(value) => {
                // A new stream invalidates the file selection.
                props.on_update.emit(CampaignUpdate::CareFlowStream(value));
                props.on_update.emit(CampaignUpdate::SelectedAudienceFile(None));
                props.on_update.emit(CampaignUpdate::PartnerName(None));
                false
            }
            Msg::FileSelected(file) => {
                props.on_update.emit(CampaignUpdate::SelectedAudienceFile(file));
                false
            }
            Msg::PartnerNameFound(partner) => {
                props.on_update.emit(CampaignUpdate::PartnerName(partner));
                false
            }
            Msg::NextClicked => {
                let draft = &props.draft;
                self.name_error = draft.campaign_name.trim().is_empty();
                self.description_error =
                    !draft.description.is_empty() && draft.description.trim().is_empty();
                if !self.name_error && !self.description_error {
                    props.on_next.emit(());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let draft = &ctx.props().draft;

        let on_name_input = link.callback(|e: InputEvent| {
            Msg::NameInput(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_description_input = link.callback(|e: InputEvent| {
            Msg::DescriptionInput(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        });
        let on_stream_change = link.callback(|e: Event| {
            Msg::StreamChange(e.target_unchecked_into::<HtmlSelectElement>().value())
        });

        html! {
            <div class="step-panel">
                <h2>{ "Campaign Identification" }</h2>
                <p class="hint">
                    { "Enter basic information about your campaign and pick its target audience." }
                </p>

                <label class="field">
                    <span>{ "Campaign Name *" }</span>
                    <input
                        type="text"
                        placeholder="e.g., Flu & Dental Checkup Campaign"
                        value={draft.campaign_name.clone()}
                        oninput={on_name_input}
                    />
                    if self.name_error {
                        <span class="field-error">{ "Campaign Name is required" }</span>
                    }
                </label>

                <label class="field">
                    <span>{ "Description" }</span>
                    <textarea
                        rows="3"
                        placeholder="Briefly describe the purpose and goals of this campaign..."
                        value={draft.description.clone()}
                        oninput={on_description_input}
                    />
                    if self.description_error {
                        <span class="field-error">{ "Description cannot be empty if provided" }</span>
                    }
                </label>

                <label class="field">
                    <span>{ "Care-Flow Stream" }</span>
                    <select onchange={on_stream_change}>
                        <option value="" selected={draft.care_flow_stream.is_empty()}>
                            { "-- Please choose a stream --" }
                        </option>
                        { for CARE_FLOW_STREAMS.iter().map(|stream| html! {
                            <option value={*stream} selected={draft.care_flow_stream == *stream}>
                                { *stream }
                            </option>
                        }) }
                    </select>
                </label>

                <AudienceSelector
                    care_flow_stream={draft.care_flow_stream.clone()}
                    on_file_select={link.callback(Msg::FileSelected)}
                    on_partner_name={link.callback(Msg::PartnerNameFound)}
                />

                <div class="step-nav">
                    <button onclick={link.callback(|_| Msg::NextClicked)}>{ "Next Step" }</button>
                </div>
            </div>
        }
    }
}
