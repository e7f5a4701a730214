//! Root component of the campaign-creation wizard.
//!
//! Owns the cross-step [`CampaignDraft`] and the active step index. Steps
//! receive a snapshot of the draft through props and report edits back as
//! [`CampaignUpdate`] messages; `App` is the only place the draft is
//! mutated. Submission has no backend write path yet, so it serializes the
//! draft to the browser console and resets the wizard.

use common::model::campaign::{CampaignDraft, CampaignUpdate};
use gloo_console::log;
use yew::prelude::*;

use crate::components::campaign_info::CampaignInfo;
use crate::components::care_gaps::CareGapSelection;
use crate::components::review::Review;
use crate::components::stepper::{Stepper, STEP_LABELS};

pub struct App {
    draft: CampaignDraft,
    active_step: usize,
}

pub enum Msg {
    Update(CampaignUpdate),
    Next,
    Back,
    Submit,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: CampaignDraft::default(),
            active_step: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Update(update) => {
                self.draft.apply(update);
                true
            }
            Msg::Next => {
                if self.active_step + 1 < STEP_LABELS.len() {
                    self.active_step += 1;
                }
                true
            }
            Msg::Back => {
                self.active_step = self.active_step.saturating_sub(1);
                true
            }
            Msg::Submit => {
                // No persistence endpoint exists; submit only logs the draft.
                match serde_json::to_string_pretty(&self.draft) {
                    Ok(json) => log!("Campaign submitted:", json),
                    Err(err) => log!("Could not serialize campaign draft:", err.to_string()),
                }
                self.draft.reset();
                self.active_step = 0;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="wizard-root">
                <h1>{ "Campaign Creation Wizard" }</h1>
                <Stepper active={self.active_step} />
                {
                    match self.active_step {
                        0 => html! {
                            <CampaignInfo
                                draft={self.draft.clone()}
                                on_update={link.callback(Msg::Update)}
                                on_next={link.callback(|_: ()| Msg::Next)}
                            />
                        },
                        1 => html! {
                            <CareGapSelection
                                selected={self.draft.care_gaps.clone()}
                                on_update={link.callback(Msg::Update)}
                                on_back={link.callback(|_: ()| Msg::Back)}
                                on_next={link.callback(|_: ()| Msg::Next)}
                            />
                        },
                        _ => html! {
                            <Review
                                draft={self.draft.clone()}
                                on_back={link.callback(|_: ()| Msg::Back)}
                                on_submit={link.callback(|_: ()| Msg::Submit)}
                            />
                        },
                    }
                }
            </div>
        }
    }
}
