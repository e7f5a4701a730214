//! Step 2: care gap selection.
//!
//! Fetches the active care-gap definitions once and renders them grouped
//! by category. The category checkbox selects or clears the whole group;
//! categories with nothing selected are dropped from the draft map. The
//! selection itself lives in the shared draft, so navigating away and
//! back keeps it.

use std::collections::HashMap;

use common::model::campaign::CampaignUpdate;
use common::model::care_gap::CareGap;
use gloo_net::http::Request;
use web_sys::{Event, HtmlInputElement};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CareGapSelectionProps {
    /// Selected care-gap names per category, from the shared draft.
    pub selected: HashMap<String, Vec<String>>,
    pub on_update: Callback<CampaignUpdate>,
    pub on_back: Callback<()>,
    pub on_next: Callback<()>,
}

pub enum Msg {
    Loaded(Result<Vec<CareGap>, String>),
    ToggleCategory(String, bool),
    ToggleOption(String, String, bool),
}

pub struct CareGapSelection {
    care_gaps: Vec<CareGap>,
    loading: bool,
    error: Option<String>,
}

impl Component for CareGapSelection {
    type Message = Msg;
    type Properties = CareGapSelectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        fetch_care_gaps(ctx);
        Self {
            care_gaps: Vec::new(),
            loading: true,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(care_gaps)) => {
                self.loading = false;
                self.care_gaps = care_gaps;
                true
            }
            Msg::Loaded(Err(message)) => {
                self.loading = false;
                self.error = Some(message);
                true
            }
            Msg::ToggleCategory(category, checked) => {
                let mut selected = ctx.props().selected.clone();
                if checked {
                    let options: Vec<String> = self
                        .care_gaps
                        .iter()
                        .filter(|cg| cg.care_gap_category == category)
                        .map(|cg| cg.care_gap_name.clone())
                        .collect();
                    selected.insert(category, options);
                } else {
                    selected.remove(&category);
                }
                ctx.props().on_update.emit(CampaignUpdate::CareGaps(selected));
                false
            }
            Msg::ToggleOption(category, name, checked) => {
                let mut selected = ctx.props().selected.clone();
                let options = selected.entry(category.clone()).or_default();
                if checked {
                    if !options.contains(&name) {
                        options.push(name);
                    }
                } else {
                    options.retain(|existing| existing != &name);
                }
                if selected.get(&category).is_some_and(Vec::is_empty) {
                    selected.remove(&category);
                }
                ctx.props().on_update.emit(CampaignUpdate::CareGaps(selected));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let selected = &ctx.props().selected;

        html! {
            <div class="step-panel">
                <h2>{ "Care Gap Selection" }</h2>
                <p class="hint">{ "Select the care gaps you want to address in this campaign." }</p>

                if let Some(error) = &self.error {
                    <p class="error">{ format!("Error: {error}") }</p>
                }
                if self.loading {
                    <p class="hint">{ "Loading care gaps..." }</p>
                }

                <div class="care-gap-grid">
                    { for grouped(&self.care_gaps).into_iter().map(|(category, members)| {
                        category_card(link, selected, category, members)
                    }) }
                </div>

                <div class="step-nav">
                    <button class="secondary" onclick={ctx.props().on_back.reform(|_| ())}>
                        { "Back" }
                    </button>
                    <button onclick={ctx.props().on_next.reform(|_| ())}>{ "Next Step" }</button>
                </div>
            </div>
        }
    }
}

/// Groups care gaps by category, keeping the order categories first appear
/// in the reference data.
fn grouped(care_gaps: &[CareGap]) -> Vec<(String, Vec<&CareGap>)> {
    let mut groups: Vec<(String, Vec<&CareGap>)> = Vec::new();
    for care_gap in care_gaps {
        match groups
            .iter_mut()
            .find(|(category, _)| category == &care_gap.care_gap_category)
        {
            Some((_, members)) => members.push(care_gap),
            None => groups.push((care_gap.care_gap_category.clone(), vec![care_gap])),
        }
    }
    groups
}

fn category_card(
    link: &Scope<CareGapSelection>,
    selected: &HashMap<String, Vec<String>>,
    category: String,
    members: Vec<&CareGap>,
) -> Html {
    let chosen = selected.get(&category).cloned().unwrap_or_default();
    let all_selected =
        !members.is_empty() && members.iter().all(|cg| chosen.contains(&cg.care_gap_name));

    let toggle_category = {
        let category = category.clone();
        link.callback(move |e: Event| {
            Msg::ToggleCategory(
                category.clone(),
                e.target_unchecked_into::<HtmlInputElement>().checked(),
            )
        })
    };

    html! {
        <div class="care-gap-card">
            <label class="category-label">
                <input type="checkbox" checked={all_selected} onchange={toggle_category} />
                <b>{ category.clone() }</b>
            </label>
            <div class="category-options">
                { for members.iter().map(|care_gap| {
                    let name = care_gap.care_gap_name.clone();
                    let checked = chosen.contains(&name);
                    let toggle = {
                        let category = category.clone();
                        let name = name.clone();
                        link.callback(move |e: Event| {
                            Msg::ToggleOption(
                                category.clone(),
                                name.clone(),
                                e.target_unchecked_into::<HtmlInputElement>().checked(),
                            )
                        })
                    };
                    html! {
                        <label class="option-label" title={care_gap.care_gap_abbreviation.clone()}>
                            <input type="checkbox" {checked} onchange={toggle} />
                            { name.clone() }
                        </label>
                    }
                }) }
            </div>
        </div>
    }
}

fn fetch_care_gaps(ctx: &Context<CareGapSelection>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = request_care_gaps().await;
        link.send_message(Msg::Loaded(result));
    });
}

async fn request_care_gaps() -> Result<Vec<CareGap>, String> {
    let response = Request::get("/api/care-gaps")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() != 200 {
        return Err(response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to fetch care gaps from server.".to_string()));
    }
    response.json().await.map_err(|e| e.to_string())
}
