//! View rendering for the audience file selector.
//!
//! A dropdown of available files (disabled until a stream is chosen),
//! followed by the validation summary and the paginated preview table.
//! Pagination is purely presentational: the backend returns the whole
//! file and the table shows one page of it.

use num_format::{Locale, ToFormattedString};
use web_sys::{Event, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::audience::FileMetadata;

use super::messages::Msg;
use super::state::AudienceSelector;

pub fn view(component: &AudienceSelector, ctx: &Context<AudienceSelector>) -> Html {
    let link = ctx.link();
    let disabled = ctx.props().care_flow_stream.is_empty();

    let on_file_change = link.callback(|e: Event| {
        Msg::FileChosen(e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    html! {
        <div class="audience-selector">
            <h3>{ "Target Audience File" }</h3>
            <p class="hint">
                { "Choose a pre-ingested CSV file. A validation summary and preview will appear." }
            </p>

            <select disabled={disabled} onchange={on_file_change}>
                <option value="" selected={component.selected_file.is_empty()}>
                    { "-- Please choose a file --" }
                </option>
                { for component.file_list.iter().map(|file| file_option(component, file)) }
            </select>

            { validation_summary(component) }

            if let Some(error) = &component.error {
                <p class="error">{ format!("Error: {error}") }</p>
            }

            if component.loading {
                <p class="hint">{ "Loading preview..." }</p>
            } else if !component.preview.is_empty() {
                <div class="preview">
                    <h4>{ format!("File Preview: {}", component.selected_file) }</h4>
                    { preview_table(component, link) }
                </div>
            }
        </div>
    }
}

fn file_option(component: &AudienceSelector, file: &FileMetadata) -> Html {
    let label = format!(
        "{} ({})",
        file.file_name,
        file.date_modified.format("%b %d, %Y %H:%M")
    );
    html! {
        <option
            value={file.file_name.clone()}
            selected={component.selected_file == file.file_name}
        >
            { label }
        </option>
    }
}

fn validation_summary(component: &AudienceSelector) -> Html {
    let Some(summary) = &component.validation else {
        return Html::default();
    };
    let members = summary.members_found.to_formatted_string(&Locale::en);
    html! {
        <div class="validation-summary">
            <h4>{ "Validation Summary" }</h4>
            <p class="ok">{ format!("{members} Members Found") }</p>
            <p class={if summary.has_mandatory_headers { "ok" } else { "warn" }}>
                {
                    if summary.has_mandatory_headers {
                        "Mandatory Headers Found"
                    } else {
                        "Mandatory Headers Missing"
                    }
                }
            </p>
        </div>
    }
}

fn preview_table(component: &AudienceSelector, link: &Scope<AudienceSelector>) -> Html {
    let headers = component.preview_headers();
    html! {
        <>
            <table class="preview-table">
                <thead>
                    <tr>
                        { for headers.iter().map(|header| html! { <th>{ header.as_str() }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for component.page_rows().iter().map(|row| html! {
                        <tr>
                            { for headers.iter().map(|header| html! {
                                <td>{ row.get(header).and_then(|v| v.as_str()).unwrap_or_default() }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
            { pagination(component, link) }
        </>
    }
}

fn pagination(component: &AudienceSelector, link: &Scope<AudienceSelector>) -> Html {
    let page = component.page;
    let total = component.preview.len();
    let start = page * component.rows_per_page + 1;
    let end = ((page + 1) * component.rows_per_page).min(total);
    let last_page = component.page_count().saturating_sub(1);

    let on_rows_change = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::SetRowsPerPage(value.parse().unwrap_or(5))
    });

    html! {
        <div class="pagination">
            <label>
                { "Rows per page: " }
                <select onchange={on_rows_change}>
                    { for [5usize, 10, 25, 50].iter().map(|n| html! {
                        <option value={n.to_string()} selected={component.rows_per_page == *n}>
                            { n.to_string() }
                        </option>
                    }) }
                </select>
            </label>
            <span>{ format!("{start}-{end} of {total}") }</span>
            <button
                disabled={page == 0}
                onclick={link.callback(move |_| Msg::SetPage(page.saturating_sub(1)))}
            >
                { "Prev" }
            </button>
            <button
                disabled={page >= last_page}
                onclick={link.callback(move |_| Msg::SetPage(page + 1))}
            >
                { "Next" }
            </button>
        </div>
    }
}
