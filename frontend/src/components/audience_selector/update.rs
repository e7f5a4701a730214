//! Update function for the audience file selector.
//!
//! Elm-style: receives the current state, the context, and a `Msg`,
//! mutates the state, and returns whether the view should re-render.
//! Choosing a file kicks off the preview request; when it lands, the
//! validation summary is computed and the partner name (if any) is
//! reported to the parent.

use common::model::audience::PreviewRecord;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{AudienceSelector, ValidationSummary};

/// Column every audience file must carry to be usable by campaign logic.
const MANDATORY_HEADER: &str = "salesforce_account_number";

pub fn update(
    component: &mut AudienceSelector,
    ctx: &Context<AudienceSelector>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FilesLoaded(Ok(files)) => {
            component.file_list = files;
            component.error = None;
            true
        }
        Msg::FilesLoaded(Err(message)) => {
            component.error = Some(message);
            true
        }
        Msg::FileChosen(file_name) => {
            component.selected_file = file_name.clone();
            component.preview.clear();
            component.validation = None;
            component.page = 0;
            component.error = None;
            ctx.props().on_partner_name.emit(None);

            if file_name.is_empty() {
                ctx.props().on_file_select.emit(None);
                return true;
            }
            ctx.props().on_file_select.emit(Some(file_name.clone()));

            component.loading = true;
            let link = ctx.link().clone();
            let stream = ctx.props().care_flow_stream.clone();
            spawn_local(async move {
                let result = request_preview(&stream, &file_name).await;
                link.send_message(Msg::PreviewLoaded(result));
            });
            true
        }
        Msg::PreviewLoaded(Ok(rows)) => {
            component.loading = false;
            if let Some(first) = rows.first() {
                if let Some(partner) = first.get("partner_name").and_then(|v| v.as_str()) {
                    ctx.props().on_partner_name.emit(Some(partner.to_string()));
                }
                component.validation = Some(ValidationSummary {
                    members_found: rows.len(),
                    has_mandatory_headers: first.contains_key(MANDATORY_HEADER),
                });
            }
            component.preview = rows;
            true
        }
        Msg::PreviewLoaded(Err(message)) => {
            component.loading = false;
            component.error = Some(message);
            true
        }
        Msg::SetPage(page) => {
            component.page = page.min(component.page_count().saturating_sub(1));
            true
        }
        Msg::SetRowsPerPage(rows) => {
            component.rows_per_page = rows.max(1);
            component.page = 0;
            true
        }
    }
}

async fn request_preview(stream: &str, file_name: &str) -> Result<Vec<PreviewRecord>, String> {
    let response = Request::get("/api/audiences/file-preview")
        .query([("fileName", file_name), ("streamType", stream)])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() != 200 {
        return Err(response
            .text()
            .await
            .unwrap_or_else(|_| format!("Failed to fetch preview for {file_name}.")));
    }
    response.json().await.map_err(|e| e.to_string())
}
