//! Audience file selector: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, and view
//! rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `AudienceSelectorProps`,
//!   `AudienceSelector`).
//! - Fetch the available-files listing whenever the care-flow stream prop
//!   changes (and once on creation when a stream is already set).
//! - Delegate message handling to `update::update` and rendering to
//!   `view::view`.

use common::model::audience::FileMetadata;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AudienceSelectorProps;
pub use state::AudienceSelector;

impl Component for AudienceSelector {
    type Message = Msg;
    type Properties = AudienceSelectorProps;

    fn create(ctx: &Context<Self>) -> Self {
        if !ctx.props().care_flow_stream.is_empty() {
            fetch_file_list(ctx);
        }
        AudienceSelector::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().care_flow_stream != old_props.care_flow_stream {
            self.reset_for_stream();
            if !ctx.props().care_flow_stream.is_empty() {
                fetch_file_list(ctx);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

/// Requests the file listing for the current stream and reports the result
/// back as a message.
fn fetch_file_list(ctx: &Context<AudienceSelector>) {
    let link = ctx.link().clone();
    let stream = ctx.props().care_flow_stream.clone();
    spawn_local(async move {
        let result = request_file_list(&stream).await;
        link.send_message(Msg::FilesLoaded(result));
    });
}

async fn request_file_list(stream: &str) -> Result<Vec<FileMetadata>, String> {
    let response = Request::get("/api/audiences/available-files")
        .query([("streamType", stream)])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() != 200 {
        return Err(response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to fetch file list from server.".to_string()));
    }
    response.json().await.map_err(|e| e.to_string())
}
