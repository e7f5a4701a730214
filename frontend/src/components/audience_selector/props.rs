//! Properties for the audience file selector.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AudienceSelectorProps {
    /// Care-flow stream whose landing zone is listed. An empty string
    /// disables the selector until the user picks a stream.
    pub care_flow_stream: String,

    /// Raised with the chosen file name, or `None` when the selection is
    /// cleared.
    pub on_file_select: Callback<Option<String>>,

    /// Raised with the `partner_name` value found in the first preview
    /// row, or `None` when there is no selection or no such column.
    pub on_partner_name: Callback<Option<String>>,
}
