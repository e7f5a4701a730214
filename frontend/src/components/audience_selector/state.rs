//! Component state for the audience file selector.

use common::model::audience::{FileMetadata, PreviewRecord};

/// Client-side validation outcome for the selected file's preview.
pub struct ValidationSummary {
    /// Number of data rows in the file.
    pub members_found: usize,
    /// Whether the mandatory account-number column is present.
    pub has_mandatory_headers: bool,
}

/// State container for the audience selector.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct AudienceSelector {
    /// Files listed for the current stream, newest first as the API
    /// returns them.
    pub file_list: Vec<FileMetadata>,
    /// Basename of the selected file; empty when nothing is chosen.
    pub selected_file: String,
    /// All preview rows of the selected file.
    pub preview: Vec<PreviewRecord>,
    pub validation: Option<ValidationSummary>,
    /// True while the preview request is in flight.
    pub loading: bool,
    pub error: Option<String>,
    /// Zero-based preview page.
    pub page: usize,
    pub rows_per_page: usize,
}

impl AudienceSelector {
    pub fn new() -> Self {
        Self {
            file_list: Vec::new(),
            selected_file: String::new(),
            preview: Vec::new(),
            validation: None,
            loading: false,
            error: None,
            page: 0,
            rows_per_page: 5,
        }
    }

    /// Clears everything tied to the previous stream selection.
    pub fn reset_for_stream(&mut self) {
        self.file_list.clear();
        self.selected_file.clear();
        self.preview.clear();
        self.validation = None;
        self.error = None;
        self.page = 0;
    }

    /// Header names of the preview, in CSV column order.
    pub fn preview_headers(&self) -> Vec<String> {
        self.preview
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// The slice of rows visible on the current page.
    pub fn page_rows(&self) -> &[PreviewRecord] {
        let start = (self.page * self.rows_per_page).min(self.preview.len());
        let end = (start + self.rows_per_page).min(self.preview.len());
        &self.preview[start..end]
    }

    pub fn page_count(&self) -> usize {
        self.preview.len().div_ceil(self.rows_per_page.max(1))
    }
}
