use common::model::audience::{FileMetadata, PreviewRecord};

pub enum Msg {
    FilesLoaded(Result<Vec<FileMetadata>, String>),
    FileChosen(String),
    PreviewLoaded(Result<Vec<PreviewRecord>, String>),
    SetPage(usize),
    SetRowsPerPage(usize),
}
