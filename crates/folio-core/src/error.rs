use crate::model::{DocumentClass, ExtractionMode};

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("failed to open document: {0}")]
    DocumentUnreadable(String),

    #[error("document has no pages")]
    EmptyDocument,

    #[error("page {0} is out of range")]
    PageOutOfRange(usize),

    #[error(
        "cannot process {class} document with {requested} mode; upgrade to {recommended} mode"
    )]
    ModeRejected {
        class: DocumentClass,
        requested: ExtractionMode,
        recommended: ExtractionMode,
    },

    #[error("unrecognized extraction mode '{0}'. Expected one of: fast, rich, pro")]
    UnknownMode(String),

    #[error("unrecognized text direction '{0}'. Expected one of: auto, ltr, rtl")]
    UnknownDirection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
