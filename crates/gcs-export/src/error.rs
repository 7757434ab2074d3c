use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures only. Source-side problems (missing or unparseable
/// settings/locale files) are absorbed into the snapshot's `ok`/`error`
/// fields and never surface here.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unable to write {path}: {source}")]
    Sink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
