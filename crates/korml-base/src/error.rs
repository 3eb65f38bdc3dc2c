use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while importing or resolving source positions
#[derive(Debug, Error)]
pub enum BaseError {
    /// Value does not have the exported JSON shape
    #[error("invalid position JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Byte offset lies past the end of the source text
    #[error("offset {offset} is out of bounds for source of length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("failed to read source file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown log format: {0}. Supported formats: text, json")]
    UnknownLogFormat(String),
}
