//! Error types for manifest loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no package.json found at {0}")]
    NotFound(PathBuf),

    #[error("invalid package.json at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid manifest value: {0}")]
    InvalidValue(serde_json::Error),

    #[error("required field \"main\" missing in package.json")]
    MissingMain,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
