//! Error types for config derivation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Manifest(#[from] rill_manifest::ManifestError),

    #[error("required field \"main\" missing in package.json")]
    MissingMain,

    #[error("field \"name\" is required to derive a UMD global name")]
    MissingPackageName,
}
