//! # rill-config
//!
//! Build-configuration derivation from package manifests.
//!
//! Given a parsed `package.json` and a base directory, this crate computes
//! the ordered list of bundler output targets the package's entry fields
//! imply — CommonJS `main`, ES-module `module`, `browser` overrides in
//! both their basic and advanced forms, and the dev/prod UMD pair behind
//! `unpkg` — plus the entry-point path and external-module list that
//! complete a build configuration.
//!
//! The derivation is a pure function of manifest + base directory: no
//! filesystem access, no shared state, identical inputs always produce
//! identical, identically-ordered output. Consumers may rely on the target
//! order positionally.

pub mod config;
pub mod error;
pub mod ident;
pub mod input;
pub mod output;

pub use config::{create_config, create_multi_config, BuildConfig};
pub use error::{ConfigError, Result};
pub use ident::global_ident;
pub use input::{input_path, DEFAULT_ROOT_DIR};
pub use output::{
    output_targets, BundleEnv, ExportsMode, ModuleFormat, OutputLocation, OutputTarget,
    UmdOptions, DEFAULT_CHUNK_FILE_NAMES, DEFAULT_ENTRY_FILE_NAMES,
};
