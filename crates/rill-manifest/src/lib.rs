//! # rill-manifest
//!
//! Typed `package.json` model and loader for the rill config generator.
//!
//! npm manifests are open-ended JSON objects; this crate narrows them to
//! the entry-point and dependency fields the build-config derivation
//! consumes, as a strongly-typed optional-field record rather than a
//! loosely-keyed map. Loading validates the one field every package must
//! carry (`main`); everything else stays optional and is interpreted
//! downstream.

pub mod browser;
pub mod error;
pub mod manifest;

pub use browser::{BrowserField, BrowserOverride};
pub use error::{ManifestError, Result};
pub use manifest::{Manifest, RollupOptions};
