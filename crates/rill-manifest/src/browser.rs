//! The package.json `browser` field, basic and advanced forms.
//!
//! See <https://github.com/defunctzombie/package-browser-field-spec> for
//! the convention this models.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Browser-specific overrides declared by a package.
///
/// The basic form is a single path standing in for `main` in browser
/// builds. The advanced form maps entry-path values (the literal strings
/// stored in the manifest's own `main`/`module` fields) to replacement
/// paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrowserField {
    /// Alternative main (basic form)
    Path(String),
    /// Specific file replacements (advanced form)
    Replacements(IndexMap<String, BrowserOverride>),
}

/// One advanced-form replacement value: an alternate path, or `false` to
/// drop the module from browser builds entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrowserOverride {
    Path(String),
    Ignore(bool),
}

impl BrowserField {
    /// Look up the advanced-form replacement for an entry value.
    ///
    /// The lookup keys on the literal string stored in the manifest, not a
    /// canonicalized path; a differently formatted but equivalent path
    /// silently misses. Missing keys, `false` values, and empty
    /// replacement paths all yield `None`.
    pub fn replacement_for(&self, entry: &str) -> Option<&str> {
        match self {
            BrowserField::Path(_) => None,
            BrowserField::Replacements(map) => match map.get(entry)? {
                BrowserOverride::Path(path) if !path.is_empty() => Some(path),
                _ => None,
            },
        }
    }
}
