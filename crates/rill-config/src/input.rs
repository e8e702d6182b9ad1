//! Entry-point resolution.

use std::path::{Path, PathBuf};

use rill_manifest::Manifest;

use crate::error::{ConfigError, Result};
use crate::output::file_name;

/// Source directory the entry point is expected under when the manifest
/// supplies no override.
pub const DEFAULT_ROOT_DIR: &str = "src";

/// Resolve the bundle input file for a package.
///
/// `rollup.input` wins outright when set. Otherwise the entry is expected
/// under `rollup.rootDir` (default `src/`) with the same file name as
/// `main`: a package with `main: "dist/index.js"` builds from
/// `src/index.js`.
pub fn input_path(pkg: &Manifest, base_dir: &Path) -> Result<PathBuf> {
    if let Some(input) = &pkg.rollup.input {
        return Ok(base_dir.join(input));
    }

    let main = pkg.main().ok_or(ConfigError::MissingMain)?;
    let root_dir = pkg.rollup.root_dir.as_deref().unwrap_or(DEFAULT_ROOT_DIR);

    Ok(base_dir.join(root_dir).join(file_name(main)))
}
