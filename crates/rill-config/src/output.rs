//! Output target derivation.
//!
//! One target per bundle the package's manifest asks for, in a fixed
//! order downstream consumers may rely on positionally: the `main`
//! CommonJS bundle, the `module` ESM bundle, `browser` overrides, then
//! the `unpkg` development and production UMD bundles.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use rill_manifest::{BrowserField, Manifest};

use crate::error::{ConfigError, Result};
use crate::ident::global_ident;

/// Pattern for generated chunks. Generated chunks need `chunkFileNames`
/// rather than `entryFileNames` as of rollup v0.68.0.
pub const DEFAULT_CHUNK_FILE_NAMES: &str = "[name]-[hash].[format].js";

/// Pattern for named entry files.
pub const DEFAULT_ENTRY_FILE_NAMES: &str = "[name].[format].js";

/// Module format of one output bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    Cjs,
    Esm,
    Umd,
}

/// How the bundle's exports are exposed. Derived from the format, never
/// supplied by the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportsMode {
    Auto,
    Named,
}

impl ExportsMode {
    fn for_format(format: ModuleFormat) -> Self {
        match format {
            ModuleFormat::Esm => ExportsMode::Named,
            _ => ExportsMode::Auto,
        }
    }
}

/// Environment tag carried by the two `unpkg`-derived UMD targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleEnv {
    Development,
    Production,
}

/// Where a target writes its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputLocation {
    /// A directory plus naming patterns, for chunked `main`/`module`
    /// output
    Dir {
        dir: PathBuf,
        entry_file_names: String,
        chunk_file_names: String,
    },
    /// A single fully-resolved bundle file, for `browser` and `unpkg`
    /// overrides
    File(PathBuf),
}

impl OutputLocation {
    /// The resolved file path of a single-file target.
    pub fn file(&self) -> Option<&Path> {
        match self {
            OutputLocation::File(path) => Some(path),
            OutputLocation::Dir { .. } => None,
        }
    }

    /// The output directory of a chunked target.
    pub fn dir(&self) -> Option<&Path> {
        match self {
            OutputLocation::Dir { dir, .. } => Some(dir),
            OutputLocation::File(_) => None,
        }
    }
}

/// Naming metadata present only on UMD targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UmdOptions {
    /// Global variable the bundle installs itself under
    pub name: String,
    /// Global names for the peer dependencies left external to the bundle
    pub globals: IndexMap<String, String>,
    /// Wrapper indentation, always disabled
    pub indent: bool,
}

/// One bundle the manifest asks the bundler to produce: a format, a
/// destination, and the metadata that format needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTarget {
    pub format: ModuleFormat,
    pub location: OutputLocation,
    pub exports: ExportsMode,
    /// True only for `browser`-field-derived targets
    #[serde(default)]
    pub browser: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<BundleEnv>,
    /// True only for the production UMD target
    #[serde(default)]
    pub sourcemap: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umd: Option<UmdOptions>,
}

impl OutputTarget {
    fn chunked(
        format: ModuleFormat,
        dir: PathBuf,
        entry_file_names: String,
        chunk_file_names: String,
    ) -> Self {
        Self {
            format,
            exports: ExportsMode::for_format(format),
            location: OutputLocation::Dir {
                dir,
                entry_file_names,
                chunk_file_names,
            },
            browser: false,
            env: None,
            sourcemap: false,
            umd: None,
        }
    }

    fn browser_alternate(format: ModuleFormat, file: PathBuf) -> Self {
        Self {
            format,
            exports: ExportsMode::for_format(format),
            location: OutputLocation::File(file),
            browser: true,
            env: None,
            sourcemap: false,
            umd: None,
        }
    }

    fn umd(file: PathBuf, env: BundleEnv, sourcemap: bool, umd: UmdOptions) -> Self {
        Self {
            format: ModuleFormat::Umd,
            exports: ExportsMode::for_format(ModuleFormat::Umd),
            location: OutputLocation::File(file),
            browser: false,
            env: Some(env),
            sourcemap,
            umd: Some(umd),
        }
    }
}

/// Derive the ordered output targets for a package.
///
/// Pure path math relative to `base_dir`; the filesystem is never
/// consulted and the manifest is never mutated. The primary CommonJS
/// target is always present; every other target appears only when its
/// manifest field does.
pub fn output_targets(pkg: &Manifest, base_dir: &Path) -> Result<Vec<OutputTarget>> {
    let chunk_file_names = pkg
        .rollup
        .chunk_file_names
        .clone()
        .unwrap_or_else(|| DEFAULT_CHUNK_FILE_NAMES.to_owned());
    let entry_file_names = pkg
        .rollup
        .entry_file_names
        .clone()
        .unwrap_or_else(|| DEFAULT_ENTRY_FILE_NAMES.to_owned());

    let main = pkg.main().ok_or(ConfigError::MissingMain)?;

    let mut targets = Vec::new();

    // only one entry point, so the primary bundle pins the literal file
    // name of `main` instead of the entry pattern
    targets.push(OutputTarget::chunked(
        ModuleFormat::Cjs,
        parent_dir(&base_dir.join(main)),
        file_name(main),
        chunk_file_names.clone(),
    ));

    if let Some(module) = &pkg.module {
        targets.push(OutputTarget::chunked(
            ModuleFormat::Esm,
            parent_dir(&base_dir.join(module)),
            entry_file_names.clone(),
            chunk_file_names.clone(),
        ));
    }

    match &pkg.browser {
        // alternative main (basic)
        Some(BrowserField::Path(path)) => {
            targets.push(OutputTarget::browser_alternate(
                ModuleFormat::Cjs,
                base_dir.join(path),
            ));
        }
        // specific files (advanced)
        Some(field @ BrowserField::Replacements(_)) => {
            if let Some(replacement) = field.replacement_for(main) {
                targets.push(OutputTarget::browser_alternate(
                    ModuleFormat::Cjs,
                    base_dir.join(replacement),
                ));
            }
            if let Some(replacement) = pkg
                .module
                .as_deref()
                .and_then(|module| field.replacement_for(module))
            {
                targets.push(OutputTarget::browser_alternate(
                    ModuleFormat::Esm,
                    base_dir.join(replacement),
                ));
            }
        }
        None => {}
    }

    if let Some(unpkg) = &pkg.unpkg {
        let name = pkg
            .name
            .as_deref()
            .ok_or(ConfigError::MissingPackageName)?;
        let umd = UmdOptions {
            name: global_ident(name),
            globals: pkg
                .peer_dependencies
                .keys()
                .map(|dep| (dep.clone(), global_ident(dep)))
                .collect(),
            indent: false,
        };

        targets.push(OutputTarget::umd(
            base_dir.join(dev_bundle_name(unpkg)),
            BundleEnv::Development,
            false,
            umd.clone(),
        ));
        targets.push(OutputTarget::umd(
            base_dir.join(unpkg),
            BundleEnv::Production,
            true,
            umd,
        ));
    }

    tracing::debug!(
        "derived {} output target(s) for {}",
        targets.len(),
        pkg.name.as_deref().unwrap_or("<unnamed>")
    );

    Ok(targets)
}

/// Rewrite an unpkg bundle name to its development twin: a trailing
/// `.min.js` or `.js` becomes `.dev.js`. A name ending in neither passes
/// through unchanged; no well-formedness check is applied here.
fn dev_bundle_name(unpkg: &str) -> String {
    match unpkg
        .strip_suffix(".min.js")
        .or_else(|| unpkg.strip_suffix(".js"))
    {
        Some(stem) => format!("{stem}.dev.js"),
        None => unpkg.to_owned(),
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

pub(crate) fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
