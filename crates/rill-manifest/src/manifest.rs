//! Parsed `package.json` structure and loader.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::browser::BrowserField;
use crate::error::{ManifestError, Result};

/// Parsed `package.json` structure.
///
/// Focuses on the entry-point and dependency fields the config derivation
/// consumes and omits other metadata like scripts, engines, etc.
/// Dependency maps preserve manifest order so derived values stay
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Package name, possibly scoped (`@scope/name`)
    pub name: Option<String>,
    /// Package version
    pub version: Option<String>,
    /// Primary CommonJS entry, relative to the package root
    pub main: Option<String>,
    /// ES module entry, relative to the package root
    pub module: Option<String>,
    /// Browser overrides, basic or advanced form
    pub browser: Option<BrowserField>,
    /// CDN UMD bundle target served from unpkg.com
    pub unpkg: Option<String>,
    /// Per-package bundler overrides under the `rollup` key
    #[serde(default)]
    pub rollup: RollupOptions,
    /// Production dependencies
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    /// Peer dependencies
    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: IndexMap<String, String>,
    /// File path this was loaded from
    #[serde(skip)]
    pub path: PathBuf,
}

/// Bundler overrides read from the manifest's `rollup` key.
///
/// Every field is optional; defaults are applied at the point of use by
/// the derivation in `rill-config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollupOptions {
    /// Source directory the entry point is expected under (default `src`)
    #[serde(rename = "rootDir")]
    pub root_dir: Option<String>,
    /// Explicit entry-point override, relative to the package root
    pub input: Option<String>,
    /// Naming pattern for generated chunks
    #[serde(rename = "chunkFileNames")]
    pub chunk_file_names: Option<String>,
    /// Naming pattern for named entries
    #[serde(rename = "entryFileNames")]
    pub entry_file_names: Option<String>,
    /// Inline SVG imports as data URIs (consumed by the plugin pipeline)
    #[serde(default, rename = "inlineSVG")]
    pub inline_svg: bool,
}

impl Manifest {
    /// Load and validate a `package.json` file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use rill_manifest::Manifest;
    /// let pkg = Manifest::from_path("packages/foo/package.json")?;
    /// # Ok::<(), rill_manifest::ManifestError>(())
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("loading manifest from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                ManifestError::NotFound(path.to_path_buf())
            } else {
                ManifestError::Io(err)
            }
        })?;

        let mut pkg: Manifest =
            serde_json::from_str(&contents).map_err(|source| ManifestError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        pkg.path = path.to_path_buf();

        pkg.validate()
    }

    /// Load `package.json` from a package directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(dir.as_ref().join("package.json"))
    }

    /// Build and validate a manifest from an in-memory JSON value, for
    /// library embedders that manage their own manifest storage.
    ///
    /// # Example
    ///
    /// ```
    /// use rill_manifest::Manifest;
    /// use serde_json::json;
    ///
    /// let pkg = Manifest::from_value(json!({
    ///     "name": "demo",
    ///     "main": "dist/index.js"
    /// })).unwrap();
    /// assert_eq!(pkg.main.as_deref(), Some("dist/index.js"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let pkg: Manifest = serde_json::from_value(value).map_err(ManifestError::InvalidValue)?;

        pkg.validate()
    }

    /// The directory all relative manifest paths resolve against: the
    /// parent of the loaded `package.json`. Empty for manifests built from
    /// an in-memory value.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// The primary CommonJS entry, if declared.
    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    /// Names of the modules a bundle must leave as runtime imports: every
    /// declared dependency and peer dependency, sorted and deduplicated.
    pub fn external_dependency_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .dependencies
            .keys()
            .chain(self.peer_dependencies.keys())
            .cloned()
            .collect();

        names.sort();
        names.dedup();
        names
    }

    fn validate(self) -> Result<Self> {
        if self.main.is_none() {
            return Err(ManifestError::MissingMain);
        }

        Ok(self)
    }
}
