//! Build-config assembly: one complete configuration per package.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use rill_manifest::Manifest;

use crate::error::Result;
use crate::input::input_path;
use crate::output::{output_targets, OutputTarget};

/// A complete bundler configuration for one package: where to read the
/// entry module, what to emit, and which modules stay external. The
/// plugin set is supplied by the consuming pipeline, not derived here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub input: PathBuf,
    pub output: Vec<OutputTarget>,
    pub external: Vec<String>,
}

impl BuildConfig {
    /// Assemble the configuration for an already-loaded manifest, using
    /// the manifest's own base directory for path resolution.
    pub fn from_manifest(pkg: &Manifest) -> Result<Self> {
        let base_dir = pkg.base_dir();

        Ok(Self {
            input: input_path(pkg, base_dir)?,
            output: output_targets(pkg, base_dir)?,
            external: pkg.external_dependency_names(),
        })
    }
}

/// Load a package manifest and derive its build configuration.
///
/// `path` may point at a `package.json` file or at the package directory
/// containing one.
///
/// # Example
///
/// ```no_run
/// # use rill_config::create_config;
/// let config = create_config("packages/widget")?;
/// # Ok::<(), rill_config::ConfigError>(())
/// ```
pub fn create_config(path: impl AsRef<Path>) -> Result<BuildConfig> {
    let path = path.as_ref();
    let manifest = if path.is_dir() {
        Manifest::from_dir(path)?
    } else {
        Manifest::from_path(path)?
    };

    BuildConfig::from_manifest(&manifest)
}

/// Derive one build configuration per package path, preserving input
/// order. The first failing package aborts the run.
pub fn create_multi_config<I, P>(paths: I) -> Result<Vec<BuildConfig>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().map(create_config).collect()
}
