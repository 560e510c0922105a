//! Loader configuration (shimpack.yaml)
//!
//! Declarative configuration for the resolver and the bundler: a `paths`
//! table mapping symbolic module names to extensionless locations, a `shim`
//! table declaring load-order dependencies for modules that lack their own
//! dependency metadata, the initial `require` list, and an optional
//! `bundle` section describing the build output.
//!
//! All of it is immutable once constructed. Validation happens eagerly in
//! [`LoaderConfig::from_yaml`] (missing-reference check and cycle check),
//! never lazily during traversal.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShimpackError};
use crate::resolver::{graph, sort};

/// Default configuration file name, looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "shimpack.yaml";

/// A shim declaration: modules that must load before this one
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShimEntry {
    /// Ordered dependency names; each must resolve to a paths entry
    #[serde(default)]
    pub deps: Vec<String>,
}

/// Build output description (the `bundle:` section)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BundleSpec {
    /// Root module name; the bundle is its transitive closure
    pub name: String,

    /// Output file location, relative to the project root
    pub out: PathBuf,

    /// Run the size-minimizing transform over the output
    #[serde(default = "default_true")]
    pub optimize: bool,

    /// Keep `/*! ... */` license comment blocks in the output
    #[serde(default)]
    pub preserve_license_comments: bool,

    /// Insert a 'use strict' directive into the wrapper
    #[serde(default = "default_true")]
    pub use_strict: bool,

    /// Wrap the concatenated output in an IIFE
    #[serde(default = "default_true")]
    pub wrap: bool,
}

fn default_true() -> bool {
    true
}

/// Full loader configuration from shimpack.yaml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoaderConfig {
    /// Directory module locations are resolved against
    #[serde(default)]
    pub base_url: PathBuf,

    /// Symbolic name -> extensionless location
    #[serde(default)]
    pub paths: BTreeMap<String, String>,

    /// Symbolic name -> shim declaration
    #[serde(default)]
    pub shim: BTreeMap<String, ShimEntry>,

    /// Initial load list evaluated at startup
    #[serde(default)]
    pub require: Vec<String>,

    /// Optional build section
    #[serde(default)]
    pub bundle: Option<BundleSpec>,
}

impl LoaderConfig {
    /// Parse configuration from a YAML string and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShimpackError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            ShimpackError::file_read_failed(path.display().to_string(), e)
        })?;
        Self::from_yaml(&yaml).map_err(|e| match e {
            ShimpackError::ConfigParseFailed { reason, .. } => ShimpackError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Whether a symbolic name resolves at all
    ///
    /// Bare names need a paths entry; names containing '/' are taken as
    /// base-relative locations directly, matching the original loader.
    pub fn is_resolvable(&self, name: &str) -> bool {
        self.paths.contains_key(name) || name.contains('/')
    }

    /// Ordered dependency names declared for a module, empty if unshimmed
    pub fn deps_of(&self, name: &str) -> &[String] {
        self.shim.get(name).map_or(&[], |entry| entry.deps.as_slice())
    }

    /// Validate the configuration once, at construction time
    ///
    /// Checks, in order: every shim key has a paths entry, every shim
    /// dependency and every require-list name resolves, and the shim graph
    /// is acyclic.
    pub fn validate(&self) -> Result<()> {
        for name in self.shim.keys() {
            if !self.paths.contains_key(name) {
                return Err(ShimpackError::config_invalid(format!(
                    "shim entry '{name}' has no matching paths entry"
                )));
            }
        }

        graph::validate_references(self)?;

        // Cycle check over every shim key, not just the require roots
        let roots: Vec<String> = self.shim.keys().cloned().collect();
        sort::load_order(self, &roots)?;

        Ok(())
    }
}
