//! Module name resolution and load ordering
//!
//! The resolver owns the runtime contract of the configuration: map a
//! symbolic name to its physical location, and turn a list of requested
//! roots into a load order in which every shim dependency precedes its
//! dependents.

pub mod graph;
pub mod sort;

use std::path::{Path, PathBuf};

use crate::config::LoaderConfig;
use crate::error::{Result, ShimpackError};

/// Script source extension appended to extensionless locations
pub const SOURCE_EXTENSION: &str = "js";

/// Resolves symbolic module names against a validated configuration
pub struct Resolver<'a> {
    config: &'a LoaderConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a LoaderConfig) -> Self {
        Self { config }
    }

    /// Resolve a symbolic name to its extensionless location
    ///
    /// Exact lookup in the paths table; names containing '/' fall back to
    /// being their own base-relative location. Deterministic, no side
    /// effects.
    pub fn resolve(&self, name: &str) -> Result<String> {
        if let Some(location) = self.config.paths.get(name) {
            return Ok(location.clone());
        }
        if name.contains('/') {
            return Ok(name.to_string());
        }
        Err(ShimpackError::unknown_module(name))
    }

    /// Compute the full load order for the given roots
    ///
    /// Dependencies strictly before dependents, each module exactly once.
    pub fn load_order(&self, roots: &[String]) -> Result<Vec<String>> {
        sort::load_order(self.config, roots)
    }

    /// Physical source file for a module, under `<root>/<base_url>/`
    ///
    /// Locations are extensionless; the extension is appended rather than
    /// substituted so a location like `jquery.min` stays intact.
    pub fn source_path(&self, project_root: &Path, name: &str) -> Result<PathBuf> {
        let location = self.resolve(name)?;
        Ok(project_root
            .join(&self.config.base_url)
            .join(format!("{location}.{SOURCE_EXTENSION}")))
    }
}
