//! Memoized module loading
//!
//! The loader performs the runtime half of the contract: given requested
//! roots, it computes the full load order first (a pure step, so cycle and
//! unknown-name failures happen before any side effect), then reads each
//! module's source into its registry exactly once, dependencies before
//! dependents.
//!
//! The registry is an explicit field of the loader rather than ambient
//! global state, so resolution stays testable and callers can own as many
//! independent loaders as they like.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::LoaderConfig;
use crate::error::{Result, ShimpackError};
use crate::resolver::Resolver;

/// A module whose source has been read into the registry
#[derive(Debug, Clone)]
pub struct LoadedModule {
    pub name: String,
    /// Resolved extensionless location
    pub location: String,
    pub source: String,
}

/// Key-value store of loaded modules, queryable by symbolic name
///
/// Each name is written at most once; insertion order is the load order.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, LoadedModule>,
    order: Vec<String>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&LoadedModule> {
        self.modules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names in the order they were loaded
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Modules in the order they were loaded
    pub fn modules(&self) -> impl Iterator<Item = &LoadedModule> {
        self.order.iter().filter_map(|name| self.modules.get(name))
    }

    fn insert(&mut self, module: LoadedModule) {
        if !self.modules.contains_key(&module.name) {
            self.order.push(module.name.clone());
            self.modules.insert(module.name.clone(), module);
        }
    }
}

/// Loads modules in dependency order, at most once each
pub struct Loader<'a> {
    config: &'a LoaderConfig,
    project_root: PathBuf,
    registry: ModuleRegistry,
}

impl<'a> Loader<'a> {
    pub fn new(config: &'a LoaderConfig, project_root: &Path) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
            registry: ModuleRegistry::new(),
        }
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Load the given roots and all transitive shim dependencies
    ///
    /// Returns the number of modules newly loaded by this call. Requesting
    /// an already-loaded set is a no-op returning 0. The full order is
    /// validated before the first read, so a cycle or an unknown name
    /// leaves the registry untouched.
    pub fn load_ordered(&mut self, roots: &[String]) -> Result<usize> {
        let resolver = Resolver::new(self.config);
        let order = resolver.load_order(roots)?;

        let mut loaded = 0;
        for name in &order {
            if self.registry.contains(name) {
                continue;
            }
            let location = resolver.resolve(name)?;
            let path = resolver.source_path(&self.project_root, name)?;
            let source = std::fs::read_to_string(&path).map_err(|e| {
                ShimpackError::file_read_failed(path.display().to_string(), e)
            })?;
            self.registry.insert(LoadedModule {
                name: name.clone(),
                location,
                source,
            });
            loaded += 1;
        }

        Ok(loaded)
    }
}
