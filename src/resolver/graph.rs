//! Shim graph construction and reference validation
//!
//! The dependency graph is the adjacency induced by the shim table:
//! each shimmed module name maps to its ordered dependency list, and
//! unshimmed modules are leaves with no outgoing edges.

use std::collections::BTreeMap;

use crate::config::LoaderConfig;
use crate::error::{Result, ShimpackError};

/// Build the adjacency map from the shim table
///
/// Every paths entry gets a key; modules without a shim declaration map to
/// an empty list.
pub fn dependency_map(config: &LoaderConfig) -> BTreeMap<String, Vec<String>> {
    let mut deps = BTreeMap::new();
    for name in config.paths.keys() {
        deps.insert(name.clone(), config.deps_of(name).to_vec());
    }
    deps
}

/// Validate that every referenced name resolves
///
/// Covers both shim dependency lists and the initial require list. A miss
/// is a static configuration defect, reported before any traversal runs.
pub fn validate_references(config: &LoaderConfig) -> Result<()> {
    for entry in config.shim.values() {
        for dep in &entry.deps {
            if !config.is_resolvable(dep) {
                return Err(ShimpackError::unknown_module(dep));
            }
        }
    }

    for name in &config.require {
        if !config.is_resolvable(name) {
            return Err(ShimpackError::unknown_module(name));
        }
    }

    Ok(())
}
