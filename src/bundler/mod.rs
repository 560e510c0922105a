//! Offline bundling
//!
//! The bundler performs the identical graph computation the loader does at
//! runtime, but offline: it collects the transitive closure of the bundle
//! root, concatenates the module sources in dependency order, applies the
//! optional transforms, and materializes one output artifact.
//!
//! Every module source is read before the output file is created, so a
//! resolution failure, a cycle, or a missing source never leaves a partial
//! bundle behind.

pub mod minify;

use std::path::{Path, PathBuf};

use crate::config::{BundleSpec, LoaderConfig};
use crate::error::{Result, ShimpackError};
use crate::loader::Loader;
use crate::progress::BundleProgress;

/// Build controls not captured by the bundle spec itself
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Compute everything but write no output file
    pub dry_run: bool,
    /// Show a progress bar while concatenating
    pub show_progress: bool,
}

/// Description of a produced (or dry-run) bundle
#[derive(Debug)]
pub struct BundleArtifact {
    /// Output location, relative to the project root
    pub out: PathBuf,
    /// Module names in bundle order
    pub modules: Vec<String>,
    /// Size of the bundle content in bytes
    pub bytes: usize,
}

/// Build the bundle described by `spec`
///
/// # Errors
///
/// `UnresolvedEntry` if the root name does not resolve; `UnknownModule` or
/// `CyclicDependency` under the same conditions as runtime loading;
/// `FileReadFailed`/`FileWriteFailed` for source and output IO.
pub fn build(
    config: &LoaderConfig,
    spec: &BundleSpec,
    project_root: &Path,
    options: BuildOptions,
) -> Result<BundleArtifact> {
    if !config.is_resolvable(&spec.name) {
        return Err(ShimpackError::unresolved_entry(&spec.name));
    }

    // Reads every source up front; failures abort before any output exists
    let mut loader = Loader::new(config, project_root);
    loader.load_ordered(std::slice::from_ref(&spec.name))?;

    let progress = options
        .show_progress
        .then(|| BundleProgress::new(loader.registry().len() as u64));

    let mut body = String::new();
    for module in loader.registry().modules() {
        if let Some(progress) = &progress {
            progress.advance(&module.name);
        }
        let source = transform_source(&module.source, spec);
        body.push_str(&source);
        if !body.ends_with('\n') {
            body.push('\n');
        }
    }
    if let Some(progress) = &progress {
        progress.finish();
    }

    let content = if spec.wrap {
        minify::wrap(&body, spec.use_strict)
    } else if spec.use_strict {
        format!("'use strict';\n{body}")
    } else {
        body
    };

    let out_path = project_root.join(&spec.out);
    if !options.dry_run {
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ShimpackError::file_write_failed(parent.display().to_string(), e)
            })?;
        }
        std::fs::write(&out_path, &content).map_err(|e| {
            ShimpackError::file_write_failed(out_path.display().to_string(), e)
        })?;
    }

    Ok(BundleArtifact {
        out: spec.out.clone(),
        modules: loader.registry().names().map(str::to_string).collect(),
        bytes: content.len(),
    })
}

/// Apply the per-module transforms selected by the spec
fn transform_source(source: &str, spec: &BundleSpec) -> String {
    if spec.optimize {
        minify::minify(source, spec.preserve_license_comments)
    } else if spec.preserve_license_comments {
        source.to_string()
    } else {
        minify::strip_license_comments(source)
    }
}
