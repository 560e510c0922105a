//! Bundle command implementation
//!
//! Resolves the bundle spec from the configuration's `bundle:` section,
//! applies any flag overrides, and runs the build. A dry run prints the
//! modules that would be bundled without touching the file system.

use std::path::PathBuf;

use console::Style;

use crate::bundler::{self, BuildOptions};
use crate::cli::BundleArgs;
use crate::commands::helpers::load_config;
use crate::config::BundleSpec;
use crate::error::{Result, ShimpackError};

pub fn run(config_path: Option<PathBuf>, args: BundleArgs, verbose: bool) -> Result<()> {
    let (config, root) = load_config(config_path)?;

    let mut spec = resolve_spec(&config.bundle, &args)?;
    if let Some(entry) = args.entry {
        spec.name = entry;
    }
    if let Some(out) = args.out {
        spec.out = out;
    }
    if args.no_optimize {
        spec.optimize = false;
    }
    if args.keep_license_comments {
        spec.preserve_license_comments = true;
    }

    let options = BuildOptions {
        dry_run: args.dry_run,
        show_progress: !args.dry_run,
    };
    let artifact = bundler::build(&config, &spec, &root, options)?;

    if args.dry_run {
        println!("Would bundle {} modules:", artifact.modules.len());
        for name in &artifact.modules {
            println!("  {name}");
        }
        println!("-> {} ({} bytes)", artifact.out.display(), artifact.bytes);
    } else {
        if verbose {
            for name in &artifact.modules {
                println!("  {name}");
            }
        }
        println!(
            "{} {} modules -> {} ({} bytes)",
            Style::new().green().apply_to("Bundled"),
            artifact.modules.len(),
            artifact.out.display(),
            artifact.bytes
        );
    }

    Ok(())
}

/// The `bundle:` section is required unless the flags supply both the
/// entry and the output location
fn resolve_spec(section: &Option<BundleSpec>, args: &BundleArgs) -> Result<BundleSpec> {
    if let Some(spec) = section {
        return Ok(spec.clone());
    }
    match (&args.entry, &args.out) {
        (Some(entry), Some(out)) => Ok(BundleSpec {
            name: entry.clone(),
            out: out.clone(),
            optimize: true,
            preserve_license_comments: false,
            use_strict: true,
            wrap: true,
        }),
        _ => Err(ShimpackError::config_invalid(
            "no 'bundle' section in configuration; pass both --entry and --out",
        )),
    }
}
