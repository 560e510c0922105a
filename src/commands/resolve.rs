//! Resolve command implementation

use std::path::PathBuf;

use crate::commands::helpers::load_config;
use crate::error::Result;
use crate::resolver::Resolver;

/// Resolve a symbolic name and print its location
pub fn run(config_path: Option<PathBuf>, args: crate::cli::ResolveArgs) -> Result<()> {
    let (config, _root) = load_config(config_path)?;
    let resolver = Resolver::new(&config);
    let location = resolver.resolve(&args.name)?;
    println!("{location}");
    Ok(())
}
