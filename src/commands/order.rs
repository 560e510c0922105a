//! Order command implementation
//!
//! Prints the computed load order, one name per line, dependencies before
//! dependents. Defaults to the configuration's require list when no names
//! are given.

use std::path::PathBuf;

use crate::commands::helpers::load_config;
use crate::error::Result;
use crate::resolver::Resolver;

pub fn run(config_path: Option<PathBuf>, args: crate::cli::OrderArgs) -> Result<()> {
    let (config, _root) = load_config(config_path)?;
    let resolver = Resolver::new(&config);

    let roots = if args.names.is_empty() {
        config.require.clone()
    } else {
        args.names
    };

    let order = resolver.load_order(&roots)?;
    for name in order {
        println!("{name}");
    }

    Ok(())
}
