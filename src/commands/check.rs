//! Check command implementation
//!
//! Loading the configuration already runs the full validation pass
//! (missing references and cycles), so this command only has to report
//! what it found. A defective configuration exits non-zero via the normal
//! error path before the summary prints.

use std::path::PathBuf;

use console::Style;

use crate::commands::helpers::load_config;
use crate::error::Result;
use crate::resolver::graph;

pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let (config, _root) = load_config(config_path)?;

    let deps = graph::dependency_map(&config);
    let shim_edges: usize = deps.values().map(Vec::len).sum();

    println!(
        "{} path entries, {} shims ({} dependency edges), {} require roots",
        config.paths.len(),
        config.shim.len(),
        shim_edges,
        config.require.len()
    );
    println!("{}", Style::new().green().apply_to("Configuration OK"));

    Ok(())
}
