//! Version command implementation
//!
//! Besides the version itself, prints the conventions a bundle consumer
//! needs to know: where the configuration is looked up and how module
//! locations map to source files.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::Result;
use crate::resolver::SOURCE_EXTENSION;

/// Run version command
pub fn run() -> Result<()> {
    println!("shimpack {} ({})", env!("CARGO_PKG_VERSION"), build_profile());
    println!();
    println!("Conventions:");
    println!("  Config file: ./{DEFAULT_CONFIG_FILE} (override with --config or SHIMPACK_CONFIG)");
    println!("  Module sources: <base_url>/<location>.{SOURCE_EXTENSION}");
    println!("  License comments: /*! ... */ blocks and //! lines");

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
