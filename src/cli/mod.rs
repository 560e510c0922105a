//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - order: Order command arguments
//! - bundle: Bundle command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundle;
pub mod completions;
pub mod order;
pub mod resolve;

pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;
pub use order::OrderArgs;
pub use resolve::ResolveArgs;

/// Shimpack - module load-order resolver and bundler
#[derive(Parser, Debug)]
#[command(
    name = "shimpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Load-order resolver and bundler for shimmed script modules",
    long_about = "Shimpack resolves symbolic module names to script locations, orders \
                  shimmed dependencies so every dependency loads before its dependents, \
                  and bundles the transitive closure of an entry module into one output file.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  shimpack resolve jquery       \x1b[90m# Print the resolved location\x1b[0m\n   \
                  shimpack order                \x1b[90m# Print the load order of the require list\x1b[0m\n   \
                  shimpack check                \x1b[90m# Validate paths, shims, and cycles\x1b[0m\n   \
                  shimpack bundle               \x1b[90m# Build the configured bundle\x1b[0m\n   \
                  shimpack bundle --dry-run     \x1b[90m# Show what would be bundled\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to shimpack.yaml in the current directory)
    #[arg(long, short = 'c', global = true, env = "SHIMPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a symbolic module name to its location
    Resolve(ResolveArgs),

    /// Print the load order for the require list or given names
    Order(OrderArgs),

    /// Validate the configuration (references and cycles)
    Check,

    /// Build the configured bundle
    Bundle(BundleArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
