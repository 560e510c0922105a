//! Shimpack - load-order resolver and bundler for shimmed script modules
//!
//! Resolves symbolic module names to script locations from a declarative
//! configuration, orders shim dependencies so every dependency loads before
//! its dependents, and bundles the transitive closure of an entry module
//! into a single output file.

use clap::Parser;

mod bundler;
mod cli;
mod commands;
mod config;
mod error;
mod loader;
mod progress;
mod resolver;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(cli.config, args),
        Commands::Order(args) => commands::order::run(cli.config, args),
        Commands::Check => commands::check::run(cli.config),
        Commands::Bundle(args) => commands::bundle::run(cli.config, args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
