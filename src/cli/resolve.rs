use clap::Parser;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve a library name:\n    shimpack resolve jquery\n\n\
                  Resolve against another configuration:\n    shimpack -c assets/shimpack.yaml resolve notification")]
pub struct ResolveArgs {
    /// Symbolic module name to resolve
    pub name: String,
}
