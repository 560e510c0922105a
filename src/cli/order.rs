use clap::Parser;

/// Arguments for the order command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Order of the configured require list:\n    shimpack order\n\n\
                  Order of explicit roots:\n    shimpack order notification bootstrap")]
pub struct OrderArgs {
    /// Root module names; defaults to the configuration's require list
    pub names: Vec<String>,
}
