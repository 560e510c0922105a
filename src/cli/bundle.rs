use clap::Parser;
use std::path::PathBuf;

/// Arguments for the bundle command
///
/// Flags override the corresponding fields of the configuration's
/// `bundle:` section.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build the configured bundle:\n    shimpack bundle\n\n\
                  Build a different entry to a different file:\n    shimpack bundle --entry notification --out dist/notifications.js\n\n\
                  Skip minification, keep license blocks:\n    shimpack bundle --no-optimize --keep-license-comments\n\n\
                  Preview without writing:\n    shimpack bundle --dry-run")]
pub struct BundleArgs {
    /// Root module name (overrides bundle.name)
    #[arg(long)]
    pub entry: Option<String>,

    /// Output file location (overrides bundle.out)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Skip the size-minimizing transform
    #[arg(long = "no-optimize")]
    pub no_optimize: bool,

    /// Keep license comment blocks in the output
    #[arg(long = "keep-license-comments")]
    pub keep_license_comments: bool,

    /// Show what would be bundled without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}
