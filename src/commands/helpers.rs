//! Shared helpers for command implementations

use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_CONFIG_FILE, LoaderConfig};
use crate::error::Result;

/// Load the configuration and determine the project root
///
/// The project root is the directory containing the configuration file;
/// `base_url` and the bundle output location are resolved against it.
pub fn load_config(config_arg: Option<PathBuf>) -> Result<(LoaderConfig, PathBuf)> {
    let path = config_arg.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = LoaderConfig::load(&path)?;
    let root = match path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((config, root))
}
