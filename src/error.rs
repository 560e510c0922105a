//! Error types and handling for Shimpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! All resolution and bundling errors are fatal and non-retryable: they
//! indicate a static configuration defect, not a transient condition. Both
//! the loader and the bundler abort on the first detected error, so no
//! partial load and no partial bundle is ever produced.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Shimpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShimpackError {
    // Resolution errors
    #[error("Unknown module '{name}'")]
    #[diagnostic(
        code(shimpack::resolve::unknown_module),
        help("Add a 'paths' entry for this name, or use a base-relative location containing '/'")
    )]
    UnknownModule { name: String },

    #[error("Cyclic dependency detected: {chain}")]
    #[diagnostic(
        code(shimpack::deps::cycle),
        help("Remove one of the 'deps' edges in the chain from your shim configuration")
    )]
    CyclicDependency { chain: String },

    // Bundle errors
    #[error("Bundle entry '{name}' has no paths entry")]
    #[diagnostic(
        code(shimpack::bundle::unresolved_entry),
        help("The 'bundle.name' root must be listed under 'paths' in the configuration")
    )]
    UnresolvedEntry { name: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(shimpack::config::not_found),
        help("Create a shimpack.yaml, or point at one with --config")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(shimpack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(shimpack::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(shimpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(shimpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(shimpack::fs::io_error))]
    IoError { message: String },
}

/// Convenience constructors keeping call sites terse
impl ShimpackError {
    pub fn unknown_module(name: impl Into<String>) -> Self {
        ShimpackError::UnknownModule { name: name.into() }
    }

    pub fn cyclic_dependency(chain: impl Into<String>) -> Self {
        ShimpackError::CyclicDependency {
            chain: chain.into(),
        }
    }

    pub fn unresolved_entry(name: impl Into<String>) -> Self {
        ShimpackError::UnresolvedEntry { name: name.into() }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        ShimpackError::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn file_read_failed(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ShimpackError::FileReadFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn file_write_failed(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ShimpackError::FileWriteFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for ShimpackError {
    fn from(err: std::io::Error) -> Self {
        ShimpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ShimpackError {
    fn from(err: serde_yaml::Error) -> Self {
        ShimpackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias for Shimpack operations
pub type Result<T> = std::result::Result<T, ShimpackError>;
