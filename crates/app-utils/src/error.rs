use core_policy::PolicyError;
use thiserror::Error;

/// Main errors for the `app-utils` crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a configuration file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that could not be read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File extension does not name a known configuration format
    #[error("Unsupported role map format: {0} (expected .toml, .yaml or .yml)")]
    UnsupportedFormat(String),

    /// Document parsed but failed policy validation, or did not parse
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
