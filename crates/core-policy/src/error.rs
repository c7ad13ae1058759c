//! Error types for core-policy

use alloc::string::String;
use core::fmt;

/// Result type alias for policy operations
pub type Result<T> = core::result::Result<T, PolicyError>;

/// Errors that can occur in role strength policy operations
#[derive(Debug)]
pub enum PolicyError {
    /// Initial role map is empty, or holds a non-integer or out-of-range value
    InvalidConfiguration(String),

    /// Two initial role labels normalise to the same key
    DuplicateKey(String),

    /// Strength supplied to a mutation is outside `[0, 4]`
    OutOfRange {
        /// Rejected value
        value: i64,
    },

    /// Role is already mapped to a strength requirement
    AlreadyExists(String),

    /// Role to update or delete is not mapped
    NotFound(String),

    /// Role queried for satisfaction is not mapped
    RoleNotFound(String),

    /// Serialization error
    SerializationError(String),

    /// TOML parsing error
    TomlError(toml::de::Error),

    /// Internal error
    InternalError(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "{}", msg),
            Self::DuplicateKey(key) => write!(f, "duplicate key '{}' detected", key),
            Self::OutOfRange { value } => write!(
                f,
                "password strength must be between 0 and 4 (got {})",
                value
            ),
            Self::AlreadyExists(role) => {
                write!(f, "{} to password strength mapping already exists", role)
            }
            Self::NotFound(role) => write!(f, "{} is not found", role),
            Self::RoleNotFound(role) => write!(f, "Role not found in role map: {}", role),
            Self::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            Self::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl From<toml::de::Error> for PolicyError {
    fn from(err: toml::de::Error) -> Self {
        Self::TomlError(err)
    }
}

impl core::error::Error for PolicyError {}
