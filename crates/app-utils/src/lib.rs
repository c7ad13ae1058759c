//! # app-utils
//!
//! Utility modules for loading role strength policies from configuration.
//!
//! This crate provides non-core features:
//! - TOML and YAML role map parsing
//! - Format selection by file extension
//!
//! Loading the initial role map is the caller's job; `core-policy` never
//! touches the filesystem.

#![forbid(unsafe_code)]

pub mod error;

pub mod config {
    //! Role map document parsing
    //!
    //! Both formats describe a flat map of role name to required strength:
    //!
    //! ```toml
    //! admin = 4
    //! user = 0
    //! ```
    //!
    //! ```yaml
    //! admin: 4
    //! user: 0
    //! ```
    use super::error::{Error, Result};
    use core_policy::{PolicyError, RoleMapDocument, RoleStrengthPolicy};
    use std::fs;
    use std::path::Path;
    use tracing::debug;

    /// Trait for role map parsers (OCP - extensible to JSON, etc.)
    pub trait RoleMapParser {
        /// Parse a policy from a string
        ///
        /// # Errors
        ///
        /// Returns a `PolicyError` if the document does not parse or fails
        /// construction validation
        fn parse(&self, input: &str) -> std::result::Result<RoleStrengthPolicy, PolicyError>;
    }

    /// TOML parser implementation
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TomlParser;

    impl RoleMapParser for TomlParser {
        fn parse(&self, input: &str) -> std::result::Result<RoleStrengthPolicy, PolicyError> {
            RoleStrengthPolicy::from_toml(input)
        }
    }

    /// YAML parser implementation
    #[derive(Debug, Clone, Copy, Default)]
    pub struct YamlParser;

    impl RoleMapParser for YamlParser {
        fn parse(&self, input: &str) -> std::result::Result<RoleStrengthPolicy, PolicyError> {
            let document: RoleMapDocument = serde_yaml::from_str(input)
                .map_err(|e| PolicyError::SerializationError(format!("YAML parse error: {}", e)))?;
            RoleStrengthPolicy::try_from(document)
        }
    }

    /// Pick a parser from the file extension (`.toml`, `.yaml`, `.yml`)
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedFormat` for any other extension
    pub fn parser_for_path(path: &Path) -> Result<Box<dyn RoleMapParser>> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Box::new(TomlParser)),
            Some("yaml" | "yml") => Ok(Box::new(YamlParser)),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Read and validate a role map file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or fails to parse or validate
    pub fn load_policy(path: impl AsRef<Path>) -> Result<RoleStrengthPolicy> {
        let path = path.as_ref();
        let parser = parser_for_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;

        let policy = parser.parse(&content)?;
        debug!(path = %path.display(), roles = policy.len(), "role map loaded");
        Ok(policy)
    }

    /// Serialize a policy to YAML
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::SerializationError` if YAML serialization fails
    pub fn to_yaml(policy: &RoleStrengthPolicy) -> std::result::Result<String, PolicyError> {
        serde_yaml::to_string(policy)
            .map_err(|e| PolicyError::SerializationError(format!("YAML serialization error: {}", e)))
    }
}

/// Re-export commonly used types
pub use config::{load_policy, parser_for_path, RoleMapParser, TomlParser, YamlParser};
pub use error::{Error, Result};
