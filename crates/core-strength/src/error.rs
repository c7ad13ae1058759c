use thiserror::Error;

/// Errors raised while estimating password strength
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrengthError {
    #[error("Password exceeds maximum {max} characters (length: {length})")]
    PasswordTooLong { max: usize, length: usize },
}
/// Specific Result type for strength estimation
pub type Result<T> = std::result::Result<T, StrengthError>;
