// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Password Police Team

//! # core-strength
//!
//! Password strength estimation for password-police based on zxcvbn.
//!
//! This crate provides the production [`StrengthEstimator`] used with
//! `core_policy::RoleStrengthPolicy`. The estimation algorithm itself lives in
//! the `zxcvbn` crate; this crate only adapts its score to [`Strength`].
//!
//! ## Example
//!
//! ```
//! use core_policy::RoleStrengthPolicy;
//! use core_strength::ZxcvbnEstimator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let policy = RoleStrengthPolicy::new([("admin", 4), ("user", 0)])?;
//! let estimator = ZxcvbnEstimator::new();
//!
//! assert!(policy.is_satisfied(&estimator, "user", "apple")?);
//! assert!(!policy.is_satisfied(&estimator, "admin", "apple")?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod error;

pub use error::{Result, StrengthError};

use core_policy::{Strength, StrengthEstimator};
use tracing::trace;

/// Longest password, in characters, that is scored in full
///
/// zxcvbn matching cost grows quickly with input length.
pub const MAX_PASSWORD_LENGTH: usize = 256;

/// Strength estimator backed by zxcvbn
///
/// User inputs (user name, e-mail, site name, ...) are treated as a
/// dictionary: passwords built from them score lower.
///
/// ## Example
///
/// ```
/// use core_policy::StrengthEstimator;
/// use core_strength::ZxcvbnEstimator;
///
/// let estimator = ZxcvbnEstimator::with_user_inputs(["janedoe", "jane@example.com"]);
/// assert_eq!(estimator.user_inputs().len(), 2);
/// assert_eq!(estimator.score("apple").value(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZxcvbnEstimator {
    user_inputs: Vec<String>,
}

impl ZxcvbnEstimator {
    /// Create an estimator without user inputs
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator that penalises passwords built from `inputs`
    #[must_use]
    pub fn with_user_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the user inputs
    #[must_use]
    pub fn user_inputs(&self) -> &[String] {
        &self.user_inputs
    }

    /// Score a password, rejecting ones longer than `MAX_PASSWORD_LENGTH`
    ///
    /// # Errors
    ///
    /// Returns `StrengthError::PasswordTooLong` if the password has more than
    /// `MAX_PASSWORD_LENGTH` characters
    pub fn try_score(&self, password: &str) -> Result<Strength> {
        let length = password.chars().count();
        if length > MAX_PASSWORD_LENGTH {
            return Err(StrengthError::PasswordTooLong {
                max: MAX_PASSWORD_LENGTH,
                length,
            });
        }

        Ok(self.estimate(password))
    }

    fn estimate(&self, password: &str) -> Strength {
        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn::zxcvbn(password, &inputs);
        let score = entropy.score() as u8;
        trace!(score, "password scored");

        // zxcvbn scores are 0..=4 by construction
        Strength::try_from(score).unwrap_or(Strength::STRONGEST)
    }
}

impl StrengthEstimator for ZxcvbnEstimator {
    /// Score a password
    ///
    /// Passwords longer than `MAX_PASSWORD_LENGTH` characters are scored on
    /// their first `MAX_PASSWORD_LENGTH` characters.
    fn score(&self, password: &str) -> Strength {
        let scored = match password.char_indices().nth(MAX_PASSWORD_LENGTH) {
            Some((end, _)) => &password[..end],
            None => password,
        };
        self.estimate(scored)
    }
}

/// Score a password with a default estimator
///
/// ```
/// use core_strength::check_strength;
///
/// assert_eq!(check_strength("apple").value(), 0);
/// ```
#[must_use]
pub fn check_strength(password: &str) -> Strength {
    ZxcvbnEstimator::new().score(password)
}
