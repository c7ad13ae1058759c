//! Password strength scores and the estimator capability
//!
//! A [`Strength`] is a score in the closed range `[0, 4]`, where `0` is the
//! weakest and `4` the strongest password. Scores are produced by a
//! [`StrengthEstimator`], which is injected into every evaluation so that the
//! policy never depends on a concrete estimation algorithm.

use crate::error::{PolicyError, Result};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Password strength score, guaranteed to lie in `[0, 4]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Strength(u8);

impl Strength {
    /// Lowest valid score
    pub const MIN: u8 = 0;

    /// Highest valid score
    pub const MAX: u8 = 4;

    /// Score 0
    pub const WEAKEST: Self = Self(Self::MIN);

    /// Score 4
    pub const STRONGEST: Self = Self(Self::MAX);

    /// Create a strength score from an integer
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::OutOfRange` if `value` is outside `[0, 4]`
    pub fn new(value: i64) -> Result<Self> {
        if Self::in_range(value) {
            // `in_range` bounds the value to 0..=4
            Ok(Self(value as u8))
        } else {
            Err(PolicyError::OutOfRange { value })
        }
    }

    /// Check whether an integer is a valid strength score
    #[must_use]
    pub fn in_range(value: i64) -> bool {
        (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value)
    }

    /// Get the raw score
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check whether this score meets a required minimum
    #[must_use]
    pub fn satisfies(self, required: Self) -> bool {
        self >= required
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Strength {
    type Error = PolicyError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<u8> for Strength {
    type Error = PolicyError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(i64::from(value))
    }
}

impl From<Strength> for u8 {
    fn from(strength: Strength) -> Self {
        strength.0
    }
}

impl From<Strength> for i64 {
    fn from(strength: Strength) -> Self {
        i64::from(strength.0)
    }
}

/// Estimates the strength of a plaintext password (DIP - Dependency Inversion)
///
/// The policy only depends on this abstraction. Implementations must be
/// deterministic for a given password.
///
/// Closures can be used directly:
///
/// ```
/// use core_policy::{Strength, StrengthEstimator};
///
/// let by_length = |password: &str| {
///     Strength::new((password.len() / 4).min(4) as i64).unwrap()
/// };
/// assert_eq!(by_length.score("apple"), Strength::new(1).unwrap());
/// ```
pub trait StrengthEstimator {
    /// Score a plaintext password
    fn score(&self, password: &str) -> Strength;
}

impl<F> StrengthEstimator for F
where
    F: Fn(&str) -> Strength,
{
    fn score(&self, password: &str) -> Strength {
        self(password)
    }
}

/// Estimator that returns the same score for every password
///
/// Useful for tests and for wiring a policy without a real estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEstimator(pub Strength);

impl StrengthEstimator for FixedEstimator {
    fn score(&self, _password: &str) -> Strength {
        self.0
    }
}
