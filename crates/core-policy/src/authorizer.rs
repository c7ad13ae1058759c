//! Password strength evaluation against a role map (SRP - Single Responsibility Principle)
//!
//! This module keeps the satisfaction decision out of `RoleStrengthPolicy`,
//! which only owns and validates the role map.
//!
//! ## Architecture
//!
//! - **SRP**: Only responsible for looking up a requirement and comparing it to a score
//! - **Testable**: The estimator is borrowed, so tests inject deterministic fakes
//! - **Reusable**: Works on any role map, not just one owned by a policy

use crate::error::{PolicyError, Result};
use crate::strength::{Strength, StrengthEstimator};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use serde::Serialize;

/// Outcome of evaluating one password against one role
///
/// Useful for auditing and for explaining a rejection to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthVerdict {
    /// Role the password was evaluated for
    pub role: String,
    /// Minimum strength the role requires
    pub required: Strength,
    /// Strength the estimator assigned to the password
    pub estimated: Strength,
    /// Whether `estimated >= required`
    pub satisfied: bool,
}

/// Evaluates passwords against a role map
///
/// ## Example
///
/// ```
/// use std::collections::BTreeMap;
/// use core_policy::{FixedEstimator, Strength, StrengthAuthorizer};
///
/// let mut roles = BTreeMap::new();
/// roles.insert("admin".to_string(), Strength::STRONGEST);
/// roles.insert("user".to_string(), Strength::WEAKEST);
///
/// let estimator = FixedEstimator(Strength::WEAKEST);
/// let authorizer = StrengthAuthorizer::new(&roles, &estimator);
/// assert!(authorizer.is_satisfied("user", "apple").unwrap());
/// assert!(!authorizer.is_satisfied("admin", "apple").unwrap());
/// assert!(authorizer.is_satisfied("manager", "apple").is_err());
/// ```
#[derive(Debug)]
pub struct StrengthAuthorizer<'a, E: ?Sized> {
    roles: &'a BTreeMap<String, Strength>,
    estimator: &'a E,
}

impl<'a, E: StrengthEstimator + ?Sized> StrengthAuthorizer<'a, E> {
    /// Create a new authorizer over a role map
    #[must_use]
    pub const fn new(roles: &'a BTreeMap<String, Strength>, estimator: &'a E) -> Self {
        Self { roles, estimator }
    }

    /// Get the minimum strength required for a role
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::RoleNotFound` if the role is not mapped
    pub fn required_strength(&self, role: &str) -> Result<Strength> {
        self.roles
            .get(role)
            .copied()
            .ok_or_else(|| PolicyError::RoleNotFound(role.to_string()))
    }

    /// Evaluate a password for a role and return the full verdict
    ///
    /// The role is resolved before the estimator runs, so an unknown role
    /// fails regardless of the password.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::RoleNotFound` if the role is not mapped
    pub fn evaluate(&self, role: &str, password: &str) -> Result<StrengthVerdict> {
        let required = self.required_strength(role)?;
        let estimated = self.estimator.score(password);

        Ok(StrengthVerdict {
            role: role.to_string(),
            required,
            estimated,
            satisfied: estimated.satisfies(required),
        })
    }

    /// Check whether a password meets the requirement of a role
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::RoleNotFound` if the role is not mapped
    pub fn is_satisfied(&self, role: &str, password: &str) -> Result<bool> {
        let required = self.required_strength(role)?;
        Ok(self.estimator.score(password).satisfies(required))
    }

    /// Get every role whose requirement the password meets
    ///
    /// The estimator runs once, no matter how many roles are mapped.
    pub fn satisfied_roles(&self, password: &str) -> impl Iterator<Item = &'a str> + 'a {
        let estimated = self.estimator.score(password);
        let roles = self.roles;
        roles
            .iter()
            .filter(move |(_, required)| estimated.satisfies(**required))
            .map(|(role, _)| role.as_str())
    }

    /// Get the number of roles being evaluated
    #[must_use]
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}

/// Trait for types that can decide password satisfaction (DIP - Dependency Inversion)
pub trait PasswordAuthorizer {
    /// Check whether a password meets the requirement of a role
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::RoleNotFound` if the role is not mapped
    fn is_satisfied(&self, role: &str, password: &str) -> Result<bool>;
}

impl<'a, E: StrengthEstimator + ?Sized> PasswordAuthorizer for StrengthAuthorizer<'a, E> {
    fn is_satisfied(&self, role: &str, password: &str) -> Result<bool> {
        StrengthAuthorizer::is_satisfied(self, role, password)
    }
}
