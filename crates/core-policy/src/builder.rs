//! Builder pattern for ergonomic policy construction

use crate::error::Result;
use crate::policy::RoleStrengthPolicy;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Builder for creating `RoleStrengthPolicy` instances with a fluent API
///
/// Labels are normalised as they are added; validation runs once in
/// [`build`](Self::build), with the same rules as `RoleStrengthPolicy::new`.
///
/// # Examples
///
/// ```
/// use core_policy::RoleStrengthPolicyBuilder;
///
/// let policy = RoleStrengthPolicyBuilder::new()
///     .role("admin", 4)
///     .role("averagejoe", 0)
///     .build()
///     .unwrap();
///
/// assert_eq!(policy.len(), 2);
///
/// // Both labels render as "admin"
/// let result = RoleStrengthPolicyBuilder::new()
///     .role("admin", 4)
///     .role(String::from("admin"), 3)
///     .build();
/// assert!(result.is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct RoleStrengthPolicyBuilder {
    entries: Vec<(String, i64)>,
}

impl RoleStrengthPolicyBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a minimum strength for a role
    #[must_use]
    pub fn role(mut self, label: impl fmt::Display, required: impl Into<i64>) -> Self {
        self.entries.push((label.to_string(), required.into()));
        self
    }

    /// Require the same minimum strength for several roles
    #[must_use]
    pub fn roles<I, K>(mut self, labels: I, required: impl Into<i64>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: fmt::Display,
    {
        let required = required.into();
        self.entries
            .extend(labels.into_iter().map(|label| (label.to_string(), required)));
        self
    }

    /// Get the number of entries added so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no entries have been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the policy, returning an error if validation fails
    ///
    /// # Errors
    ///
    /// Returns an error if construction validation fails (see `RoleStrengthPolicy::new()`)
    pub fn build(self) -> Result<RoleStrengthPolicy> {
        RoleStrengthPolicy::new(self.entries)
    }
}
