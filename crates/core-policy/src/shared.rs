//! Thread-safe wrapper around `RoleStrengthPolicy`
//!
//! `RoleStrengthPolicy` has no interior synchronisation. When one policy is
//! shared between threads, every read and mutation goes through the single
//! mutex held here. Mutations return an owned snapshot because a borrow of
//! the map cannot outlive the lock guard.

use crate::authorizer::StrengthVerdict;
use crate::error::{PolicyError, Result};
use crate::policy::{RoleMap, RoleStrengthPolicy};
use crate::strength::StrengthEstimator;
use alloc::string::ToString;
use core::fmt;
use std::sync::{Mutex, MutexGuard};

/// Mutex-guarded `RoleStrengthPolicy`
///
/// Wrap it in an `Arc` to share it.
///
/// ```
/// use std::sync::Arc;
/// use core_policy::{FixedEstimator, RoleStrengthPolicy, SharedRoleStrengthPolicy, Strength};
///
/// let policy = RoleStrengthPolicy::new([("admin", 4)]).unwrap();
/// let shared = Arc::new(SharedRoleStrengthPolicy::new(policy));
///
/// let writer = Arc::clone(&shared);
/// std::thread::spawn(move || writer.add_role("user", 0).unwrap())
///     .join()
///     .unwrap();
///
/// let estimator = FixedEstimator(Strength::WEAKEST);
/// assert!(shared.is_satisfied(&estimator, "user", "apple").unwrap());
/// ```
#[derive(Debug)]
pub struct SharedRoleStrengthPolicy {
    inner: Mutex<RoleStrengthPolicy>,
}

impl SharedRoleStrengthPolicy {
    /// Wrap a policy
    #[must_use]
    pub fn new(policy: RoleStrengthPolicy) -> Self {
        Self {
            inner: Mutex::new(policy),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RoleStrengthPolicy>> {
        self.inner
            .lock()
            .map_err(|e| PolicyError::InternalError(e.to_string()))
    }

    /// Copy the current role map
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InternalError` if the lock is poisoned
    pub fn snapshot(&self) -> Result<RoleMap> {
        Ok(self.lock()?.roles().clone())
    }

    /// See [`RoleStrengthPolicy::is_satisfied`]
    ///
    /// # Errors
    ///
    /// - `PolicyError::RoleNotFound` if the role is not mapped
    /// - `PolicyError::InternalError` if the lock is poisoned
    pub fn is_satisfied<E>(
        &self,
        estimator: &E,
        role: impl fmt::Display,
        password: &str,
    ) -> Result<bool>
    where
        E: StrengthEstimator + ?Sized,
    {
        self.lock()?.is_satisfied(estimator, role, password)
    }

    /// See [`RoleStrengthPolicy::evaluate`]
    ///
    /// # Errors
    ///
    /// - `PolicyError::RoleNotFound` if the role is not mapped
    /// - `PolicyError::InternalError` if the lock is poisoned
    pub fn evaluate<E>(
        &self,
        estimator: &E,
        role: impl fmt::Display,
        password: &str,
    ) -> Result<StrengthVerdict>
    where
        E: StrengthEstimator + ?Sized,
    {
        self.lock()?.evaluate(estimator, role, password)
    }

    /// See [`RoleStrengthPolicy::add_role`]
    ///
    /// # Errors
    ///
    /// Same as `add_role`, plus `PolicyError::InternalError` if the lock is poisoned
    pub fn add_role(&self, role: impl fmt::Display, required: impl Into<i64>) -> Result<RoleMap> {
        self.lock()?.add_role(role, required).cloned()
    }

    /// See [`RoleStrengthPolicy::update_role`]
    ///
    /// # Errors
    ///
    /// Same as `update_role`, plus `PolicyError::InternalError` if the lock is poisoned
    pub fn update_role(
        &self,
        role: impl fmt::Display,
        required: impl Into<i64>,
    ) -> Result<RoleMap> {
        self.lock()?.update_role(role, required).cloned()
    }

    /// See [`RoleStrengthPolicy::delete_role`]
    ///
    /// # Errors
    ///
    /// Same as `delete_role`, plus `PolicyError::InternalError` if the lock is poisoned
    pub fn delete_role(&self, role: impl fmt::Display) -> Result<RoleMap> {
        self.lock()?.delete_role(role).cloned()
    }

    /// Unwrap the policy
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InternalError` if the lock is poisoned
    pub fn into_inner(self) -> Result<RoleStrengthPolicy> {
        self.inner
            .into_inner()
            .map_err(|e| PolicyError::InternalError(e.to_string()))
    }
}

impl From<RoleStrengthPolicy> for SharedRoleStrengthPolicy {
    fn from(policy: RoleStrengthPolicy) -> Self {
        Self::new(policy)
    }
}
