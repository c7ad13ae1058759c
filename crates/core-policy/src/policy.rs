//! Role to password strength policy
//!
//! This module provides the core domain type, [`RoleStrengthPolicy`]: a map
//! from role name to the minimum [`Strength`] a password must reach for that
//! role.
//!
//! ## Invariants
//!
//! - The map is never empty after construction
//! - Every requirement lies in `[0, 4]`
//! - Role labels are normalised with `Display`; two labels that render to the
//!   same string are a `DuplicateKey` error
//!
//! After construction the map may shrink to empty through `delete_role`; it is
//! not re-validated.

use crate::authorizer::{StrengthAuthorizer, StrengthVerdict};
use crate::error::{PolicyError, Result};
use crate::strength::{Strength, StrengthEstimator};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Role name to required strength
pub type RoleMap = BTreeMap<String, Strength>;

const EMPTY_ROLE_MAP: &str = "Role map must contain at least one role to password strength pair";
const NON_INTEGER_STRENGTH: &str = "Password strength must be an integer value";

/// Policy mapping roles to minimum password strengths
///
/// Mutations return a borrow of the live map. Clone it if a snapshot that
/// outlives the next mutation is needed.
///
/// # Example
///
/// ```
/// use core_policy::{FixedEstimator, RoleStrengthPolicy, Strength};
///
/// let mut policy = RoleStrengthPolicy::new([("admin", 4)]).unwrap();
/// let roles = policy.add_role("user", 2).unwrap();
/// assert_eq!(roles.len(), 2);
///
/// let estimator = FixedEstimator(Strength::new(2).unwrap());
/// assert!(policy.is_satisfied(&estimator, "user", "@pplepearorange").unwrap());
/// assert!(!policy.is_satisfied(&estimator, "admin", "@pplepearorange").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RoleMapDocument")]
pub struct RoleStrengthPolicy {
    roles: RoleMap,
}

/// Strength value as written in a configuration document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawStrength {
    Integer(i64),
    Unsigned(u64),
    Other(IgnoredAny),
}

/// Unvalidated role map as read from a configuration document
///
/// Entries are kept in document order, repeated keys included, so that
/// collisions reach the same check as in-code maps. Values are left untyped
/// so that a non-integer strength is reported as `InvalidConfiguration`
/// rather than as a parse error. Convert with `RoleStrengthPolicy::try_from`.
#[derive(Debug, Clone)]
pub struct RoleMapDocument(Vec<(String, RawStrength)>);

impl<'de> Deserialize<'de> for RoleMapDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RoleMapDocument;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of role names to password strengths")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> core::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, RawStrength>()? {
                    entries.push(entry);
                }
                Ok(RoleMapDocument(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Convert a raw document to a policy with full construction validation
///
/// # Errors
///
/// - `PolicyError::InvalidConfiguration` if the document is empty or holds a
///   non-integer or out-of-range strength
/// - `PolicyError::DuplicateKey` if a role appears twice
impl TryFrom<RoleMapDocument> for RoleStrengthPolicy {
    type Error = PolicyError;

    fn try_from(document: RoleMapDocument) -> Result<Self> {
        let mut entries = Vec::with_capacity(document.0.len());
        for (role, value) in document.0 {
            let strength = match value {
                RawStrength::Integer(strength) => i128::from(strength),
                RawStrength::Unsigned(strength) => i128::from(strength),
                RawStrength::Other(_) => {
                    return Err(PolicyError::InvalidConfiguration(
                        NON_INTEGER_STRENGTH.to_string(),
                    ))
                }
            };
            entries.push((role, strength));
        }

        Self::from_entries(entries)
    }
}

impl Serialize for RoleStrengthPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.roles.serialize(serializer)
    }
}

impl RoleStrengthPolicy {
    // ===== Constructors =====

    /// Create a policy from an initial role map
    ///
    /// Labels may be any `Display` type; they are normalised to strings.
    ///
    /// # Errors
    ///
    /// - `PolicyError::DuplicateKey` if two labels normalise to the same string
    /// - `PolicyError::InvalidConfiguration` if `initial` is empty or any
    ///   strength is outside `[0, 4]`
    pub fn new<I, K, V>(initial: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: Into<i64>,
    {
        Self::from_entries(
            initial
                .into_iter()
                .map(|(label, strength)| (label.to_string(), i128::from(strength.into()))),
        )
    }

    fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, i128)>,
    {
        let mut raw: BTreeMap<String, i128> = BTreeMap::new();
        for (role, strength) in entries {
            if raw.contains_key(&role) {
                return Err(PolicyError::DuplicateKey(role));
            }
            raw.insert(role, strength);
        }

        if raw.is_empty() {
            return Err(PolicyError::InvalidConfiguration(
                EMPTY_ROLE_MAP.to_string(),
            ));
        }

        // Every requirement must be in range, not just one of them
        let mut roles = RoleMap::new();
        for (role, value) in raw {
            let Some(strength) = i64::try_from(value).ok().and_then(|v| Strength::new(v).ok())
            else {
                return Err(PolicyError::InvalidConfiguration(format!(
                    "Password strength must be between 0 and 4 (got {})",
                    value
                )));
            };
            roles.insert(role, strength);
        }

        debug!(roles = roles.len(), "role strength policy created");
        Ok(Self { roles })
    }

    /// Load a policy from a TOML document of `role = strength` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - TOML parsing fails
    /// - Construction validation fails (see `new()`)
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let document: RoleMapDocument = toml::from_str(toml_str)?;
        Self::try_from(document)
    }

    /// Serialize the policy to a TOML document
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::SerializationError` if TOML serialization fails
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| PolicyError::SerializationError(e.to_string()))
    }

    // ===== Accessors =====

    /// Get the live role map
    #[must_use]
    pub fn roles(&self) -> &RoleMap {
        &self.roles
    }

    /// Consume the policy and return its role map
    #[must_use]
    pub fn into_roles(self) -> RoleMap {
        self.roles
    }

    /// Get the strength required for a role, if it is mapped
    #[must_use]
    pub fn required_strength(&self, role: impl fmt::Display) -> Option<Strength> {
        self.roles.get(&role.to_string()).copied()
    }

    /// Check whether a role is mapped
    #[must_use]
    pub fn contains_role(&self, role: impl fmt::Display) -> bool {
        self.roles.contains_key(&role.to_string())
    }

    /// Get the number of mapped roles
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check whether every role has been deleted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    // ===== Queries =====

    /// Check whether a password meets the requirement of a role
    ///
    /// This method delegates to `StrengthAuthorizer`.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::RoleNotFound` if the role is not mapped
    pub fn is_satisfied<E>(
        &self,
        estimator: &E,
        role: impl fmt::Display,
        password: &str,
    ) -> Result<bool>
    where
        E: StrengthEstimator + ?Sized,
    {
        StrengthAuthorizer::new(&self.roles, estimator).is_satisfied(&role.to_string(), password)
    }

    /// Evaluate a password for a role and return the full verdict
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::RoleNotFound` if the role is not mapped
    pub fn evaluate<E>(
        &self,
        estimator: &E,
        role: impl fmt::Display,
        password: &str,
    ) -> Result<StrengthVerdict>
    where
        E: StrengthEstimator + ?Sized,
    {
        StrengthAuthorizer::new(&self.roles, estimator).evaluate(&role.to_string(), password)
    }

    // ===== Mutations =====

    /// Map a new role to a required strength
    ///
    /// # Errors
    ///
    /// - `PolicyError::OutOfRange` if `required` is outside `[0, 4]`
    /// - `PolicyError::AlreadyExists` if the role is already mapped
    pub fn add_role(
        &mut self,
        role: impl fmt::Display,
        required: impl Into<i64>,
    ) -> Result<&RoleMap> {
        let role = role.to_string();
        let required = Strength::new(required.into())?;
        if self.roles.contains_key(&role) {
            return Err(PolicyError::AlreadyExists(role));
        }

        debug!(role = %role, required = %required, "role added");
        self.roles.insert(role, required);
        Ok(&self.roles)
    }

    /// Change the required strength of a mapped role
    ///
    /// # Errors
    ///
    /// - `PolicyError::OutOfRange` if `required` is outside `[0, 4]`
    /// - `PolicyError::NotFound` if the role is not mapped
    pub fn update_role(
        &mut self,
        role: impl fmt::Display,
        required: impl Into<i64>,
    ) -> Result<&RoleMap> {
        let role = role.to_string();
        let required = Strength::new(required.into())?;
        let Some(current) = self.roles.get_mut(&role) else {
            return Err(PolicyError::NotFound(role));
        };

        debug!(role = %role, from = %current, to = %required, "role updated");
        *current = required;
        Ok(&self.roles)
    }

    /// Remove a role from the policy
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::NotFound` if the role is not mapped
    pub fn delete_role(&mut self, role: impl fmt::Display) -> Result<&RoleMap> {
        let role = role.to_string();
        if self.roles.remove(&role).is_none() {
            return Err(PolicyError::NotFound(role));
        }

        debug!(role = %role, remaining = self.roles.len(), "role deleted");
        Ok(&self.roles)
    }
}
