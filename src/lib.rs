// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Password Police Team

//! # password-police
//!
//! Password strength policy enforcement keyed by user role.
//!
//! This crate provides a unified API for the workspace:
//!
//! - **Policy**: role to minimum strength map with validated mutations
//! - **Strength**: zxcvbn-backed password strength estimation
//! - **Config**: loading role maps from TOML or YAML files
//!
//! ## Quick Start
//!
//! ```rust
//! use password_police::{RoleStrengthPolicy, ZxcvbnEstimator};
//!
//! let mut policy = RoleStrengthPolicy::new([("admin", 4), ("user", 0)]).unwrap();
//! let estimator = ZxcvbnEstimator::new();
//!
//! assert!(policy.is_satisfied(&estimator, "user", "apple").unwrap());
//! assert!(!policy.is_satisfied(&estimator, "admin", "apple").unwrap());
//!
//! policy.update_role("user", 2).unwrap();
//! assert!(!policy.is_satisfied(&estimator, "user", "apple").unwrap());
//! ```
//!
//! ## Architecture
//!
//! This facade crate re-exports the following modules:
//!
//! - [`policy`] - Role strength policy (from `core-policy`)
//! - [`strength`] - zxcvbn estimator (from `core-strength`)
//! - [`config`] - Role map file loading (from `app-utils`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Policy module.
///
/// Re-exports `core_policy` for role strength policies.
pub mod policy {
    pub use core_policy::*;
}

/// Strength estimation module.
///
/// Re-exports `core_strength` for zxcvbn scoring.
pub mod strength {
    pub use core_strength::*;
}

/// Configuration module.
///
/// Re-exports `app_utils` for loading role maps from TOML and YAML.
pub mod config {
    pub use app_utils::*;
}

// Convenience re-exports at root level
pub use core_policy::{PolicyError, RoleStrengthPolicy, Strength, StrengthEstimator};
pub use core_strength::ZxcvbnEstimator;
