// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Password Police Team

//! # core-policy
//!
//! Role-keyed password strength policy with zero dependencies on any
//! particular strength estimation algorithm.
//!
//! This crate provides the core domain logic:
//! - `Strength` scores in `[0, 4]`
//! - `RoleStrengthPolicy`: validated role to minimum strength map
//! - `StrengthAuthorizer`: the satisfaction decision
//! - `StrengthEstimator`: the injected scoring capability
//!
//! ## Features
//!
//! - `std` (default): enables `SharedRoleStrengthPolicy`, a mutex-guarded
//!   wrapper for policies shared between threads

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod authorizer;
pub mod builder;
pub mod error;
pub mod policy;
#[cfg(feature = "std")]
pub mod shared;
pub mod strength;

pub use authorizer::{PasswordAuthorizer, StrengthAuthorizer, StrengthVerdict};
pub use builder::RoleStrengthPolicyBuilder;
/// Re-export commonly used types
pub use error::{PolicyError, Result};
pub use policy::{RoleMap, RoleMapDocument, RoleStrengthPolicy};
#[cfg(feature = "std")]
pub use shared::SharedRoleStrengthPolicy;
pub use strength::{FixedEstimator, Strength, StrengthEstimator};
