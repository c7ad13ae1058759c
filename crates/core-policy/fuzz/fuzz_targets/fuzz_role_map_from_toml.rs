//! Fuzz target for RoleStrengthPolicy::from_toml
//!
//! This target tests that role map deserialization handles arbitrary TOML
//! input without panicking, and that accepted maps hold the construction
//! invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use core_policy::{RoleStrengthPolicy, Strength};

fuzz_target!(|data: &str| {
    // from_toml may return Ok or Err, but should never crash
    if let Ok(policy) = RoleStrengthPolicy::from_toml(data) {
        // 1. Never empty after construction
        assert!(!policy.is_empty(), "Parsed role map is empty");

        // 2. Every requirement in [0, 4]
        for strength in policy.roles().values() {
            assert!(strength.value() <= Strength::MAX, "Strength out of range");
        }

        // 3. Serialization round-trips
        let toml = policy.to_toml().expect("serialize accepted policy");
        let reparsed = RoleStrengthPolicy::from_toml(&toml).expect("reparse serialized policy");
        assert_eq!(reparsed, policy);
    }
});
