//! Fuzz target for YamlParser::parse
//!
//! This target tests YAML role map parsing with arbitrary strings to verify:
//! - serde_yaml handles malformed YAML without panicking
//! - construction validation holds on every accepted document
//! - No memory exhaustion from deeply nested YAML

#![no_main]

use libfuzzer_sys::fuzz_target;
use app_utils::config::{RoleMapParser, YamlParser};
use core_policy::{PolicyError, Strength};

fuzz_target!(|data: &str| {
    let parser = YamlParser;

    // Try to parse arbitrary YAML - should NEVER panic
    match parser.parse(data) {
        Ok(policy) => {
            // 1. Never empty after construction
            assert!(!policy.is_empty(), "Accepted role map is empty");

            // 2. Every requirement in [0, 4]
            assert!(
                policy.roles().values().all(|s| s.value() <= Strength::MAX),
                "Accepted role map holds an out-of-range strength"
            );
        }
        Err(PolicyError::SerializationError(_))
        | Err(PolicyError::InvalidConfiguration(_))
        | Err(PolicyError::DuplicateKey(_)) => {}
        Err(other) => panic!("Unexpected error kind from YAML parsing: {:?}", other),
    }
});
