//! Property-based tests for RoleStrengthPolicy invariants
//!
//! These tests ensure that:
//! - Valid role maps always construct, with keys stringified
//! - Out-of-range strengths are always rejected, at construction and on mutation
//! - Failed mutations never change the map
//! - Satisfaction is exactly `score >= required`

use core_policy::{FixedEstimator, PolicyError, RoleStrengthPolicy, Strength};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn arb_role() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,15}").unwrap()
}

fn arb_strength() -> impl Strategy<Value = i64> {
    0i64..=4
}

fn arb_out_of_range() -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..0i64, 5i64..=i64::MAX]
}

fn arb_role_map() -> impl Strategy<Value = BTreeMap<String, i64>> {
    proptest::collection::btree_map(arb_role(), arb_strength(), 1..16)
}

proptest! {
    /// Property: any non-empty in-range map constructs and round-trips its entries
    #[test]
    fn prop_valid_map_constructs(map in arb_role_map()) {
        let policy = RoleStrengthPolicy::new(map.clone()).unwrap();

        prop_assert_eq!(policy.len(), map.len());
        for (role, value) in &map {
            prop_assert_eq!(policy.required_strength(role), Some(Strength::new(*value).unwrap()));
        }
    }

    /// Property: a single out-of-range entry poisons the whole map
    #[test]
    fn prop_out_of_range_entry_rejected(
        map in arb_role_map(),
        role in arb_role(),
        bad in arb_out_of_range(),
    ) {
        let mut map = map;
        map.insert(role, bad);

        let result = RoleStrengthPolicy::new(map);
        prop_assert!(matches!(result, Err(PolicyError::InvalidConfiguration(_))));
    }

    /// Property: adding an existing role fails and leaves the map unchanged
    #[test]
    fn prop_add_existing_role_rejected(map in arb_role_map(), value in arb_strength()) {
        let mut policy = RoleStrengthPolicy::new(map.clone()).unwrap();
        let before = policy.clone();
        let existing = map.keys().next().unwrap().clone();

        let result = policy.add_role(&existing, value);
        prop_assert!(matches!(result, Err(PolicyError::AlreadyExists(_))));
        prop_assert_eq!(policy, before);
    }

    /// Property: out-of-range add and update fail and leave the map unchanged
    #[test]
    fn prop_out_of_range_mutation_rejected(
        map in arb_role_map(),
        role in arb_role(),
        bad in arb_out_of_range(),
    ) {
        let mut policy = RoleStrengthPolicy::new(map).unwrap();
        let before = policy.clone();

        let added = policy.add_role(&role, bad).map(|_| ());
        let rejected = matches!(added, Err(PolicyError::OutOfRange { value }) if value == bad);
        prop_assert!(rejected, "expected OutOfRange({}), got {:?}", bad, added);
        let updated = policy.update_role(&role, bad).map(|_| ());
        let rejected = matches!(updated, Err(PolicyError::OutOfRange { value }) if value == bad);
        prop_assert!(rejected, "expected OutOfRange({}), got {:?}", bad, updated);
        prop_assert_eq!(policy, before);
    }

    /// Property: adding a new role yields exactly the prior entries plus the new one
    #[test]
    fn prop_add_new_role(map in arb_role_map(), role in arb_role(), value in arb_strength()) {
        prop_assume!(!map.contains_key(&role));
        let mut policy = RoleStrengthPolicy::new(map.clone()).unwrap();

        let mut expected: BTreeMap<String, Strength> = map
            .iter()
            .map(|(k, v)| (k.clone(), Strength::new(*v).unwrap()))
            .collect();
        expected.insert(role.clone(), Strength::new(value).unwrap());

        let roles = policy.add_role(&role, value).unwrap();
        prop_assert_eq!(roles, &expected);
    }

    /// Property: deleting removes exactly one entry; deleting again fails
    #[test]
    fn prop_delete_role(map in arb_role_map()) {
        let mut policy = RoleStrengthPolicy::new(map.clone()).unwrap();
        let target = map.keys().last().unwrap().clone();

        let remaining = policy.delete_role(&target).unwrap().len();
        prop_assert_eq!(remaining, map.len() - 1);
        prop_assert!(!policy.contains_role(&target));

        let again = policy.delete_role(&target).map(|_| ());
        prop_assert!(matches!(again, Err(PolicyError::NotFound(_))));
    }

    /// Property: satisfaction is exactly score >= required
    #[test]
    fn prop_satisfaction_matches_comparison(
        required in arb_strength(),
        score in arb_strength(),
        password in ".*",
    ) {
        let policy = RoleStrengthPolicy::new([("role", required)]).unwrap();
        let estimator = FixedEstimator(Strength::new(score).unwrap());

        prop_assert_eq!(
            policy.is_satisfied(&estimator, "role", &password).unwrap(),
            score >= required
        );
    }

    /// Property: unknown roles fail independent of the password
    #[test]
    fn prop_unknown_role_fails(map in arb_role_map(), role in arb_role(), password in ".*") {
        prop_assume!(!map.contains_key(&role));
        let policy = RoleStrengthPolicy::new(map).unwrap();

        let result = policy.is_satisfied(&FixedEstimator(Strength::STRONGEST), &role, &password);
        prop_assert!(matches!(result, Err(PolicyError::RoleNotFound(_))));
    }
}
