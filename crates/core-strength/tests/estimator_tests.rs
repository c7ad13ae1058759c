//! Integration tests for ZxcvbnEstimator

use core_policy::{PolicyError, RoleStrengthPolicy, Strength, StrengthEstimator};
use core_strength::{check_strength, StrengthError, ZxcvbnEstimator, MAX_PASSWORD_LENGTH};
use proptest::prelude::*;

#[test]
fn test_weak_password() {
    assert_eq!(check_strength("apple"), Strength::WEAKEST);
    assert_eq!(check_strength("password"), Strength::WEAKEST);
}

#[test]
fn test_strong_password() {
    assert_eq!(check_strength("Xk#9vQ!2mZ@7rT$4wL&8"), Strength::STRONGEST);
}

#[test]
fn test_role_policy_with_zxcvbn() {
    let policy = RoleStrengthPolicy::new([("admin", 4), ("user", 0)]).unwrap();
    let estimator = ZxcvbnEstimator::new();

    assert!(policy.is_satisfied(&estimator, "user", "apple").unwrap());
    assert!(!policy.is_satisfied(&estimator, "admin", "apple").unwrap());
    assert!(matches!(
        policy.is_satisfied(&estimator, "manager", "apple"),
        Err(PolicyError::RoleNotFound(_))
    ));
}

#[test]
fn test_user_inputs_never_raise_score() {
    let password = "janedoe1990";
    let plain = ZxcvbnEstimator::new().score(password);
    let informed = ZxcvbnEstimator::with_user_inputs(["janedoe", "1990"]).score(password);

    assert!(informed <= plain);
}

#[test]
fn test_try_score_length_limit() {
    let estimator = ZxcvbnEstimator::new();

    let at_limit = "a".repeat(MAX_PASSWORD_LENGTH);
    assert!(estimator.try_score(&at_limit).is_ok());

    let too_long = "a".repeat(MAX_PASSWORD_LENGTH + 1);
    assert_eq!(
        estimator.try_score(&too_long),
        Err(StrengthError::PasswordTooLong {
            max: MAX_PASSWORD_LENGTH,
            length: MAX_PASSWORD_LENGTH + 1,
        })
    );
}

#[test]
fn test_score_truncates_long_password() {
    let estimator = ZxcvbnEstimator::new();
    let prefix = "Xk#9vQ!2mZ@7rT$4wL&8".repeat(13);
    let long = format!("{}{}", &prefix[..MAX_PASSWORD_LENGTH], "tail");

    assert_eq!(
        estimator.score(&long),
        estimator.score(&prefix[..MAX_PASSWORD_LENGTH])
    );
}

#[test]
fn test_multibyte_truncation_on_char_boundary() {
    let estimator = ZxcvbnEstimator::new();
    let long = "é".repeat(MAX_PASSWORD_LENGTH + 10);

    // Must not panic slicing inside a code point
    let _ = estimator.score(&long);
    assert!(matches!(
        estimator.try_score(&long),
        Err(StrengthError::PasswordTooLong { .. })
    ));
}

proptest! {
    /// Property: scoring is deterministic and never panics
    #[test]
    fn prop_score_deterministic(password in ".{0,64}") {
        let estimator = ZxcvbnEstimator::new();
        prop_assert_eq!(estimator.score(&password), estimator.score(&password));
    }
}
