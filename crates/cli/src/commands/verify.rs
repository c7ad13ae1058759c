use colored::*;
use core_policy::{StrengthEstimator, StrengthVerdict};
use std::path::Path;
use tracing::debug;

/// Evaluate a password for a role against a role map file
pub fn evaluate(
    estimator: &impl StrengthEstimator,
    config_path: &Path,
    role: &str,
    password: &str,
) -> anyhow::Result<StrengthVerdict> {
    let policy = app_utils::load_policy(config_path)?;
    Ok(policy.evaluate(estimator, role, password)?)
}

pub fn verify(
    estimator: &impl StrengthEstimator,
    config_path: &str,
    role: &str,
    password: Option<String>,
) -> anyhow::Result<bool> {
    let password = match password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt(format!("Password for role '{}'", role))
            .interact()?,
    };

    let verdict = evaluate(estimator, Path::new(config_path), role, &password)?;
    debug!(role, satisfied = verdict.satisfied, "password verified");

    println!(
        "  Estimated strength: {} ({})",
        verdict.estimated,
        super::score::label(verdict.estimated)
    );
    println!("  Required for {}: {}", verdict.role.cyan(), verdict.required);
    println!();
    if verdict.satisfied {
        println!("{} Password meets the policy", "✓".green().bold());
    } else {
        println!("{} Password is too weak for this role", "✗".red().bold());
    }

    Ok(verdict.satisfied)
}
