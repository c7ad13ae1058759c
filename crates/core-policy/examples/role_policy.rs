//! Walkthrough of a role strength policy with a stand-in estimator
//!
//! Run: cargo run --example role_policy -p core-policy

use core_policy::{PolicyError, RoleStrengthPolicyBuilder, Strength};

/// One point per four characters, capped at 4
fn by_length(password: &str) -> Strength {
    Strength::new((password.len() / 4).min(4) as i64).unwrap_or(Strength::STRONGEST)
}

fn main() -> Result<(), PolicyError> {
    println!("=== Role Strength Policy Example ===\n");

    println!("1. Building policy...");
    let mut policy = RoleStrengthPolicyBuilder::new()
        .role("admin", 4)
        .role("user", 0)
        .build()?;
    for (role, required) in policy.roles() {
        println!("   {} requires {}", role, required);
    }
    println!();

    println!("2. Evaluating passwords...");
    for (role, password) in [("user", "apple"), ("admin", "apple"), ("admin", "@pplepearorangepotato")] {
        let verdict = policy.evaluate(&by_length, role, password)?;
        println!(
            "   {:<6} {:<24} estimated {} / required {} -> {}",
            role,
            password,
            verdict.estimated,
            verdict.required,
            if verdict.satisfied { "ok" } else { "too weak" }
        );
    }
    println!();

    println!("3. Mutating roles...");
    policy.add_role("manager", 2)?;
    policy.update_role("user", 1)?;
    let roles = policy.delete_role("admin")?;
    println!("   Remaining roles: {:?}\n", roles.keys().collect::<Vec<_>>());

    println!("4. Unknown roles are errors...");
    match policy.is_satisfied(&by_length, "admin", "apple") {
        Err(e) => println!("   {}", e),
        Ok(satisfied) => println!("   unexpected result: {}", satisfied),
    }

    Ok(())
}
