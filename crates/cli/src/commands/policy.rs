use colored::*;
use std::path::Path;

pub fn check(file_path: &str) -> anyhow::Result<()> {
    println!("{} {}", "Checking role map:".bold(), file_path);

    let policy = app_utils::load_policy(Path::new(file_path))?;

    println!("  {} Roles: {}", "✓".green(), policy.len());
    for (role, required) in policy.roles() {
        println!(
            "  {} {} requires {} ({})",
            "✓".green(),
            role.cyan(),
            required,
            super::score::label(*required)
        );
    }

    // Check for potential issues
    let mut warnings = 0;

    for role in policy.roles().keys() {
        if role.trim().is_empty() {
            println!("  {} Role name is blank", "⚠".yellow());
            warnings += 1;
        } else if role.trim() != role {
            println!(
                "  {} Role '{}' has surrounding whitespace",
                "⚠".yellow(),
                role
            );
            warnings += 1;
        }
    }

    // Summary
    println!();
    if warnings == 0 {
        println!("{} Role map is valid!", "✓".green().bold());
    } else {
        println!(
            "{} Role map is valid with {} warning(s)",
            "⚠".yellow().bold(),
            warnings
        );
    }

    Ok(())
}
