use colored::*;
use core_policy::{Strength, StrengthEstimator};

pub fn label(strength: Strength) -> ColoredString {
    match strength.value() {
        0 => "very weak".red(),
        1 => "weak".red(),
        2 => "fair".yellow(),
        3 => "strong".green(),
        _ => "very strong".green().bold(),
    }
}

pub fn print(estimator: &impl StrengthEstimator, password: &str) {
    let strength = estimator.score(password);
    println!("{} {}/{} ({})", "Strength:".bold(), strength, Strength::MAX, label(strength));
}
