use clap::{Parser, Subcommand};
use core_strength::ZxcvbnEstimator;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "password-police")]
#[command(version, about = "Role-keyed password strength policy CLI", long_about = None)]
struct Cli {
    /// Word that passwords should not be built from (user name, e-mail, ...)
    #[arg(long = "user-input", global = true, value_name = "VALUE")]
    user_inputs: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the strength score (0-4) of a password
    Score {
        /// Password to score
        password: String,
    },
    /// Role map validation
    Policy {
        #[command(subcommand)]
        command: PolicyCommands,
    },
    /// Check a password against the requirement of a role
    Verify {
        /// Path to the role map (TOML or YAML)
        #[arg(short, long)]
        config: String,

        /// Role the password is for
        #[arg(short, long)]
        role: String,

        /// Password to check (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
}

#[derive(Subcommand)]
enum PolicyCommands {
    /// Validate a role map file
    Check {
        /// Path to the role map (TOML or YAML)
        file: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let estimator = ZxcvbnEstimator::with_user_inputs(cli.user_inputs);

    match cli.command {
        Commands::Score { password } => {
            commands::score::print(&estimator, &password);
        }
        Commands::Policy { command } => match command {
            PolicyCommands::Check { file } => {
                commands::policy::check(&file)?;
            }
        },
        Commands::Verify {
            config,
            role,
            password,
        } => {
            if !commands::verify::verify(&estimator, &config, &role, password)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_verify_with_user_inputs() {
        let cli = Cli::try_parse_from([
            "password-police",
            "verify",
            "--config",
            "roles.toml",
            "--role",
            "admin",
            "--user-input",
            "janedoe",
            "--user-input",
            "jane@example.com",
        ])
        .unwrap();

        assert_eq!(cli.user_inputs, vec!["janedoe", "jane@example.com"]);
        assert!(matches!(
            cli.command,
            Commands::Verify { ref role, password: None, .. } if role == "admin"
        ));
    }
}
