mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use employee_form::config::DEFAULT_CONFIG_FILE;
use employee_form::Config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "employee-form")]
#[command(version, about = "Validate employee records from the command line", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one record and print the summary dialog
    Check {
        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        #[arg(long, default_value = "")]
        employee_id: String,

        #[arg(long, default_value = "")]
        email: String,

        /// Print the submission result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit and submit the form interactively from stdin
    Shell,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    debug!(path = ?cli.config, "configuration loaded");

    match cli.command {
        Commands::Check {
            first_name,
            last_name,
            employee_id,
            email,
            json,
        } => {
            let values = employee_form::FieldValues::new(first_name, last_name, employee_id, email);
            let accepted = commands::check::execute(&values, &config, json)?;
            Ok(if accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Shell => {
            commands::shell::execute(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
