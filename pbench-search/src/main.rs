use std::env;
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pbench_search::cli::Cli;
use pbench_search::commands;
use pbench_search::{CliError, Dependencies, Settings};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the JSON response only.
    if env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::resolve(cli.overrides())?;

    let output = if cli.dry_run {
        commands::describe(&settings.datastore, &cli.command)?
    } else {
        let deps = Dependencies::new(&settings)?;
        commands::execute(&deps, cli.command).await?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_tracing();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}
