mod cli;
mod commands;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use shopsync_core::{ApiConfig, CatalogClient, Console};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a catalog connection.
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Everything else mounts the console.
        cmd => {
            let api_config = build_api_config(&cli.global)?;
            let client = CatalogClient::new(&api_config).map_err(|e| CliError::Api {
                message: e.to_string(),
            })?;
            let mut console = Console::new(client);

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &mut console, &cli.global).await
        }
    }
}

/// Build the explicit `ApiConfig` from the config file, profile, and
/// CLI flag / environment overrides.
fn build_api_config(global: &cli::GlobalOpts) -> Result<ApiConfig, CliError> {
    let cfg = shopsync_config::load_config_or_default();
    let profile_name = shopsync_config::active_profile_name(global.profile.as_deref(), &cfg);

    let mut api = if let Some(ref url_str) = global.api_url {
        // Flags (or SHOPSYNC_API_URL) alone are enough — no profile needed.
        let base_url = url_str.parse().map_err(|_| CliError::Validation {
            field: "api-url".into(),
            reason: format!("invalid URL: {url_str}"),
        })?;
        ApiConfig::new(base_url)
    } else {
        shopsync_config::resolve(&cfg, &profile_name)?
    };

    if let Some(ref key) = global.access_key {
        api.access_key = Some(SecretString::from(key.clone()));
    }
    if let Some(timeout) = global.timeout {
        api.timeout = Duration::from_secs(timeout);
    }

    Ok(api)
}
