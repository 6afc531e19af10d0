//! Configuration command handlers. These run without a console.

use shopsync_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init {
            api_url,
            access_key,
            name,
        } => {
            let mut config = shopsync_config::load_config_or_default();
            config.profiles.insert(
                name.clone(),
                Profile {
                    api_url,
                    access_key,
                    timeout: None,
                },
            );
            if config.default_profile.is_none() {
                config.default_profile = Some(name.clone());
            }
            let path = shopsync_config::save_config(&config)?;
            output::confirm(
                &format!("Profile '{name}' written to {}", path.display()),
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::Show => {
            let mut config = shopsync_config::load_config_or_default();
            // Never print stored credentials.
            for profile in config.profiles.values_mut() {
                if profile.access_key.is_some() {
                    profile.access_key = Some("***".into());
                }
            }
            print_toml(&config, global.quiet)?;
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(
                &shopsync_config::config_path().display().to_string(),
                global.quiet,
            );
            Ok(())
        }
    }
}

fn print_toml(config: &Config, quiet: bool) -> Result<(), CliError> {
    let rendered = toml::to_string_pretty(config).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: e.to_string(),
    })?;
    output::print_output(&rendered, quiet);
    Ok(())
}
