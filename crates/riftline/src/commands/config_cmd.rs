//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand};
use crate::config::{self, Settings};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), settings.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let rendered = toml::to_string_pretty(&cfg).map_err(|e| CliError::Config {
                reason: format!("failed to serialize config: {e}"),
            })?;
            output::print_output(rendered.trim_end(), settings.quiet);
            Ok(())
        }
    }
}
