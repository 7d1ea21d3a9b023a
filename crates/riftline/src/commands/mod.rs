//! Command dispatch: bridges CLI args -> selection controllers -> output.

pub mod champions;
pub mod config_cmd;
pub mod esports;
pub mod modes;
pub mod news;
pub mod rankings;
pub mod util;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a parsed command to the appropriate handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Champions(args) => champions::handle(args, settings),
        Command::Modes(args) => modes::handle(args, settings),
        Command::Esports(args) => esports::handle(args, settings),
        Command::News(args) => news::handle(args, settings),
        Command::Rankings(args) => rankings::handle(args, settings),
        Command::Config(args) => config_cmd::handle(args, settings),
    }
}
