//! CLI-owned configuration: TOML defaults under the platform config dir.
//!
//! Resolution order for each setting: CLI flag, then environment, then the
//! config file, then the built-in default.

use std::path::PathBuf;

use clap::ValueEnum;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
///
/// `RIFTLINE_CONFIG` overrides the platform path (used by tests).
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("RIFTLINE_CONFIG") {
        return PathBuf::from(path);
    }
    ProjectDirs::from("io", "riftline", "riftline")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".riftline.toml"))
}

/// Load the config file, falling back to defaults when absent or invalid.
pub fn load_config_or_default() -> Config {
    let figment = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("RIFTLINE_DEFAULTS_").map(|k| format!("defaults.{k}").into()));

    figment.extract().unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring unreadable config, using defaults");
        Config::default()
    })
}

// ── Resolved runtime settings ────────────────────────────────────────

/// Effective per-invocation settings after flag / env / file resolution.
#[derive(Debug)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: ColorMode,
    pub quiet: bool,
}

/// Merge CLI flags over the config file into the effective settings.
pub fn resolve_settings(global: &GlobalOpts) -> Result<Settings, CliError> {
    let cfg = load_config_or_default();

    let output = match global.output {
        Some(ref fmt) => fmt.clone(),
        None => parse_value_enum(&cfg.defaults.output, "defaults.output")?,
    };
    let color = match global.color {
        Some(ref mode) => mode.clone(),
        None => parse_value_enum(&cfg.defaults.color, "defaults.color")?,
    };

    Ok(Settings {
        output,
        color,
        quiet: global.quiet,
    })
}

fn parse_value_enum<T: ValueEnum>(value: &str, field: &str) -> Result<T, CliError> {
    T::from_str(value, true).map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("unrecognized value '{value}' in config file"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_enum_parsing_is_case_insensitive() {
        let fmt: OutputFormat = parse_value_enum("JSON", "defaults.output").unwrap();
        assert!(matches!(fmt, OutputFormat::Json));

        let err = parse_value_enum::<ColorMode>("rainbow", "defaults.color");
        assert!(err.is_err());
    }
}
