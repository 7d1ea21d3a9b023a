//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use riftline_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Lookups ──────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(riftline::not_found),
        help("Run: riftline {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Input validation ─────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(riftline::validation))]
    Validation { field: String, reason: String },

    // ── Catalog core ─────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(
        code(riftline::catalog),
        help("Facet names are fixed per catalog; the message above lists them.")
    )]
    Core(#[from] CoreError),

    // ── Environment ──────────────────────────────────────────────────

    #[error("Could not read config file: {reason}")]
    #[diagnostic(
        code(riftline::config),
        help("Run: riftline config path to see where the file is expected.")
    )]
    Config { reason: String },

    #[error("I/O error: {0}")]
    #[diagnostic(code(riftline::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map each variant to its process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Core(_) | Self::Config { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_the_contract() {
        let not_found = CliError::NotFound {
            resource_type: "champion".into(),
            identifier: "teemo".into(),
            list_command: "champions list".into(),
        };
        assert_eq!(not_found.exit_code(), exit_code::NOT_FOUND);

        let usage = CliError::Validation {
            field: "defaults.output".into(),
            reason: "no such format".into(),
        };
        assert_eq!(usage.exit_code(), exit_code::USAGE);

        let core = CliError::from(CoreError::unknown_facet("lane", &["role"]));
        assert_eq!(core.exit_code(), exit_code::GENERAL);
    }
}
