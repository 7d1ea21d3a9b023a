//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render filtered results (a slice of borrowed records) in the chosen format.
///
/// - `table`: maps each record through `to_row` and builds a pretty table
/// - `json` / `json-compact`: serializes the records via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each record to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[&T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(|item| to_row(item)).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data
            .iter()
            .map(|item| id_fn(item))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render a single record in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since single-record detail views don't use `Tabled` derive.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.unwrap_or_else(|e| format!("<serialization failed: {e}>"))
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).unwrap_or_else(|e| format!("<serialization failed: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use riftline_core::content;

    #[test]
    fn plain_output_is_one_id_per_line() {
        let store = content::champions();
        let all: Vec<_> = store.all().iter().collect();
        let out = render_list(&OutputFormat::Plain, &all, |c| NameRow::from(c), |c| {
            c.name.clone()
        });
        assert_eq!(out.lines().count(), 6);
        assert!(out.starts_with("Ahri"));
    }

    #[test]
    fn compact_json_is_a_single_line() {
        let store = content::game_modes();
        let all: Vec<_> = store.all().iter().collect();
        let out = render_list(&OutputFormat::JsonCompact, &all, |m| NameRow::from(m), |m| {
            m.name.clone()
        });
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with('['));
    }

    #[derive(Tabled)]
    struct NameRow {
        name: String,
    }

    impl From<&riftline_core::Champion> for NameRow {
        fn from(c: &riftline_core::Champion) -> Self {
            Self { name: c.name.clone() }
        }
    }

    impl From<&riftline_core::GameMode> for NameRow {
        fn from(m: &riftline_core::GameMode) -> Self {
            Self { name: m.name.clone() }
        }
    }
}
