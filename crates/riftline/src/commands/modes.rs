//! Game mode command handlers.

use tabled::Tabled;

use riftline_core::{GameMode, content};

use crate::cli::{ModesArgs, ModesCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ModeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Players")]
    players: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
}

impl From<&GameMode> for ModeRow {
    fn from(m: &GameMode) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.clone(),
            players: m.players.clone(),
            duration: m.duration.clone(),
            difficulty: m.difficulty.to_string(),
        }
    }
}

fn detail(m: &GameMode) -> String {
    let mut lines = vec![
        format!("ID:          {}", m.id),
        format!("Name:        {}", m.name),
        format!("Players:     {}", m.players),
        format!("Duration:    {}", m.duration),
        format!("Difficulty:  {}", m.difficulty),
        String::new(),
        m.description.clone(),
        String::new(),
        "Features:".to_string(),
    ];
    for feature in &m.features {
        lines.push(format!("  - {feature}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ModesArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        ModesCommand::List { search, difficulty } => {
            let controller = util::select(
                content::game_modes(),
                search.as_deref(),
                &[("difficulty", difficulty.map(|d| d.to_string()))],
            )?;
            let out = output::render_list(
                &settings.output,
                &controller.results(),
                |m| ModeRow::from(m),
                |m| m.name.clone(),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        ModesCommand::Get { mode } => {
            let store = content::game_modes();
            let found = util::find_record(&store, &mode, |m| &m.name, "game mode", "modes list")?;
            let out = output::render_single(&settings.output, found, detail, |m| m.name.clone());
            output::print_output(&out, settings.quiet);
            Ok(())
        }
    }
}
