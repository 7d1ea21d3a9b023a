//! Champion command handlers.

use tabled::Tabled;

use riftline_core::{Champion, content};

use crate::cli::{ChampionsArgs, ChampionsCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
}

impl From<&Champion> for ChampionRow {
    fn from(c: &Champion) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            title: c.title.clone(),
            role: c.role.to_string(),
            difficulty: "●".repeat(usize::from(c.difficulty)),
        }
    }
}

fn detail(c: &Champion) -> String {
    let mut lines = vec![
        format!("ID:          {}", c.id),
        format!("Name:        {}", c.name),
        format!("Title:       {}", c.title),
        format!("Role:        {}", c.role),
        format!("Difficulty:  {}/3", c.difficulty),
        "Abilities:".to_string(),
    ];
    for (slot, ability) in ["Q", "W", "E", "R"].iter().zip(&c.abilities) {
        lines.push(format!("  {slot}: {ability}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ChampionsArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        ChampionsCommand::List { search, role } => {
            let controller = util::select(
                content::champions(),
                search.as_deref(),
                &[("role", role.map(|r| r.to_string()))],
            )?;
            let out = output::render_list(
                &settings.output,
                &controller.results(),
                |c| ChampionRow::from(c),
                |c| c.name.clone(),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        ChampionsCommand::Get { champion } => {
            let store = content::champions();
            let found =
                util::find_record(&store, &champion, |c| &c.name, "champion", "champions list")?;
            let out = output::render_single(&settings.output, found, detail, |c| c.name.clone());
            output::print_output(&out, settings.quiet);
            Ok(())
        }
    }
}
