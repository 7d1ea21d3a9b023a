//! Esports command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use riftline_core::{EventStatus, MatchUp, Tournament, content};

use crate::cli::{EsportsArgs, EsportsCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct TournamentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Tournament")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Prize Pool")]
    prize_pool: String,
    #[tabled(rename = "Location")]
    location: String,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Match")]
    pairing: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Tournament")]
    tournament: String,
}

/// Status cell, red-highlighted for live events when color is on.
fn status_cell(status: EventStatus, color: bool) -> String {
    if color && status == EventStatus::Live {
        format!("{}", status.red().bold())
    } else {
        status.to_string()
    }
}

fn tournament_row(t: &Tournament, color: bool) -> TournamentRow {
    TournamentRow {
        id: t.id.to_string(),
        name: t.name.clone(),
        status: status_cell(t.status, color),
        dates: t.dates.clone(),
        prize_pool: t.prize_pool.clone(),
        location: t.location.clone(),
    }
}

fn match_row(m: &MatchUp, color: bool) -> MatchRow {
    MatchRow {
        id: m.id.to_string(),
        pairing: format!("{} vs {}", m.team_one, m.team_two),
        score: m.score.clone(),
        status: status_cell(m.status, color),
        time: m.time.clone(),
        tournament: m.tournament.clone(),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: EsportsArgs, settings: &Settings) -> Result<(), CliError> {
    let color = output::should_color(&settings.color);

    match args.command {
        EsportsCommand::Tournaments { search, status } => {
            let controller = util::select(
                content::tournaments(),
                search.as_deref(),
                &[("status", status.map(|s| s.to_string()))],
            )?;
            let out = output::render_list(
                &settings.output,
                &controller.results(),
                |t| tournament_row(t, color),
                |t| t.name.clone(),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        EsportsCommand::Matches { search, status } => {
            let controller = util::select(
                content::matches(),
                search.as_deref(),
                &[("status", status.map(|s| s.to_string()))],
            )?;
            let out = output::render_list(
                &settings.output,
                &controller.results(),
                |m| match_row(m, color),
                |m| format!("{} vs {}", m.team_one, m.team_two),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }
    }
}
