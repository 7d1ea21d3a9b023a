//! Leaderboard command handlers.

use tabled::Tabled;

use riftline_core::{ProTeam, RankChange, RankedPlayer, content};

use crate::cli::{RankingsArgs, RankingsCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

fn change_glyph(change: RankChange) -> &'static str {
    match change {
        RankChange::Up => "▲",
        RankChange::Down => "▼",
        RankChange::Same => "—",
    }
}

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "#")]
    rank: u32,
    #[tabled(rename = "Player")]
    name: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "LP")]
    lp: u32,
    #[tabled(rename = "Win %")]
    win_rate: String,
    #[tabled(rename = "Games")]
    games: u32,
    #[tabled(rename = "Main")]
    main: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Δ")]
    change: String,
}

impl From<&RankedPlayer> for PlayerRow {
    fn from(p: &RankedPlayer) -> Self {
        Self {
            rank: p.rank,
            name: p.name.clone(),
            tier: p.tier.to_string(),
            lp: p.league_points,
            win_rate: format!("{}%", p.win_rate_pct),
            games: p.games,
            main: p.main_champion.clone(),
            region: p.region.clone(),
            change: change_glyph(p.change).to_string(),
        }
    }
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "#")]
    rank: u32,
    #[tabled(rename = "Team")]
    name: String,
    #[tabled(rename = "League")]
    league: String,
    #[tabled(rename = "Points")]
    points: u32,
    #[tabled(rename = "Win %")]
    win_rate: String,
    #[tabled(rename = "Matches")]
    matches: u32,
    #[tabled(rename = "Δ")]
    change: String,
}

impl From<&ProTeam> for TeamRow {
    fn from(t: &ProTeam) -> Self {
        Self {
            rank: t.rank,
            name: t.name.clone(),
            league: t.league.clone(),
            points: t.points,
            win_rate: format!("{}%", t.win_rate_pct),
            matches: t.matches,
            change: change_glyph(t.change).to_string(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: RankingsArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        RankingsCommand::Players {
            search,
            tier,
            region,
        } => {
            let controller = util::select(
                content::ranked_players(),
                search.as_deref(),
                &[("tier", tier.map(|t| t.to_string())), ("region", region)],
            )?;
            let out = output::render_list(
                &settings.output,
                &controller.results(),
                |p| PlayerRow::from(p),
                |p| p.name.clone(),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        RankingsCommand::Teams { search, league } => {
            let controller = util::select(
                content::pro_teams(),
                search.as_deref(),
                &[("league", league)],
            )?;
            let out = output::render_list(
                &settings.output,
                &controller.results(),
                |t| TeamRow::from(t),
                |t| t.name.clone(),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }
    }
}
