// ── Leaderboard domain types ──
//
// Rank change indicators are static display data: the upstream site ships
// them hardcoded with no update mechanism, so no polling or live-data
// machinery exists here either.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::item_id::ItemId;
use crate::catalog::Record;

/// Ladder tier for ranked players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    Challenger,
    Grandmaster,
    Master,
}

/// Movement since the previous snapshot of the ladder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum RankChange {
    Up,
    Down,
    Same,
}

/// One row of the solo queue leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub id: ItemId,
    pub rank: u32,
    pub name: String,
    pub tier: Tier,
    pub league_points: u32,
    pub win_rate_pct: u8,
    pub games: u32,
    pub main_champion: String,
    pub region: String,
    pub change: RankChange,
}

impl Record for RankedPlayer {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::from(&self.name), Cow::from(&self.main_champion)]
    }

    fn facet_names() -> &'static [&'static str] {
        &["tier", "region"]
    }

    fn facet(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "tier" => Some(Cow::from(self.tier.to_string())),
            "region" => Some(Cow::from(&self.region)),
            _ => None,
        }
    }
}

/// One row of the professional team leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProTeam {
    pub id: ItemId,
    pub rank: u32,
    pub name: String,
    /// Competitive league the team plays in (LCK, LEC, LPL, LCS).
    pub league: String,
    pub points: u32,
    pub win_rate_pct: u8,
    pub matches: u32,
    pub change: RankChange,
}

impl Record for ProTeam {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::from(&self.name)]
    }

    fn facet_names() -> &'static [&'static str] {
        &["league"]
    }

    fn facet(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "league" => Some(Cow::from(&self.league)),
            _ => None,
        }
    }
}
