// ── Esports domain types ──

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::item_id::ItemId;
use crate::catalog::Record;

/// Lifecycle state of a tournament or match.
///
/// Static display data -- the upstream site hardcodes these with no
/// update mechanism, so the enum is presentation-only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum EventStatus {
    Live,
    Upcoming,
    Completed,
}

/// A major tournament with its featured teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: ItemId,
    pub name: String,
    pub status: EventStatus,
    /// Human-readable date range, e.g. "Oct 15 - Nov 2, 2024".
    pub dates: String,
    pub teams: Vec<String>,
    pub prize_pool: String,
    pub location: String,
}

impl Record for Tournament {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::from(&self.name), Cow::from(&self.location)]
    }

    fn facet_names() -> &'static [&'static str] {
        &["status"]
    }

    fn facet(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "status" => Some(Cow::from(self.status.to_string())),
            _ => None,
        }
    }
}

/// One scheduled or finished match between two teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchUp {
    pub id: ItemId,
    pub team_one: String,
    pub team_two: String,
    /// Score text: "2-1" for decided games, "vs" before first blood.
    pub score: String,
    pub status: EventStatus,
    pub time: String,
    pub tournament: String,
}

impl Record for MatchUp {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::from(&self.team_one),
            Cow::from(&self.team_two),
            Cow::from(&self.tournament),
        ]
    }

    fn facet_names() -> &'static [&'static str] {
        &["status"]
    }

    fn facet(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "status" => Some(Cow::from(self.status.to_string())),
            _ => None,
        }
    }
}
