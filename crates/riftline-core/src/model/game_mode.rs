// ── Game mode domain types ──

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::item_id::ItemId;
use crate::catalog::Record;

/// How demanding a mode is on a new player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

/// One way to queue up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMode {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Team shape text, e.g. "5v5" or "2v2v2v2".
    pub players: String,
    /// Expected match length, e.g. "30-45 min".
    pub duration: String,
    pub difficulty: Difficulty,
    pub features: Vec<String>,
}

impl Record for GameMode {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::from(&self.name), Cow::from(&self.description)]
    }

    fn facet_names() -> &'static [&'static str] {
        &["difficulty"]
    }

    fn facet(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "difficulty" => Some(Cow::from(self.difficulty.to_string())),
            _ => None,
        }
    }
}
