// ── News feed domain types ──

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::item_id::ItemId;
use crate::catalog::Record;

/// Editorial category of a news article. The feed's only facet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum NewsCategory {
    #[strum(serialize = "Patch Notes")]
    PatchNotes,
    Esports,
    Champions,
    #[strum(serialize = "Game Modes")]
    GameModes,
    Guides,
    Skins,
}

/// One article in the news feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: ItemId,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub category: NewsCategory,
    pub published: NaiveDate,
    pub read_minutes: u8,
    /// Featured articles render in the hero section ahead of the grid.
    pub featured: bool,
}

impl Record for NewsArticle {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::from(&self.title), Cow::from(&self.excerpt)]
    }

    fn facet_names() -> &'static [&'static str] {
        &["category"]
    }

    fn facet(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "category" => Some(Cow::from(self.category.to_string())),
            _ => None,
        }
    }
}
