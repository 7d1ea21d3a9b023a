// ── Champion domain types ──

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::item_id::ItemId;
use crate::catalog::Record;

/// Champion combat role. Doubles as the roster's only facet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    Mage,
    Fighter,
    Marksman,
    Support,
    Tank,
}

/// One playable champion as shown on the roster page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Champion {
    pub id: ItemId,
    pub name: String,
    pub title: String,
    pub role: Role,
    /// Mastery difficulty, 1 (easy) to 3 (hard).
    pub difficulty: u8,
    pub abilities: Vec<String>,
}

impl Record for Champion {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::from(&self.name), Cow::from(&self.title)]
    }

    fn facet_names() -> &'static [&'static str] {
        &["role"]
    }

    fn facet(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "role" => Some(Cow::from(self.role.to_string())),
            _ => None,
        }
    }
}
