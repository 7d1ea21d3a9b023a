//! Canonical domain types for every catalog riftline ships.
//!
//! Each type implements [`Record`](crate::catalog::Record) so the catalog
//! engine can search and facet it without knowing its shape. Controlled
//! vocabularies (roles, categories, tiers, statuses) are strum enums whose
//! `Display` strings double as facet values.

pub mod champion;
pub mod esports;
pub mod game_mode;
pub mod item_id;
pub mod news;
pub mod ranking;

pub use champion::{Champion, Role};
pub use esports::{EventStatus, MatchUp, Tournament};
pub use game_mode::{Difficulty, GameMode};
pub use item_id::ItemId;
pub use news::{NewsArticle, NewsCategory};
pub use ranking::{ProTeam, RankChange, RankedPlayer, Tier};
