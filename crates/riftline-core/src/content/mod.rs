//! Built-in display catalogs.
//!
//! These mirror the site's hardcoded mock data: a handful of records per
//! catalog, fixed at build time. Loaders validate through the normal
//! [`RecordStore`](crate::catalog::RecordStore) path so the id-uniqueness
//! contract is enforced even for shipped content.

mod champions;
mod community;
mod esports;
mod modes;
mod news;
mod rankings;

pub use champions::champions;
pub use community::{community_stats, CommunityStat};
pub use esports::{matches, tournaments};
pub use modes::game_modes;
pub use news::news_articles;
pub use rankings::{pro_teams, ranked_players};
