// ── News feed content ──

use chrono::NaiveDate;

use crate::catalog::RecordStore;
use crate::model::{ItemId, NewsArticle, NewsCategory};

#[allow(clippy::too_many_arguments)]
fn article(
    id: u64,
    title: &str,
    excerpt: &str,
    body: &str,
    category: NewsCategory,
    published: (i32, u32, u32),
    read_minutes: u8,
    featured: bool,
) -> NewsArticle {
    let (y, m, d) = published;
    NewsArticle {
        id: ItemId::Num(id),
        title: title.into(),
        excerpt: excerpt.into(),
        body: body.into(),
        category,
        published: NaiveDate::from_ymd_opt(y, m, d).expect("built-in dates are valid"),
        read_minutes,
        featured,
    }
}

/// The news feed, newest first.
pub fn news_articles() -> RecordStore<NewsArticle> {
    RecordStore::load(vec![
        article(
            1,
            "Patch 13.24: Major Champion Updates and Balance Changes",
            "The latest patch brings significant changes to several champions, \
             including reworks for Briar and adjustments to the jungle meta.",
            "This comprehensive patch introduces major gameplay changes...",
            NewsCategory::PatchNotes,
            (2024, 1, 15),
            5,
            true,
        ),
        article(
            2,
            "World Championship 2024: Finals Preview",
            "T1 faces off against G2 Esports in what promises to be the most \
             exciting World Championship final in years.",
            "The stage is set for an epic showdown...",
            NewsCategory::Esports,
            (2024, 1, 14),
            8,
            true,
        ),
        article(
            3,
            "New Champion Spotlight: Vex, The Gloomist",
            "Meet the newest addition to the Rift - a yordle mage with a unique \
             shadow-based kit and game-changing ultimate.",
            "Vex brings a fresh playstyle to the mid lane...",
            NewsCategory::Champions,
            (2024, 1, 13),
            6,
            false,
        ),
        article(
            4,
            "Arena Mode Returns: What's New This Season",
            "The popular 2v2v2v2 game mode is back with new augments, arenas, \
             and exciting gameplay mechanics.",
            "Arena mode has been completely revamped...",
            NewsCategory::GameModes,
            (2024, 1, 12),
            4,
            false,
        ),
        article(
            5,
            "Ranked Season 2024: Climb Tips from the Pros",
            "Professional players share their strategies for climbing the \
             ranked ladder and reaching your desired rank.",
            "Learn from the best with these expert tips...",
            NewsCategory::Guides,
            (2024, 1, 11),
            10,
            false,
        ),
        article(
            6,
            "Skin Spotlight: Lunar New Year Collection",
            "Celebrate the Lunar New Year with stunning new skins for Jinx, \
             Thresh, Ahri, and more champions.",
            "This year's Lunar New Year skins are spectacular...",
            NewsCategory::Skins,
            (2024, 1, 10),
            3,
            false,
        ),
    ])
    .expect("built-in article ids are unique")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_loads_with_two_featured_stories() {
        let store = news_articles();
        assert_eq!(store.len(), 6);
        assert_eq!(store.all().iter().filter(|a| a.featured).count(), 2);
    }

    #[test]
    fn every_category_display_matches_the_site_labels() {
        assert_eq!(NewsCategory::PatchNotes.to_string(), "Patch Notes");
        assert_eq!(NewsCategory::GameModes.to_string(), "Game Modes");
        assert_eq!(NewsCategory::Skins.to_string(), "Skins");
    }
}
