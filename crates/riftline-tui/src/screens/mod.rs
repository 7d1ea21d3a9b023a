//! Screen implementations. Each screen is a top-level Component.

pub mod champions;
pub mod esports;
pub mod home;
pub mod modes;
pub mod news;
pub mod rankings;

use crate::component::Component;
use crate::screen::ScreenId;

/// Create screen components for the tab bar.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (ScreenId::Home, Box::new(home::HomeScreen::new())),
        (
            ScreenId::Champions,
            Box::new(champions::ChampionsScreen::new()),
        ),
        (ScreenId::Modes, Box::new(modes::ModesScreen::new())),
        (ScreenId::Esports, Box::new(esports::EsportsScreen::new())),
        (ScreenId::News, Box::new(news::NewsScreen::new())),
        (
            ScreenId::Rankings,
            Box::new(rankings::RankingsScreen::new()),
        ),
    ]
}
