//! Home screen — community stat tiles, featured headlines, live matches.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use riftline_core::content::{self, CommunityStat};
use riftline_core::{EventStatus, MatchUp, NewsArticle};

use crate::component::Component;
use crate::theme;
use crate::widgets::stat_tile;

pub struct HomeScreen {
    focused: bool,
    stats: Vec<CommunityStat>,
    featured: Vec<NewsArticle>,
    live_matches: Vec<MatchUp>,
}

impl HomeScreen {
    pub fn new() -> Self {
        let featured = content::news_articles()
            .all()
            .iter()
            .filter(|a| a.featured)
            .cloned()
            .collect();
        let live_matches = content::matches()
            .all()
            .iter()
            .filter(|m| m.status == EventStatus::Live)
            .cloned()
            .collect();

        Self {
            focused: false,
            stats: content::community_stats(),
            featured,
            live_matches,
        }
    }

    fn render_featured(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" ★ Featured News ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        for article in &self.featured {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", article.category),
                    Style::default().fg(theme::category_color(article.category)),
                ),
                Span::styled(article.title.clone(), theme::table_row()),
            ]));
            lines.push(Line::styled(
                format!("   {} · {} min read", article.published, article.read_minutes),
                theme::key_hint(),
            ));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_live(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Live Now ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        if self.live_matches.is_empty() {
            lines.push(Line::styled("No live matches right now.", theme::key_hint()));
        }
        for m in &self.live_matches {
            lines.push(Line::from(vec![
                Span::styled("● ", theme::status_style(m.status)),
                Span::styled(
                    format!("{} {} {}", m.team_one, m.score, m.team_two),
                    theme::table_row(),
                ),
                Span::styled(format!("  {}", m.tournament), theme::key_hint()),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for HomeScreen {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Riftline ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(5), // stat tiles
            Constraint::Min(4),    // featured news
            Constraint::Min(4),    // live matches
        ])
        .split(inner);

        // Four headline figures, split evenly.
        let tiles = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(layout[0]);
        for (stat, tile_area) in self.stats.iter().zip(tiles.iter()) {
            stat_tile::render_stat_tile(
                frame,
                *tile_area,
                &stat.value,
                &stat.label,
                &stat.description,
            );
        }

        self.render_featured(frame, layout[1]);
        self.render_live(frame, layout[2]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_preloads_featured_and_live_content() {
        let screen = HomeScreen::new();
        assert_eq!(screen.stats.len(), 4);
        assert_eq!(screen.featured.len(), 2);
        assert_eq!(screen.live_matches.len(), 1);
    }

    #[test]
    fn render_is_a_noop_for_updates() {
        let mut screen = HomeScreen::new();
        let follow_up = screen
            .update(&crate::action::Action::SearchInput("x".into()))
            .unwrap();
        assert!(follow_up.is_none());
    }
}
