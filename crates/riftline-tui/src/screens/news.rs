//! News screen — featured stories on top, the rest of the feed below,
//! category facet tabs and live search across both.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use strum::IntoEnumIterator;

use riftline_core::{NewsArticle, NewsCategory, SelectionController, content};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::sub_tabs;

pub struct NewsScreen {
    focused: bool,
    controller: SelectionController<NewsArticle>,
    /// Cursor into the filtered results (featured and regular combined).
    selected: usize,
    /// 0 = All, 1.. = NewsCategory::iter() offset by one.
    facet_index: usize,
    detail_open: bool,
}

impl NewsScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            controller: SelectionController::new(content::news_articles()),
            selected: 0,
            facet_index: 0,
            detail_open: false,
        }
    }

    fn select(&mut self, idx: usize) {
        let len = self.controller.match_count();
        self.selected = if len == 0 { 0 } else { idx.min(len - 1) };
    }

    fn cycle_facet(&mut self) -> Result<()> {
        let categories: Vec<NewsCategory> = NewsCategory::iter().collect();
        self.facet_index = (self.facet_index + 1) % (categories.len() + 1);
        let value = if self.facet_index == 0 {
            None
        } else {
            Some(categories[self.facet_index - 1].to_string())
        };
        self.controller.set_facet("category", value.as_deref())?;
        self.select(0);
        Ok(())
    }

    /// Display order: featured stories first, then the rest, preserving
    /// feed order within each group. The cursor indexes this ordering.
    fn ordered<'a>(results: &[&'a NewsArticle]) -> Vec<&'a NewsArticle> {
        let mut ordered: Vec<&NewsArticle> =
            results.iter().copied().filter(|a| a.featured).collect();
        ordered.extend(results.iter().copied().filter(|a| !a.featured));
        ordered
    }

    fn headline_line<'a>(&self, article: &'a NewsArticle, index: usize) -> Line<'a> {
        let cursor = if index == self.selected { "▸ " } else { "  " };
        let style = if index == self.selected {
            theme::table_selected()
        } else {
            theme::table_row()
        };
        Line::from(vec![
            Span::styled(cursor, style),
            Span::styled(
                format!("[{}] ", article.category),
                Style::default().fg(theme::category_color(article.category)),
            ),
            Span::styled(article.title.clone(), style),
            Span::styled(
                format!("  {} · {} min", article.published, article.read_minutes),
                theme::key_hint(),
            ),
        ])
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, article: &NewsArticle) {
        let block = Block::default()
            .title(format!(" {} ", article.title))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    article.category.to_string(),
                    Style::default().fg(theme::category_color(article.category)),
                ),
                Span::styled(
                    format!("  {} · {} min read", article.published, article.read_minutes),
                    theme::key_hint(),
                ),
            ]),
            Line::from(""),
            Line::styled(article.excerpt.clone(), theme::table_row()),
            Line::from(""),
            Line::styled(article.body.clone(), theme::key_hint()),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}

impl Component for NewsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.detail_open && key.code == KeyCode::Esc {
            self.detail_open = false;
            return Ok(Some(Action::Render));
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select(self.selected + 1),
            KeyCode::Char('k') | KeyCode::Up => self.select(self.selected.saturating_sub(1)),
            KeyCode::Char('g') => self.select(0),
            KeyCode::Char('G') => {
                let len = self.controller.match_count();
                if len > 0 {
                    self.select(len - 1);
                }
            }
            KeyCode::Char('f') => self.cycle_facet()?,
            KeyCode::Enter => {
                if self.controller.match_count() > 0 {
                    self.detail_open = !self.detail_open;
                }
            }
            _ => return Ok(None),
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::SearchInput(query) => {
                self.controller.set_search_text(query.as_str());
                self.select(0);
            }
            Action::CloseSearch => {
                self.controller.set_search_text("");
                self.select(0);
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let results = self.controller.results();
        let shown = results.len();
        let total = self.controller.store().len();

        let query = self.controller.state().search_text();
        let title = if query.is_empty() {
            format!(" News ({shown}/{total}) ")
        } else {
            format!(" News ({shown}/{total}) [\"{query}\"] ")
        };
        let block = Block::default()
            .title(title)
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

        let ordered = Self::ordered(&results);

        if self.detail_open {
            if let Some(article) = ordered.get(self.selected) {
                self.render_detail(frame, inner, article);
                return;
            }
        }

        let layout = Layout::vertical([
            Constraint::Length(1), // facet tabs
            Constraint::Min(1),    // feed
        ])
        .split(inner);

        let mut labels = vec!["All".to_owned()];
        labels.extend(NewsCategory::iter().map(|c| c.to_string()));
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        frame.render_widget(
            Paragraph::new(sub_tabs::render_sub_tabs(&label_refs, self.facet_index)),
            layout[0],
        );

        let featured_count = ordered.iter().filter(|a| a.featured).count();
        let mut lines = Vec::new();
        for (index, article) in ordered.iter().enumerate() {
            if index == 0 && article.featured {
                lines.push(Line::styled("  ★ Featured", theme::title_style()));
            }
            if index == featured_count {
                if featured_count > 0 {
                    lines.push(Line::from(""));
                }
                lines.push(Line::styled("  Latest", theme::title_style()));
            }
            lines.push(self.headline_line(article, index));
        }

        frame.render_widget(Paragraph::new(lines), layout[1]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn status_line(&self) -> Option<String> {
        Some(format!(
            "{}/{} articles",
            self.controller.match_count(),
            self.controller.store().len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tabs_narrow_the_feed() {
        let mut screen = NewsScreen::new();
        assert_eq!(screen.controller.match_count(), 6);

        screen.cycle_facet().unwrap(); // Patch Notes
        assert_eq!(screen.controller.match_count(), 1);
    }

    #[test]
    fn search_then_clear_restores_the_feed() {
        let mut screen = NewsScreen::new();
        screen.update(&Action::SearchInput("arena".into())).unwrap();
        assert_eq!(screen.controller.match_count(), 1);

        screen.update(&Action::CloseSearch).unwrap();
        assert_eq!(screen.controller.match_count(), 6);
    }
}
