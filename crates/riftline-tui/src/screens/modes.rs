//! Game modes screen — queue list with difficulty facet tabs and live search.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState, Wrap};
use strum::IntoEnumIterator;

use riftline_core::{Difficulty, GameMode, SelectionController, content};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::sub_tabs;

pub struct ModesScreen {
    focused: bool,
    controller: SelectionController<GameMode>,
    table_state: TableState,
    /// 0 = All, 1.. = Difficulty::iter() offset by one.
    facet_index: usize,
}

impl ModesScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            controller: SelectionController::new(content::game_modes()),
            table_state: TableState::default().with_selected(0),
            facet_index: 0,
        }
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn select(&mut self, idx: usize) {
        let len = self.controller.match_count();
        let clamped = if len == 0 { 0 } else { idx.min(len - 1) };
        self.table_state.select(Some(clamped));
    }

    fn cycle_facet(&mut self) -> Result<()> {
        let difficulties: Vec<Difficulty> = Difficulty::iter().collect();
        self.facet_index = (self.facet_index + 1) % (difficulties.len() + 1);
        let value = if self.facet_index == 0 {
            None
        } else {
            Some(difficulties[self.facet_index - 1].to_string())
        };
        self.controller.set_facet("difficulty", value.as_deref())?;
        self.select(0);
        Ok(())
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, mode: &GameMode) {
        let block = Block::default()
            .title(format!(" {} ", mode.name))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::styled(mode.description.clone(), theme::table_row()),
            Line::from(""),
        ];
        for feature in &mode.features {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme::ARCANE_BLUE)),
                Span::styled(feature.clone(), theme::table_row()),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}

impl Component for ModesScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let idx = self.selected_index();
                self.select(idx + 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let idx = self.selected_index();
                self.select(idx.saturating_sub(1));
            }
            KeyCode::Char('g') => self.select(0),
            KeyCode::Char('G') => {
                let len = self.controller.match_count();
                if len > 0 {
                    self.select(len - 1);
                }
            }
            KeyCode::Char('f') => self.cycle_facet()?,
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
            format!(" Game Modes ({shown}/{total}) ")
        } else {
            format!(" Game Modes ({shown}/{total}) [\"{query}\"] ")
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

        // The selected mode's description and features render alongside
        // the list, always visible.
        let layout = Layout::vertical([
            Constraint::Length(1),       // facet tabs
            Constraint::Min(4),          // table
            Constraint::Percentage(40),  // detail
        ])
        .split(inner);

        let mut labels = vec!["All".to_owned()];
        labels.extend(Difficulty::iter().map(|d| d.to_string()));
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        frame.render_widget(
            Paragraph::new(sub_tabs::render_sub_tabs(&label_refs, self.facet_index)),
            layout[0],
        );

        let header =
            Row::new(["Mode", "Players", "Duration", "Difficulty"]).style(theme::table_header());

        let rows: Vec<Row> = results
            .iter()
            .map(|mode| {
                Row::new(vec![
                    Span::styled(mode.name.clone(), theme::table_row()),
                    Span::styled(mode.players.clone(), theme::table_row()),
                    Span::styled(mode.duration.clone(), theme::key_hint()),
                    Span::styled(
                        mode.difficulty.to_string(),
                        Style::default().fg(theme::difficulty_color(mode.difficulty)),
                    ),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .row_highlight_style(theme::table_selected());

        let mut table_state = self.table_state.clone();
        frame.render_stateful_widget(table, layout[1], &mut table_state);

        if let Some(mode) = results.get(self.selected_index()) {
            self.render_detail(frame, layout[2], mode);
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn status_line(&self) -> Option<String> {
        Some(format!(
            "{}/{} modes",
            self.controller.match_count(),
            self.controller.store().len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_tabs_narrow_the_list() {
        let mut screen = ModesScreen::new();
        assert_eq!(screen.controller.match_count(), 6);

        screen.cycle_facet().unwrap(); // Low
        let names: Vec<&str> = screen
            .controller
            .results()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["ARAM", "Co-op vs AI"]);
    }
}
