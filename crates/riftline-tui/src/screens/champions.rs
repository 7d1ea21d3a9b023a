//! Champions screen — roster table with role facet tabs and live search.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState};
use strum::IntoEnumIterator;

use riftline_core::{Champion, Role, SelectionController, content};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::sub_tabs;

pub struct ChampionsScreen {
    focused: bool,
    controller: SelectionController<Champion>,
    table_state: TableState,
    /// 0 = All, 1.. = Role::iter() offset by one.
    facet_index: usize,
    detail_open: bool,
}

impl ChampionsScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            controller: SelectionController::new(content::champions()),
            table_state: TableState::default().with_selected(0),
            facet_index: 0,
            detail_open: false,
        }
    }

    fn facet_labels() -> Vec<String> {
        let mut labels = vec!["All".to_owned()];
        labels.extend(Role::iter().map(|r| r.to_string()));
        labels
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn select(&mut self, idx: usize) {
        let len = self.controller.match_count();
        let clamped = if len == 0 { 0 } else { idx.min(len - 1) };
        self.table_state.select(Some(clamped));
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.controller.match_count();
        if len == 0 {
            return;
        }
        let next = self
            .selected_index()
            .saturating_add_signed(delta)
            .min(len - 1);
        self.select(next);
    }

    /// Advance to the next role tab and re-filter.
    fn cycle_facet(&mut self) -> Result<()> {
        let roles: Vec<Role> = Role::iter().collect();
        self.facet_index = (self.facet_index + 1) % (roles.len() + 1);
        let value = if self.facet_index == 0 {
            None
        } else {
            Some(roles[self.facet_index - 1].to_string())
        };
        self.controller.set_facet("role", value.as_deref())?;
        self.select(0);
        Ok(())
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, champion: &Champion) {
        let block = Block::default()
            .title(format!(" {} ", champion.name))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let role_style = Style::default().fg(theme::role_color(champion.role));
        let mut lines = vec![
            Line::from(vec![
                Span::styled(champion.title.clone(), theme::table_row()),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("{} {}", theme::role_glyph(champion.role), champion.role),
                    role_style,
                ),
                Span::styled(
                    format!("   Difficulty {}", "●".repeat(usize::from(champion.difficulty))),
                    theme::key_hint(),
                ),
            ]),
            Line::from(""),
        ];
        for (slot, ability) in ["Q", "W", "E", "R"].iter().zip(&champion.abilities) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {slot}  "), theme::key_hint_key()),
                Span::styled(ability.clone(), theme::table_row()),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for ChampionsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.detail_open && key.code == KeyCode::Esc {
            self.detail_open = false;
            return Ok(Some(Action::Render));
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
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
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_selection(10);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let idx = self.selected_index();
                self.select(idx.saturating_sub(10));
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
            format!(" Champions ({shown}/{total}) ")
        } else {
            format!(" Champions ({shown}/{total}) [\"{query}\"] ")
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

        let (table_area, detail_area) = if self.detail_open {
            let chunks = Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(inner);
            (chunks[0], Some(chunks[1]))
        } else {
            (inner, None)
        };

        let layout = Layout::vertical([
            Constraint::Length(1), // facet tabs
            Constraint::Min(1),    // table
        ])
        .split(table_area);

        let labels = Self::facet_labels();
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let tabs = sub_tabs::render_sub_tabs(&label_refs, self.facet_index);
        frame.render_widget(Paragraph::new(tabs), layout[0]);

        let header = Row::new(["", "Name", "Title", "Role", "Difficulty"])
            .style(theme::table_header());

        let rows: Vec<Row> = results
            .iter()
            .map(|champion| {
                Row::new(vec![
                    Span::styled(
                        theme::role_glyph(champion.role),
                        Style::default().fg(theme::role_color(champion.role)),
                    ),
                    Span::styled(champion.name.clone(), theme::table_row()),
                    Span::styled(champion.title.clone(), theme::key_hint()),
                    Span::styled(
                        champion.role.to_string(),
                        Style::default().fg(theme::role_color(champion.role)),
                    ),
                    Span::styled(
                        "●".repeat(usize::from(champion.difficulty)),
                        theme::table_row(),
                    ),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(12),
                Constraint::Min(20),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .row_highlight_style(theme::table_selected());

        let mut table_state = self.table_state.clone();
        frame.render_stateful_widget(table, layout[1], &mut table_state);

        if let (Some(detail_area), Some(champion)) =
            (detail_area, results.get(self.selected_index()))
        {
            self.render_detail(frame, detail_area, champion);
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn status_line(&self) -> Option<String> {
        Some(format!(
            "{}/{} champions",
            self.controller.match_count(),
            self.controller.store().len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_cycle_walks_all_roles_then_wraps() {
        let mut screen = ChampionsScreen::new();
        assert_eq!(screen.controller.match_count(), 6);

        screen.cycle_facet().unwrap(); // Mage
        assert_eq!(screen.controller.match_count(), 2);

        for _ in 0..5 {
            screen.cycle_facet().unwrap();
        }
        // Back to All
        assert_eq!(screen.facet_index, 0);
        assert_eq!(screen.controller.match_count(), 6);
    }

    #[test]
    fn search_input_action_refilters() {
        let mut screen = ChampionsScreen::new();
        screen
            .update(&Action::SearchInput("loose".into()))
            .unwrap();
        let names: Vec<&str> = screen
            .controller
            .results()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Jinx"]);

        screen.update(&Action::CloseSearch).unwrap();
        assert_eq!(screen.controller.match_count(), 6);
    }
}
