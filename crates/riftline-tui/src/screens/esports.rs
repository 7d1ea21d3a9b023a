//! Esports screen — match schedule and tournament list, filtered together
//! by one status facet.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState};
use strum::IntoEnumIterator;

use riftline_core::{EventStatus, MatchUp, SelectionController, Tournament, content};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::sub_tabs;

pub struct EsportsScreen {
    focused: bool,
    matches: SelectionController<MatchUp>,
    tournaments: SelectionController<Tournament>,
    table_state: TableState,
    /// 0 = All, 1.. = EventStatus::iter() offset by one.
    facet_index: usize,
}

impl EsportsScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            matches: SelectionController::new(content::matches()),
            tournaments: SelectionController::new(content::tournaments()),
            table_state: TableState::default().with_selected(0),
            facet_index: 0,
        }
    }

    fn select(&mut self, idx: usize) {
        let len = self.matches.match_count();
        let clamped = if len == 0 { 0 } else { idx.min(len - 1) };
        self.table_state.select(Some(clamped));
    }

    /// One status tab drives both catalogs.
    fn cycle_facet(&mut self) -> Result<()> {
        let statuses: Vec<EventStatus> = EventStatus::iter().collect();
        self.facet_index = (self.facet_index + 1) % (statuses.len() + 1);
        let value = if self.facet_index == 0 {
            None
        } else {
            Some(statuses[self.facet_index - 1].to_string())
        };
        self.matches.set_facet("status", value.as_deref())?;
        self.tournaments.set_facet("status", value.as_deref())?;
        self.select(0);
        Ok(())
    }

    fn render_matches(&self, frame: &mut Frame, area: Rect) {
        let results = self.matches.results();
        let block = Block::default()
            .title(format!(" Matches ({}) ", results.len()))
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

        let header =
            Row::new(["Match", "Score", "Status", "Time", "Tournament"]).style(theme::table_header());
        let rows: Vec<Row> = results
            .iter()
            .map(|m| {
                Row::new(vec![
                    Span::styled(
                        format!("{} vs {}", m.team_one, m.team_two),
                        theme::table_row(),
                    ),
                    Span::styled(m.score.clone(), theme::table_row()),
                    Span::styled(m.status.to_string(), theme::status_style(m.status)),
                    Span::styled(m.time.clone(), theme::key_hint()),
                    Span::styled(m.tournament.clone(), theme::key_hint()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(24),
                Constraint::Length(6),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Min(18),
            ],
        )
        .header(header)
        .row_highlight_style(theme::table_selected());

        let mut table_state = self.table_state.clone();
        frame.render_stateful_widget(table, inner, &mut table_state);
    }

    fn render_tournaments(&self, frame: &mut Frame, area: Rect) {
        let results = self.tournaments.results();
        let block = Block::default()
            .title(format!(" Tournaments ({}) ", results.len()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header = Row::new(["Tournament", "Status", "Dates", "Prize Pool", "Location"])
            .style(theme::table_header());
        let rows: Vec<Row> = results
            .iter()
            .map(|t| {
                Row::new(vec![
                    Span::styled(t.name.clone(), theme::table_row()),
                    Span::styled(t.status.to_string(), theme::status_style(t.status)),
                    Span::styled(t.dates.clone(), theme::key_hint()),
                    Span::styled(t.prize_pool.clone(), theme::table_row()),
                    Span::styled(t.location.clone(), theme::key_hint()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(22),
                Constraint::Length(10),
                Constraint::Length(22),
                Constraint::Length(12),
                Constraint::Min(14),
            ],
        )
        .header(header);

        frame.render_widget(table, inner);
    }
}

impl Component for EsportsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let idx = self.table_state.selected().unwrap_or(0);
                self.select(idx + 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let idx = self.table_state.selected().unwrap_or(0);
                self.select(idx.saturating_sub(1));
            }
            KeyCode::Char('f') => self.cycle_facet()?,
            _ => return Ok(None),
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::SearchInput(query) => {
                self.matches.set_search_text(query.as_str());
                self.tournaments.set_search_text(query.as_str());
                self.select(0);
            }
            Action::CloseSearch => {
                self.matches.set_search_text("");
                self.tournaments.set_search_text("");
                self.select(0);
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(1),      // facet tabs
            Constraint::Percentage(55), // matches
            Constraint::Min(5),         // tournaments
        ])
        .split(area);

        let mut labels = vec!["All".to_owned()];
        labels.extend(EventStatus::iter().map(|s| s.to_string()));
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        frame.render_widget(
            Paragraph::new(sub_tabs::render_sub_tabs(&label_refs, self.facet_index)),
            layout[0],
        );

        self.render_matches(frame, layout[1]);
        self.render_tournaments(frame, layout[2]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn status_line(&self) -> Option<String> {
        Some(format!(
            "{} matches, {} tournaments",
            self.matches.match_count(),
            self.tournaments.match_count()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tab_filters_both_catalogs() {
        let mut screen = EsportsScreen::new();
        screen.cycle_facet().unwrap(); // Live
        assert_eq!(screen.matches.match_count(), 1);
        assert_eq!(screen.tournaments.match_count(), 1);

        screen.cycle_facet().unwrap(); // Upcoming
        assert_eq!(screen.matches.match_count(), 2);
        assert_eq!(screen.tournaments.match_count(), 1);
    }

    #[test]
    fn search_applies_to_both_catalogs() {
        let mut screen = EsportsScreen::new();
        screen
            .update(&Action::SearchInput("championship".into()))
            .unwrap();
        assert_eq!(screen.matches.match_count(), 3);
        assert_eq!(screen.tournaments.match_count(), 2);
    }
}
