//! Rankings screen — solo queue and pro team leaderboards behind
//! Players/Teams sub-tabs.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState};
use strum::IntoEnumIterator;

use riftline_core::{ProTeam, RankedPlayer, SelectionController, Tier, content};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::sub_tabs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Board {
    #[default]
    Players,
    Teams,
}

pub struct RankingsScreen {
    focused: bool,
    board: Board,
    players: SelectionController<RankedPlayer>,
    teams: SelectionController<ProTeam>,
    /// Distinct leagues in leaderboard order, for the teams facet cycle.
    leagues: Vec<String>,
    player_state: TableState,
    team_state: TableState,
    /// Cycle position on the Players board; 0 = All, 1.. = Tier::iter().
    player_facet: usize,
    /// Cycle position on the Teams board; 0 = All, 1.. = leagues.
    team_facet: usize,
}

impl RankingsScreen {
    pub fn new() -> Self {
        let teams = SelectionController::new(content::pro_teams());
        let mut leagues: Vec<String> = Vec::new();
        for team in teams.store().all() {
            if !leagues.contains(&team.league) {
                leagues.push(team.league.clone());
            }
        }

        Self {
            focused: false,
            board: Board::default(),
            players: SelectionController::new(content::ranked_players()),
            teams,
            leagues,
            player_state: TableState::default().with_selected(0),
            team_state: TableState::default().with_selected(0),
            player_facet: 0,
            team_facet: 0,
        }
    }

    fn active_len(&self) -> usize {
        match self.board {
            Board::Players => self.players.match_count(),
            Board::Teams => self.teams.match_count(),
        }
    }

    fn select(&mut self, idx: usize) {
        let len = self.active_len();
        let clamped = if len == 0 { 0 } else { idx.min(len - 1) };
        match self.board {
            Board::Players => self.player_state.select(Some(clamped)),
            Board::Teams => self.team_state.select(Some(clamped)),
        }
    }

    fn selected_index(&self) -> usize {
        match self.board {
            Board::Players => self.player_state.selected().unwrap_or(0),
            Board::Teams => self.team_state.selected().unwrap_or(0),
        }
    }

    /// Swap boards. Each board keeps its own facet and cycle position, so
    /// the sub-tab highlight always matches the filter actually applied.
    fn toggle_board(&mut self) {
        self.board = match self.board {
            Board::Players => Board::Teams,
            Board::Teams => Board::Players,
        };
    }

    /// Cycle position of the active board's facet.
    fn facet_index(&self) -> usize {
        match self.board {
            Board::Players => self.player_facet,
            Board::Teams => self.team_facet,
        }
    }

    fn cycle_facet(&mut self) -> Result<()> {
        match self.board {
            Board::Players => {
                let tiers: Vec<Tier> = Tier::iter().collect();
                self.player_facet = (self.player_facet + 1) % (tiers.len() + 1);
                let value = if self.player_facet == 0 {
                    None
                } else {
                    Some(tiers[self.player_facet - 1].to_string())
                };
                self.players.set_facet("tier", value.as_deref())?;
            }
            Board::Teams => {
                self.team_facet = (self.team_facet + 1) % (self.leagues.len() + 1);
                let value = if self.team_facet == 0 {
                    None
                } else {
                    Some(self.leagues[self.team_facet - 1].clone())
                };
                self.teams.set_facet("league", value.as_deref())?;
            }
        }
        self.select(0);
        Ok(())
    }

    fn facet_labels(&self) -> Vec<String> {
        let mut labels = vec!["All".to_owned()];
        match self.board {
            Board::Players => labels.extend(Tier::iter().map(|t| t.to_string())),
            Board::Teams => labels.extend(self.leagues.iter().cloned()),
        }
        labels
    }

    fn render_players(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(["#", "Player", "Tier", "LP", "Win %", "Games", "Main", "Region", "Δ"])
            .style(theme::table_header());

        let rows: Vec<Row> = self
            .players
            .results()
            .iter()
            .map(|p| {
                let (glyph, color) = theme::change_indicator(p.change);
                Row::new(vec![
                    Span::styled(p.rank.to_string(), theme::key_hint()),
                    Span::styled(p.name.clone(), theme::table_row()),
                    Span::styled(p.tier.to_string(), Style::default().fg(theme::HEXTECH_GOLD)),
                    Span::styled(p.league_points.to_string(), theme::table_row()),
                    Span::styled(format!("{}%", p.win_rate_pct), theme::table_row()),
                    Span::styled(p.games.to_string(), theme::key_hint()),
                    Span::styled(p.main_champion.clone(), theme::table_row()),
                    Span::styled(p.region.clone(), theme::key_hint()),
                    Span::styled(glyph, Style::default().fg(color)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(11),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(10),
                Constraint::Length(7),
                Constraint::Length(2),
            ],
        )
        .header(header)
        .row_highlight_style(theme::table_selected());

        let mut state = self.player_state.clone();
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_teams(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(["#", "Team", "League", "Points", "Win %", "Matches", "Δ"])
            .style(theme::table_header());

        let rows: Vec<Row> = self
            .teams
            .results()
            .iter()
            .map(|t| {
                let (glyph, color) = theme::change_indicator(t.change);
                Row::new(vec![
                    Span::styled(t.rank.to_string(), theme::key_hint()),
                    Span::styled(t.name.clone(), theme::table_row()),
                    Span::styled(t.league.clone(), Style::default().fg(theme::ARCANE_BLUE)),
                    Span::styled(t.points.to_string(), theme::table_row()),
                    Span::styled(format!("{}%", t.win_rate_pct), theme::table_row()),
                    Span::styled(t.matches.to_string(), theme::key_hint()),
                    Span::styled(glyph, Style::default().fg(color)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(16),
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Length(6),
                Constraint::Length(8),
                Constraint::Length(2),
            ],
        )
        .header(header)
        .row_highlight_style(theme::table_selected());

        let mut state = self.team_state.clone();
        frame.render_stateful_widget(table, area, &mut state);
    }
}

impl Component for RankingsScreen {
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
                let len = self.active_len();
                if len > 0 {
                    self.select(len - 1);
                }
            }
            KeyCode::Char('p') | KeyCode::Char('t') | KeyCode::Left | KeyCode::Right => {
                self.toggle_board();
            }
            KeyCode::Char('f') => self.cycle_facet()?,
            _ => return Ok(None),
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::SearchInput(query) => {
                self.players.set_search_text(query.as_str());
                self.teams.set_search_text(query.as_str());
                self.select(0);
            }
            Action::CloseSearch => {
                self.players.set_search_text("");
                self.teams.set_search_text("");
                self.select(0);
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let (shown, total, board_label) = match self.board {
            Board::Players => (
                self.players.match_count(),
                self.players.store().len(),
                "Players",
            ),
            Board::Teams => (self.teams.match_count(), self.teams.store().len(), "Teams"),
        };

        let query = match self.board {
            Board::Players => self.players.state().search_text(),
            Board::Teams => self.teams.state().search_text(),
        };
        let title = if query.is_empty() {
            format!(" Rankings · {board_label} ({shown}/{total}) ")
        } else {
            format!(" Rankings · {board_label} ({shown}/{total}) [\"{query}\"] ")
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

        let layout = Layout::vertical([
            Constraint::Length(1), // board tabs
            Constraint::Length(1), // facet tabs
            Constraint::Min(1),    // table
        ])
        .split(inner);

        let board_index = match self.board {
            Board::Players => 0,
            Board::Teams => 1,
        };
        frame.render_widget(
            Paragraph::new(sub_tabs::render_sub_tabs(&["Players", "Teams"], board_index)),
            layout[0],
        );

        let labels = self.facet_labels();
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        frame.render_widget(
            Paragraph::new(sub_tabs::render_sub_tabs(&label_refs, self.facet_index())),
            layout[1],
        );

        match self.board {
            Board::Players => self.render_players(frame, layout[2]),
            Board::Teams => self.render_teams(frame, layout[2]),
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn status_line(&self) -> Option<String> {
        Some(match self.board {
            Board::Players => format!(
                "{}/{} players",
                self.players.match_count(),
                self.players.store().len()
            ),
            Board::Teams => format!(
                "{}/{} teams",
                self.teams.match_count(),
                self.teams.store().len()
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_cycle_uses_leaderboard_order() {
        let mut screen = RankingsScreen::new();
        assert_eq!(screen.leagues, ["LCK", "LEC", "LPL", "LCS"]);

        screen.toggle_board();
        screen.cycle_facet().unwrap(); // LCK
        assert_eq!(screen.teams.match_count(), 1);

        screen.cycle_facet().unwrap(); // LEC
        screen.cycle_facet().unwrap(); // LPL
        assert_eq!(screen.teams.match_count(), 2);
    }

    #[test]
    fn each_board_keeps_its_own_facet_cycle() {
        let mut screen = RankingsScreen::new();

        // Players: Challenger → Grandmaster. No built-in player is
        // Grandmaster, so the filter empties the board.
        screen.cycle_facet().unwrap();
        screen.cycle_facet().unwrap();
        assert_eq!(screen.facet_index(), 2);
        assert_eq!(screen.players.match_count(), 0);

        // Visiting Teams shows its own untouched cycle, not the players'.
        screen.toggle_board();
        assert_eq!(screen.facet_index(), 0);
        assert_eq!(screen.teams.match_count(), screen.teams.store().len());

        // Coming back, the highlight still points at the applied tier.
        screen.toggle_board();
        assert_eq!(screen.facet_index(), 2);
        assert_eq!(screen.players.match_count(), 0);

        // One more cycle lands on Master, not back at All.
        screen.cycle_facet().unwrap();
        assert_eq!(screen.facet_index(), 3);
    }

    #[test]
    fn search_spans_both_boards() {
        let mut screen = RankingsScreen::new();
        screen.update(&Action::SearchInput("faker".into())).unwrap();
        assert_eq!(screen.players.match_count(), 1);
        assert_eq!(screen.teams.match_count(), 0);
    }
}
