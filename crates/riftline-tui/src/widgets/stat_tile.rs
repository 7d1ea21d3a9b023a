//! Boxed stat tile for the home screen's community figures.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::theme;

/// Render one headline figure: big value, label, muted description.
pub fn render_stat_tile(frame: &mut Frame, area: Rect, value: &str, label: &str, description: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(
            value.to_owned(),
            Style::default()
                .fg(theme::HEXTECH_GOLD)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(label.to_owned(), Style::default().fg(theme::ARCANE_BLUE)),
        Line::styled(description.to_owned(), theme::key_hint()),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
