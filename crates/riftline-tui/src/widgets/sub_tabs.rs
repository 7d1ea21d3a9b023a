//! Horizontal sub-tab bar for use within screens (facet filters,
//! players/teams toggles).

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme;

/// Renders a horizontal tab bar line with the active tab highlighted.
///
/// The active label is underlined gold inside arcane brackets; inactive
/// labels are dim white, separated by middle dots.
pub fn render_sub_tabs<'a>(labels: &[&'a str], active_index: usize) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];

    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", theme::key_hint()));
        }

        if i == active_index {
            spans.push(Span::styled("[", theme::key_hint_key()));
            spans.push(Span::styled(
                *label,
                theme::tab_active().add_modifier(Modifier::UNDERLINED),
            ));
            spans.push(Span::styled("]", theme::key_hint_key()));
        } else {
            spans.push(Span::styled(*label, theme::tab_inactive()));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_label_is_bracketed_and_underlined() {
        let line = render_sub_tabs(&["All", "Mage", "Tank"], 1);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " All · [Mage] · Tank");

        let active = line
            .spans
            .iter()
            .find(|s| s.content == "Mage")
            .expect("active label rendered");
        assert!(active.style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
