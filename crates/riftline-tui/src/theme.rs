//! Hextech palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

use riftline_core::{Difficulty, EventStatus, NewsCategory, RankChange, Role};

// ── Core Palette ──────────────────────────────────────────────────────

pub const HEXTECH_GOLD: Color = Color::Rgb(200, 170, 110); // #c8aa6e
pub const ARCANE_BLUE: Color = Color::Rgb(10, 200, 185); // #0ac8b9
pub const SPELL_VIOLET: Color = Color::Rgb(180, 120, 255); // #b478ff
pub const RUNE_ROSE: Color = Color::Rgb(255, 106, 160); // #ff6aa0
pub const VICTORY_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const DEFEAT_RED: Color = Color::Rgb(255, 99, 99); // #ff6363
pub const WARNING_AMBER: Color = Color::Rgb(241, 196, 83); // #f1c453

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(90, 104, 150); // #5a6896
pub const BG_HIGHLIGHT: Color = Color::Rgb(38, 42, 58); // #262a3a
pub const BG_DARK: Color = Color::Rgb(25, 28, 40); // #191c28

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default()
        .fg(HEXTECH_GOLD)
        .add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(ARCANE_BLUE)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(ARCANE_BLUE)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(HEXTECH_GOLD)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(HEXTECH_GOLD)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default()
        .fg(ARCANE_BLUE)
        .add_modifier(Modifier::BOLD)
}

// ── Domain Lookups ────────────────────────────────────────────────────
//
// Presentation mappings for domain enums. Pure display concern: each
// lookup carries a neutral fallback so a new enum variant degrades to
// plain text rather than breaking rendering.

/// Role glyph for champion tables.
pub fn role_glyph(role: Role) -> &'static str {
    match role {
        Role::Mage => "✦",
        Role::Fighter => "⚔",
        Role::Marksman => "➶",
        Role::Support => "♥",
        Role::Tank => "⛨",
    }
}

/// Role accent color.
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Mage => SPELL_VIOLET,
        Role::Fighter => DEFEAT_RED,
        Role::Marksman => WARNING_AMBER,
        Role::Support => VICTORY_GREEN,
        Role::Tank => ARCANE_BLUE,
    }
}

/// News category accent color.
pub fn category_color(category: NewsCategory) -> Color {
    match category {
        NewsCategory::PatchNotes => ARCANE_BLUE,
        NewsCategory::Esports => RUNE_ROSE,
        NewsCategory::Champions => SPELL_VIOLET,
        NewsCategory::GameModes => VICTORY_GREEN,
        NewsCategory::Guides => WARNING_AMBER,
        NewsCategory::Skins => HEXTECH_GOLD,
    }
}

/// Match / tournament status style.
pub fn status_style(status: EventStatus) -> Style {
    match status {
        EventStatus::Live => Style::default()
            .fg(DEFEAT_RED)
            .add_modifier(Modifier::BOLD),
        EventStatus::Upcoming => Style::default().fg(WARNING_AMBER),
        EventStatus::Completed => Style::default().fg(BORDER_GRAY),
    }
}

/// Game mode difficulty color.
pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Low => VICTORY_GREEN,
        Difficulty::Medium => WARNING_AMBER,
        Difficulty::High => DEFEAT_RED,
    }
}

/// Rank movement glyph and color for leaderboards.
pub fn change_indicator(change: RankChange) -> (&'static str, Color) {
    match change {
        RankChange::Up => ("▲", VICTORY_GREEN),
        RankChange::Down => ("▼", DEFEAT_RED),
        RankChange::Same => ("—", BORDER_GRAY),
    }
}
