//! Screen identifier enum for the tab bar and number-key navigation.

use std::fmt;

/// Identifies each primary TUI screen, navigable by number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Home, // 1
    Champions, // 2
    Modes,     // 3
    Esports,   // 4
    News,      // 5
    Rankings,  // 6
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 6] = [
        Self::Home,
        Self::Champions,
        Self::Modes,
        Self::Esports,
        Self::News,
        Self::Rankings,
    ];

    /// Numeric key (1-6) for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Home => 1,
            Self::Champions => 2,
            Self::Modes => 3,
            Self::Esports => 4,
            Self::News => 5,
            Self::Rankings => 6,
        }
    }

    /// Screen from a numeric key (1-6). Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Home),
            2 => Some(Self::Champions),
            3 => Some(Self::Modes),
            4 => Some(Self::Esports),
            5 => Some(Self::News),
            6 => Some(Self::Rankings),
            _ => None,
        }
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Champions => "Champions",
            Self::Modes => "Modes",
            Self::Esports => "Esports",
            Self::News => "News",
            Self::Rankings => "Rankings",
        }
    }

    /// Compact label for narrow terminals (< 80 cols).
    pub fn label_short(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Champions => "Champ",
            Self::Modes => "Mode",
            Self::Esports => "Esp",
            Self::News => "News",
            Self::Rankings => "Rank",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_round_trip() {
        for screen in ScreenId::ALL {
            assert_eq!(ScreenId::from_number(screen.number()), Some(screen));
        }
        assert_eq!(ScreenId::from_number(0), None);
        assert_eq!(ScreenId::from_number(7), None);
    }

    #[test]
    fn tab_cycle_wraps_both_ways() {
        assert_eq!(ScreenId::Rankings.next(), ScreenId::Home);
        assert_eq!(ScreenId::Home.prev(), ScreenId::Rankings);
        assert_eq!(ScreenId::Champions.next(), ScreenId::Modes);
    }
}
