// ── Community stats content ──

use serde::Serialize;

/// One headline figure from the community banner.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityStat {
    pub value: String,
    pub label: String,
    pub description: String,
}

fn stat(value: &str, label: &str, description: &str) -> CommunityStat {
    CommunityStat {
        value: value.into(),
        label: label.into(),
        description: description.into(),
    }
}

/// The four headline figures shown on the home page.
pub fn community_stats() -> Vec<CommunityStat> {
    vec![
        stat("180M+", "Monthly Players", "Active summoners worldwide"),
        stat("50M+", "Games Played Daily", "Matches across all modes"),
        stat("100+", "Professional Teams", "Competing globally"),
        stat("4.8/5", "Community Rating", "Player satisfaction score"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_has_four_figures() {
        assert_eq!(community_stats().len(), 4);
    }
}
