// ── Game mode content ──

use crate::catalog::RecordStore;
use crate::model::{Difficulty, GameMode, ItemId};

fn mode(
    id: u64,
    name: &str,
    description: &str,
    players: &str,
    duration: &str,
    difficulty: Difficulty,
    features: [&str; 4],
) -> GameMode {
    GameMode {
        id: ItemId::Num(id),
        name: name.into(),
        description: description.into(),
        players: players.into(),
        duration: duration.into(),
        difficulty,
        features: features.iter().map(|&f| f.to_owned()).collect(),
    }
}

/// Every queue currently open, competitive modes first.
pub fn game_modes() -> RecordStore<GameMode> {
    RecordStore::load(vec![
        mode(
            1,
            "Ranked Solo/Duo",
            "Climb the competitive ladder in intense 5v5 matches. Test your \
             skills against players of similar rank.",
            "5v5",
            "30-45 min",
            Difficulty::High,
            ["Ranked progression", "Draft pick", "Competitive matchmaking", "Season rewards"],
        ),
        mode(
            2,
            "Normal Draft",
            "Practice your skills in a structured environment with champion \
             bans and strategic picks.",
            "5v5",
            "30-45 min",
            Difficulty::Medium,
            ["Champion bans", "Role selection", "Practice environment", "No rank pressure"],
        ),
        mode(
            3,
            "ARAM",
            "All Random All Mid - Fast-paced action on the Howling Abyss with \
             random champions.",
            "5v5",
            "15-25 min",
            Difficulty::Low,
            ["Random champions", "Single lane", "Constant action", "Quick matches"],
        ),
        mode(
            4,
            "Teamfight Tactics",
            "Auto-battler strategy game where you build and position your team \
             to fight automatically.",
            "8 players",
            "25-35 min",
            Difficulty::Medium,
            ["Auto-battler", "Strategy focused", "Item combinations", "Ranked system"],
        ),
        mode(
            5,
            "Arena",
            "Fast-paced 2v2v2v2 combat in a compact arena. Quick rounds, \
             intense fights.",
            "2v2v2v2",
            "10-15 min",
            Difficulty::Medium,
            ["Multiple teams", "Quick rounds", "Augment system", "Compact battles"],
        ),
        mode(
            6,
            "Co-op vs AI",
            "Team up with other players to battle against AI opponents. \
             Perfect for learning.",
            "5v5",
            "20-30 min",
            Difficulty::Low,
            ["AI opponents", "Learning friendly", "Cooperative play", "Beginner safe"],
        ),
    ])
    .expect("built-in mode ids are unique")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{query, FilterState};

    #[test]
    fn difficulty_facet_narrows_the_list() {
        let store = game_modes();
        let mut state = FilterState::default();
        state.set_facet("difficulty", Some("Low"));

        let casual = query::evaluate(&store, &state);
        let names: Vec<&str> = casual.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["ARAM", "Co-op vs AI"]);
    }
}
