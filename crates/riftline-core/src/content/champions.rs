// ── Champion roster content ──

use crate::catalog::RecordStore;
use crate::model::{Champion, ItemId, Role};

fn champion(id: u64, name: &str, title: &str, role: Role, difficulty: u8, abilities: [&str; 4]) -> Champion {
    Champion {
        id: ItemId::Num(id),
        name: name.into(),
        title: title.into(),
        role,
        difficulty,
        abilities: abilities.iter().map(|&a| a.to_owned()).collect(),
    }
}

/// The playable roster, in release order.
pub fn champions() -> RecordStore<Champion> {
    RecordStore::load(vec![
        champion(
            1,
            "Ahri",
            "The Nine-Tailed Fox",
            Role::Mage,
            2,
            ["Orb of Deception", "Fox-Fire", "Charm", "Spirit Rush"],
        ),
        champion(
            2,
            "Garen",
            "The Might of Demacia",
            Role::Fighter,
            1,
            ["Decisive Strike", "Courage", "Judgment", "Demacian Justice"],
        ),
        champion(
            3,
            "Jinx",
            "The Loose Cannon",
            Role::Marksman,
            2,
            ["Switcheroo!", "Zap!", "Flame Chompers!", "Super Mega Death Rocket!"],
        ),
        champion(
            4,
            "Thresh",
            "The Chain Warden",
            Role::Support,
            3,
            ["Death Sentence", "Dark Passage", "Flay", "The Box"],
        ),
        champion(
            5,
            "Lee Sin",
            "The Blind Monk",
            Role::Fighter,
            3,
            ["Sonic Wave", "Safeguard", "Tempest", "Dragon's Rage"],
        ),
        champion(
            6,
            "Lux",
            "The Lady of Luminosity",
            Role::Mage,
            2,
            ["Light Binding", "Prismatic Barrier", "Lucent Singularity", "Final Spark"],
        ),
    ])
    .expect("built-in roster ids are unique")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_loads_with_six_champions() {
        let store = champions();
        assert_eq!(store.len(), 6);
        assert_eq!(store.all()[0].name, "Ahri");
    }

    #[test]
    fn difficulty_stays_on_the_three_dot_scale() {
        assert!(champions().all().iter().all(|c| (1..=3).contains(&c.difficulty)));
    }
}
