// ── Leaderboard content ──

use crate::catalog::RecordStore;
use crate::model::{ItemId, ProTeam, RankChange, RankedPlayer, Tier};

#[allow(clippy::too_many_arguments)]
fn player(
    id: u64,
    rank: u32,
    name: &str,
    lp: u32,
    win_rate_pct: u8,
    games: u32,
    main_champion: &str,
    region: &str,
    change: RankChange,
) -> RankedPlayer {
    RankedPlayer {
        id: ItemId::Num(id),
        rank,
        name: name.into(),
        tier: Tier::Challenger,
        league_points: lp,
        win_rate_pct,
        games,
        main_champion: main_champion.into(),
        region: region.into(),
        change,
    }
}

fn team(
    id: u64,
    rank: u32,
    name: &str,
    league: &str,
    points: u32,
    win_rate_pct: u8,
    matches: u32,
    change: RankChange,
) -> ProTeam {
    ProTeam {
        id: ItemId::Num(id),
        rank,
        name: name.into(),
        league: league.into(),
        points,
        win_rate_pct,
        matches,
        change,
    }
}

/// Solo queue leaderboard, best first.
pub fn ranked_players() -> RecordStore<RankedPlayer> {
    RecordStore::load(vec![
        player(1, 1, "Faker", 1247, 73, 156, "Azir", "KR", RankChange::Same),
        player(2, 2, "Canyon", 1198, 71, 142, "Graves", "KR", RankChange::Up),
        player(3, 3, "Caps", 1156, 69, 178, "LeBlanc", "EUW", RankChange::Down),
        player(4, 4, "Showmaker", 1134, 68, 163, "Syndra", "KR", RankChange::Up),
        player(5, 5, "Jankos", 1089, 66, 201, "Sejuani", "EUW", RankChange::Same),
    ])
    .expect("built-in player ids are unique")
}

/// Professional team leaderboard, best first.
pub fn pro_teams() -> RecordStore<ProTeam> {
    RecordStore::load(vec![
        team(1, 1, "T1", "LCK", 2847, 78, 32, RankChange::Same),
        team(2, 2, "G2 Esports", "LEC", 2756, 74, 28, RankChange::Up),
        team(3, 3, "JD Gaming", "LPL", 2698, 72, 35, RankChange::Down),
        team(4, 4, "Cloud9", "LCS", 2634, 69, 26, RankChange::Up),
        team(5, 5, "BiliBili Gaming", "LPL", 2587, 67, 31, RankChange::Same),
    ])
    .expect("built-in team ids are unique")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboards_stay_in_rank_order() {
        let players = ranked_players();
        let ranks: Vec<u32> = players.all().iter().map(|p| p.rank).collect();
        assert_eq!(ranks, [1, 2, 3, 4, 5]);

        let teams = pro_teams();
        assert!(teams.all().windows(2).all(|w| w[0].rank < w[1].rank));
    }
}
