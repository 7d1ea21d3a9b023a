// ── Esports content ──

use crate::catalog::RecordStore;
use crate::model::{EventStatus, ItemId, MatchUp, Tournament};

/// Major tournaments, most recent first.
pub fn tournaments() -> RecordStore<Tournament> {
    let tournament = |id: u64, name: &str, status, dates: &str, teams: &[&str], prize: &str, location: &str| {
        Tournament {
            id: ItemId::Num(id),
            name: name.into(),
            status,
            dates: dates.into(),
            teams: teams.iter().map(|&t| t.to_owned()).collect(),
            prize_pool: prize.into(),
            location: location.into(),
        }
    };

    RecordStore::load(vec![
        tournament(
            1,
            "World Championship 2024",
            EventStatus::Live,
            "Oct 15 - Nov 2, 2024",
            &["T1", "G2 Esports", "JDG", "BLG"],
            "$2,225,000",
            "London, UK",
        ),
        tournament(
            2,
            "LCS Championship",
            EventStatus::Upcoming,
            "Dec 1 - Dec 15, 2024",
            &["Cloud9", "Team Liquid", "100 Thieves", "FlyQuest"],
            "$500,000",
            "Los Angeles, USA",
        ),
        tournament(
            3,
            "LEC Spring Split",
            EventStatus::Completed,
            "Jan 20 - Apr 14, 2024",
            &["G2 Esports", "Fnatic", "MAD Lions", "Team Heretics"],
            "$300,000",
            "Berlin, Germany",
        ),
    ])
    .expect("built-in tournament ids are unique")
}

/// Match schedule: live first, then upcoming, then finished.
pub fn matches() -> RecordStore<MatchUp> {
    let matchup = |id: u64, team_one: &str, team_two: &str, score: &str, status, time: &str, tournament: &str| {
        MatchUp {
            id: ItemId::Num(id),
            team_one: team_one.into(),
            team_two: team_two.into(),
            score: score.into(),
            status,
            time: time.into(),
            tournament: tournament.into(),
        }
    };

    RecordStore::load(vec![
        matchup(1, "T1", "G2 Esports", "2-1", EventStatus::Live, "Live Now", "World Championship"),
        matchup(2, "JDG", "BLG", "vs", EventStatus::Upcoming, "3:00 PM EST", "World Championship"),
        matchup(3, "Cloud9", "Team Liquid", "vs", EventStatus::Upcoming, "6:00 PM EST", "LCS Championship"),
        matchup(4, "Fnatic", "MAD Lions", "3-0", EventStatus::Completed, "Completed", "LEC Spring Split"),
    ])
    .expect("built-in match ids are unique")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{query, FilterState};

    #[test]
    fn status_facet_splits_the_schedule() {
        let store = matches();
        let mut state = FilterState::default();
        state.set_facet("status", Some("Upcoming"));

        let upcoming = query::evaluate(&store, &state);
        assert_eq!(upcoming.len(), 2);
        assert!(upcoming.iter().all(|m| m.status == EventStatus::Upcoming));
    }

    #[test]
    fn exactly_one_tournament_is_live() {
        let live = tournaments()
            .all()
            .iter()
            .filter(|t| t.status == EventStatus::Live)
            .count();
        assert_eq!(live, 1);
    }
}
