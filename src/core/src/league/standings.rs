use crate::error::LeagueError;
use crate::store::LeagueStore;
use serde::{Deserialize, Serialize};

/// A per-trainer, per-league running win/loss tally.
///
/// At most one row exists per (league, trainer). Both counters default to 0
/// and only ever grow: the result recorder is the sole writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standing {
    pub id: u32,
    pub league_id: u32,
    pub trainer_id: u32,
    pub wins: u32,
    pub losses: u32,
}

impl Standing {
    pub fn zeroed(id: u32, league_id: u32, trainer_id: u32) -> Self {
        Standing {
            id,
            league_id,
            trainer_id,
            wins: 0,
            losses: 0,
        }
    }
}

pub struct StandingsAggregator;

impl StandingsAggregator {
    /// All standing rows of a league, sorted by wins descending.
    ///
    /// A pure read over state mutated only by the result recorder. Tie order
    /// beyond wins is undefined.
    pub fn standings(store: &LeagueStore, league_id: u32) -> Result<Vec<Standing>, LeagueError> {
        if store.league(league_id).is_none() {
            return Err(LeagueError::NotFound(format!(
                "league with id {} not found",
                league_id
            )));
        }

        Ok(store.standings_by_league_by_wins_desc(league_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::LeagueStatus;

    #[test]
    fn test_standings_for_unknown_league_is_not_found() {
        let store = LeagueStore::new();

        assert!(matches!(
            StandingsAggregator::standings(&store, 99),
            Err(LeagueError::NotFound(_))
        ));
    }

    #[test]
    fn test_standings_sorted_by_wins_descending() {
        let mut store = LeagueStore::new();
        let league_id = store.add_league("Kanto Draft League", LeagueStatus::Active, 10);

        let ash = store.add_trainer("Ash", league_id, None);
        let misty = store.add_trainer("Misty", league_id, None);
        let brock = store.add_trainer("Brock", league_id, None);

        for trainer_id in [ash, misty, brock] {
            store.add_standing(league_id, trainer_id);
        }

        store.standing_mut(league_id, misty).unwrap().wins = 3;
        store.standing_mut(league_id, brock).unwrap().wins = 1;

        let rows = StandingsAggregator::standings(&store, league_id).unwrap();
        let wins: Vec<u32> = rows.iter().map(|s| s.wins).collect();

        assert_eq!(wins, vec![3, 1, 0]);
        assert!(rows.windows(2).all(|w| w[0].wins >= w[1].wins));
    }
}
