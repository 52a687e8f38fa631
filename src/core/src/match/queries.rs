use crate::error::LeagueError;
use crate::r#match::{Match, MatchStatus, MatchType};
use crate::store::LeagueStore;

pub struct MatchQueries;

impl MatchQueries {
    /// Matches of a league, optionally narrowed by type and/or status,
    /// in pairing order.
    pub fn for_league(
        store: &LeagueStore,
        league_id: u32,
        match_type: Option<MatchType>,
        status: Option<MatchStatus>,
    ) -> Result<Vec<Match>, LeagueError> {
        if store.league(league_id).is_none() {
            return Err(LeagueError::NotFound(format!(
                "league with id {} not found",
                league_id
            )));
        }

        let matches = match (match_type, status) {
            (Some(match_type), Some(status)) => {
                store.matches_by_league_and_type_and_status(league_id, match_type, status)
            }
            (Some(match_type), None) => store.matches_by_league_and_type(league_id, match_type),
            (None, Some(status)) => store.matches_by_league_and_status(league_id, status),
            (None, None) => store.matches_by_league(league_id),
        };

        Ok(matches.into_iter().cloned().collect())
    }
}
