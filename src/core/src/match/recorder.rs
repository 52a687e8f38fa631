use crate::error::LeagueError;
use crate::r#match::{Match, MatchStatus};
use crate::store::LeagueStore;
use chrono::NaiveDateTime;
use log::{info, warn};

pub struct ResultRecorder;

impl ResultRecorder {
    /// Records the outcome of a scheduled match exactly once: sets the
    /// winner, status, scores and replay links, and applies one win and one
    /// loss increment to the participants' standings.
    ///
    /// Preconditions, checked in order before any mutation:
    /// 1. the match exists;
    /// 2. `winner_id` is one of its two participants;
    /// 3. the winner trainer exists in the store;
    /// 4. the match is not already completed.
    ///
    /// The caller's exclusive borrow of the store spans the status check and
    /// all increments, so two concurrent recordings of the same match cannot
    /// both pass check 4.
    pub fn record(
        store: &mut LeagueStore,
        match_id: u32,
        winner_id: u32,
        trainer1_score: Option<i32>,
        trainer2_score: Option<i32>,
        replay_links: Vec<String>,
        now: NaiveDateTime,
    ) -> Result<Match, LeagueError> {
        let match_to_record = store
            .match_by_id(match_id)
            .cloned()
            .ok_or_else(|| LeagueError::NotFound(format!("match with id {} not found", match_id)))?;

        if !match_to_record.is_participant(winner_id) {
            return Err(LeagueError::InvalidArgument(format!(
                "winner id {} does not match any participant of match {}",
                winner_id, match_id
            )));
        }

        if store.trainer(winner_id).is_none() {
            return Err(LeagueError::InvalidArgument(format!(
                "winner trainer with id {} not found",
                winner_id
            )));
        }

        if match_to_record.is_completed() {
            return Err(LeagueError::InvalidState(format!(
                "match {} has already been completed and cannot be re-recorded",
                match_id
            )));
        }

        let loser_id = match_to_record.opponent_of(winner_id);
        let league_id = match_to_record.league_id;

        Self::increment_standing(store, league_id, winner_id, StandingSide::Winner);
        Self::increment_standing(store, league_id, loser_id, StandingSide::Loser);

        let mut updated = match_to_record;
        updated.winner_id = Some(winner_id);
        updated.status = MatchStatus::Completed;
        updated.trainer1_score = trainer1_score;
        updated.trainer2_score = trainer2_score;
        updated.replay_links = replay_links;
        updated.completed_at = Some(now);

        store.update_match(updated.clone());

        info!(
            "recorded result for match {}: winner {}, loser {}",
            match_id, winner_id, loser_id
        );

        Ok(updated)
    }

    fn increment_standing(
        store: &mut LeagueStore,
        league_id: u32,
        trainer_id: u32,
        side: StandingSide,
    ) {
        if store
            .standing_by_league_and_trainer(league_id, trainer_id)
            .is_none()
        {
            // Schedule may have been generated before this trainer joined.
            warn!(
                "no standing for trainer {} in league {}, creating zeroed row",
                trainer_id, league_id
            );
            store.add_standing(league_id, trainer_id);
        }

        if let Some(standing) = store.standing_mut(league_id, trainer_id) {
            match side {
                StandingSide::Winner => standing.wins += 1,
                StandingSide::Loser => standing.losses += 1,
            }
        }
    }
}

enum StandingSide {
    Winner,
    Loser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::{LeagueStatus, ScheduleGenerator, StandingsAggregator};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    fn scheduled_league() -> (LeagueStore, u32, Vec<u32>, Vec<Match>) {
        let mut store = LeagueStore::new();
        let league_id = store.add_league("Kanto Draft League", LeagueStatus::Active, 10);

        let trainer_ids: Vec<u32> = ["Ash", "Misty", "Brock"]
            .iter()
            .map(|name| store.add_trainer(name, league_id, None))
            .collect();

        let matches = ScheduleGenerator::generate(&mut store, league_id).unwrap();
        (store, league_id, trainer_ids, matches)
    }

    fn completed_wins(store: &LeagueStore, league_id: u32) -> u32 {
        store
            .standings_by_league(league_id)
            .iter()
            .map(|s| s.wins)
            .sum()
    }

    fn completed_matches(store: &LeagueStore, league_id: u32) -> usize {
        store
            .matches_by_league_and_status(league_id, MatchStatus::Completed)
            .len()
    }

    #[test]
    fn test_record_unknown_match_is_not_found() {
        let (mut store, _, trainer_ids, _) = scheduled_league();

        assert!(matches!(
            ResultRecorder::record(&mut store, 999, trainer_ids[0], None, None, vec![], now()),
            Err(LeagueError::NotFound(_))
        ));
    }

    #[test]
    fn test_record_non_participant_winner_is_invalid_argument() {
        let (mut store, league_id, _, matches) = scheduled_league();
        let outsider = store.add_trainer("Gary", league_id, None);

        // (Ash, Misty) match; Gary is not a participant.
        assert!(matches!(
            ResultRecorder::record(&mut store, matches[0].id, outsider, None, None, vec![], now()),
            Err(LeagueError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_record_result_completes_match_and_updates_standings() {
        let (mut store, league_id, trainer_ids, matches) = scheduled_league();
        let (ash, misty) = (trainer_ids[0], trainer_ids[1]);

        let recorded = ResultRecorder::record(
            &mut store,
            matches[0].id,
            ash,
            Some(2),
            Some(1),
            vec![String::from("https://replay.pokemonshowdown.com/gen9-1")],
            now(),
        )
        .unwrap();

        assert_eq!(recorded.status, MatchStatus::Completed);
        assert_eq!(recorded.winner_id, Some(ash));
        assert_eq!(recorded.trainer1_score, Some(2));
        assert_eq!(recorded.trainer2_score, Some(1));
        assert_eq!(recorded.replay_links.len(), 1);
        assert_eq!(recorded.completed_at, Some(now()));

        let ash_standing = store.standing_by_league_and_trainer(league_id, ash).unwrap();
        let misty_standing = store
            .standing_by_league_and_trainer(league_id, misty)
            .unwrap();
        assert_eq!((ash_standing.wins, ash_standing.losses), (1, 0));
        assert_eq!((misty_standing.wins, misty_standing.losses), (0, 1));

        // Persisted match matches the returned one.
        assert!(store.match_by_id(recorded.id).unwrap().is_completed());
    }

    #[test]
    fn test_exactly_once_recording() {
        let (mut store, league_id, trainer_ids, matches) = scheduled_league();
        let ash = trainer_ids[0];

        ResultRecorder::record(&mut store, matches[0].id, ash, Some(2), Some(1), vec![], now())
            .unwrap();

        let second = ResultRecorder::record(
            &mut store,
            matches[0].id,
            ash,
            Some(2),
            Some(1),
            vec![],
            now(),
        );
        assert!(matches!(second, Err(LeagueError::InvalidState(_))));

        // Aggregates changed exactly once.
        let ash_standing = store.standing_by_league_and_trainer(league_id, ash).unwrap();
        assert_eq!((ash_standing.wins, ash_standing.losses), (1, 0));
        assert_eq!(completed_wins(&store, league_id), 1);
    }

    #[test]
    fn test_wins_conservation() {
        let (mut store, league_id, _, matches) = scheduled_league();

        assert_eq!(completed_wins(&store, league_id), 0);
        assert_eq!(completed_matches(&store, league_id), 0);

        for m in &matches {
            ResultRecorder::record(&mut store, m.id, m.trainer1_id, Some(2), Some(0), vec![], now())
                .unwrap();

            // Sum of wins equals count of completed matches at all times.
            assert_eq!(
                completed_wins(&store, league_id) as usize,
                completed_matches(&store, league_id)
            );
        }
    }

    #[test]
    fn test_missing_standing_row_is_created_on_demand() {
        let (mut store, league_id, _, matches) = scheduled_league();

        // Simulate a trainer who joined after schedule generation: a match
        // exists but no standing row does.
        let late_joiner = store.add_trainer("Late Joiner", league_id, None);
        let extra = store.add_match(Match::scheduled(
            league_id,
            late_joiner,
            matches[0].trainer1_id,
            99,
            crate::r#match::MatchType::RegularSeason,
        ));

        ResultRecorder::record(&mut store, extra.id, late_joiner, Some(1), Some(0), vec![], now())
            .unwrap();

        let standing = store
            .standing_by_league_and_trainer(league_id, late_joiner)
            .unwrap();
        assert_eq!((standing.wins, standing.losses), (1, 0));
    }

    #[test]
    fn test_scenario_three_trainer_league() {
        // League with {Ash, Misty, Brock}: 3 matches, 3 zeroed standings,
        // one recorded result, a rejected re-record, standings ordered by wins.
        let (mut store, league_id, trainer_ids, matches) = scheduled_league();
        let (ash, misty) = (trainer_ids[0], trainer_ids[1]);

        assert_eq!(matches.len(), 3);
        assert_eq!(store.standings_by_league(league_id).len(), 3);

        let ash_vs_misty = matches
            .iter()
            .find(|m| m.is_participant(ash) && m.is_participant(misty))
            .unwrap();

        ResultRecorder::record(&mut store, ash_vs_misty.id, ash, Some(2), Some(1), vec![], now())
            .unwrap();

        assert!(matches!(
            ResultRecorder::record(&mut store, ash_vs_misty.id, ash, Some(2), Some(1), vec![], now()),
            Err(LeagueError::InvalidState(_))
        ));

        let rows = StandingsAggregator::standings(&store, league_id).unwrap();
        assert_eq!(rows[0].trainer_id, ash);
        assert_eq!((rows[0].wins, rows[0].losses), (1, 0));
        // Misty (0-1) and Brock (0-0) follow in unspecified relative order.
        assert!(rows[1..].iter().all(|s| s.wins == 0));
    }
}
