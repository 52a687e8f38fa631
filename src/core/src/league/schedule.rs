use crate::error::LeagueError;
use crate::r#match::{Match, MatchType};
use crate::store::LeagueStore;
use itertools::Itertools;
use log::{info, warn};

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Generates the full single round-robin schedule for a league: one
    /// match per unordered trainer pair, n * (n - 1) / 2 matches for n trainers.
    ///
    /// `round_number` is a flat 1-based counter in pair-generation order,
    /// not a round-day assignment. The standings bootstrap runs on every
    /// invocation: each league trainer ends with exactly one standing row,
    /// existing rows are left as found.
    ///
    /// Idempotent: if the league already has matches, no new ones are
    /// created and the existing schedule is returned unchanged.
    pub fn generate(store: &mut LeagueStore, league_id: u32) -> Result<Vec<Match>, LeagueError> {
        let league = store.league(league_id).ok_or_else(|| {
            LeagueError::NotFound(format!("league with id {} not found", league_id))
        })?;

        let league_name = league.name.clone();

        let trainer_ids: Vec<u32> = store
            .trainers_by_league(league_id)
            .iter()
            .map(|t| t.id)
            .collect();

        if trainer_ids.len() < 2 {
            return Err(LeagueError::InvalidArgument(format!(
                "league '{}' has {} trainers, at least 2 required to generate matches",
                league_name,
                trainer_ids.len()
            )));
        }

        // Standings bootstrap. Runs before the regeneration guard so that a
        // trainer who joined after the schedule was generated still gets a
        // zeroed row.
        for &trainer_id in &trainer_ids {
            if store
                .standing_by_league_and_trainer(league_id, trainer_id)
                .is_none()
            {
                store.add_standing(league_id, trainer_id);
            }
        }

        let existing: Vec<Match> = store
            .matches_by_league(league_id)
            .into_iter()
            .cloned()
            .collect();

        if !existing.is_empty() {
            warn!(
                "league '{}' already has {} matches, skipping schedule generation",
                league_name,
                existing.len()
            );
            return Ok(existing);
        }

        let pairings: Vec<Match> = trainer_ids
            .iter()
            .copied()
            .tuple_combinations()
            .enumerate()
            .map(|(pair_index, (trainer1_id, trainer2_id))| {
                Match::scheduled(
                    league_id,
                    trainer1_id,
                    trainer2_id,
                    (pair_index + 1) as u32,
                    MatchType::RegularSeason,
                )
            })
            .collect();

        let generated = store.add_matches(pairings);

        info!(
            "generated {} round-robin matches for league '{}' ({} trainers)",
            generated.len(),
            league_name,
            trainer_ids.len()
        );

        Ok(generated)
    }
}
