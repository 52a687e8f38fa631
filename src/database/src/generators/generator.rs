use crate::DatabaseEntity;
use core::store::LeagueStore;
use log::info;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds the runtime entity store from seed data: every seed league is
    /// created with its trainer roster. Matches and standings are produced
    /// later by the schedule generator, per league.
    pub fn generate(database: &DatabaseEntity) -> LeagueStore {
        let mut store = LeagueStore::new();

        for league_entity in &database.leagues {
            let league_id = store.add_league(
                &league_entity.name,
                league_entity.status,
                league_entity.roster_capacity,
            );

            for trainer_entity in &league_entity.trainers {
                store.add_trainer(
                    &trainer_entity.name,
                    league_id,
                    trainer_entity.discord_id.clone(),
                );
            }

            info!(
                "seeded league '{}' with {} trainers",
                league_entity.name,
                league_entity.trainers.len()
            );
        }

        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;

    #[test]
    fn test_generate_seeds_leagues_and_rosters() {
        let database = DatabaseLoader::load(0);
        let store = DatabaseGenerator::generate(&database);

        let leagues = store.leagues();
        assert_eq!(leagues.len(), database.leagues.len());

        for (league, entity) in leagues.iter().zip(&database.leagues) {
            assert_eq!(league.name, entity.name);
            assert_eq!(
                store.trainers_by_league(league.id).len(),
                entity.trainers.len()
            );
            // No matches or standings exist until a schedule is generated.
            assert!(store.matches_by_league(league.id).is_empty());
            assert!(store.standings_by_league(league.id).is_empty());
        }
    }
}
